// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP-level tests for the Moralis provider.
//!
//! Simulates the vendor with wiremock: route shapes, the credential header,
//! query parameter encoding, and the mapping of non-success and undecodable
//! responses onto [`ProviderError`].

use serde_json::json;
use walletscan::provider::{
    NativeBalanceParams, NftMetadataParams, SolBalanceParams, TokenBalancesParams,
    WalletDataProvider,
};
use walletscan::{wallet, MoralisProvider, ProviderError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";
const ADDRESS: &str = "0x26fcbd3afebbe28d0a8684f790c48368d21665b5";

async fn provider_for(server: &MockServer) -> MoralisProvider {
    MoralisProvider::builder()
        .evm_base_url(format!("{}/api/v2.2", server.uri()))
        .sol_base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn native_balance_hits_balance_route_with_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v2.2/{ADDRESS}/balance")))
        .and(query_param("chain", "eth"))
        .and(header("X-API-Key", API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "balance": "319973658297093018740" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let params = NativeBalanceParams {
        address: ADDRESS.to_string(),
        chain: "eth".to_string(),
    };
    let payload = provider.get_native_balance(API_KEY, params).await.unwrap();
    assert_eq!(payload["balance"], "319973658297093018740");
}

#[tokio::test]
async fn token_balances_encode_contract_filter_as_indexed_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v2.2/{ADDRESS}/erc20")))
        .and(query_param("chain", "eth"))
        .and(query_param("token_addresses[0]", "0xaaa"))
        .and(query_param("token_addresses[1]", "0xbbb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let params = TokenBalancesParams {
        address: ADDRESS.to_string(),
        chain: "eth".to_string(),
        token_addresses: Some(vec!["0xaaa".to_string(), "0xbbb".to_string()]),
    };
    provider.get_token_balances(API_KEY, params).await.unwrap();
}

#[tokio::test]
async fn nft_metadata_route_includes_contract_and_token_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.2/nft/0xb47e/3931"))
        .and(query_param("format", "decimal"))
        .and(query_param("normalizeMetadata", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_id": "3931" })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let params = NftMetadataParams {
        address: "0xb47e".to_string(),
        token_id: "3931".to_string(),
        chain: "eth".to_string(),
        format: "decimal".to_string(),
        normalize_metadata: true,
    };
    let payload = provider.get_nft_metadata(API_KEY, params).await.unwrap();
    assert_eq!(payload["token_id"], "3931");
}

#[tokio::test]
async fn sol_balance_uses_gateway_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/mainnet/BWeBmN8z/balance"))
        .and(header("X-API-Key", API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "lamports": "0", "solana": "0" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let params = SolBalanceParams {
        address: "BWeBmN8z".to_string(),
        network: "mainnet".to_string(),
    };
    let payload = provider.get_sol_balance(API_KEY, params).await.unwrap();
    assert_eq!(payload["lamports"], "0");
}

#[tokio::test]
async fn api_version_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.2/web3/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "0.0.53" })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let payload = provider.api_version(API_KEY).await.unwrap();
    assert_eq!(payload["version"], "0.0.53");
}

#[tokio::test]
async fn non_success_status_maps_to_api_error_with_vendor_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v2.2/{ADDRESS}/balance")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid api key" })),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let params = NativeBalanceParams {
        address: ADDRESS.to_string(),
        chain: "eth".to_string(),
    };
    let error = provider
        .get_native_balance(API_KEY, params)
        .await
        .unwrap_err();
    match error {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v2.2/{ADDRESS}/balance")))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let params = NativeBalanceParams {
        address: ADDRESS.to_string(),
        chain: "eth".to_string(),
    };
    let error = provider
        .get_native_balance(API_KEY, params)
        .await
        .unwrap_err();
    assert!(matches!(error, ProviderError::Decode(_)));
}

#[tokio::test]
async fn wrapper_over_real_transport_reshapes_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v2.2/{ADDRESS}/balance")))
        .and(query_param("chain", "eth"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "balance": "1500000000000000000" })),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let result = wallet::get_native_balance(&provider, API_KEY, ADDRESS, "eth").await;
    let balance = result.ok().expect("success");
    assert_eq!(balance.formatted_balance, "1.500000");
    assert_eq!(balance.symbol, "ETH");
}

#[tokio::test]
async fn wrapper_over_failing_transport_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v2.2/{ADDRESS}/balance")))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let result = wallet::get_native_balance(&provider, API_KEY, ADDRESS, "eth").await;
    assert!(result.is_degraded());
    assert!(result.error().unwrap().contains("upstream exploded"));
}
