// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Vendor API version probe.

use tracing::debug;

use crate::errors::{ReshapeError, WalletscanError};
use crate::provider::WalletDataProvider;

use super::types::ApiVersion;

/// Current version of the vendor's Web3 API.
///
/// Unlike the wallet queries this is a plain `Result`: a version probe has
/// no degraded shape to fall back to, so failures propagate to the caller.
pub async fn get_api_version<P>(
    provider: &P,
    api_key: &str,
) -> Result<ApiVersion, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    debug!("Fetching API version");
    let payload = provider.api_version(api_key).await?;
    Ok(serde_json::from_value(payload).map_err(ReshapeError::from)?)
}
