//! Single blocking GET against the feed endpoint.

use crate::error::SyncError;

/// Fetch the raw feed payload.
///
/// Transport defaults apply throughout: no retry, no timeout tuning, no
/// redirect customization. Status codes are not inspected — a non-2xx
/// body simply fails to parse downstream.
pub fn fetch(url: &str) -> Result<Vec<u8>, SyncError> {
  let response = reqwest::blocking::get(url).map_err(|source| SyncError::Fetch {
    url: url.to_string(),
    source,
  })?;
  let body = response.bytes().map_err(SyncError::Read)?;
  Ok(body.to_vec())
}
