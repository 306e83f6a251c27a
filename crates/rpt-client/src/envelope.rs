//! Response envelope validation.

use rpt_model::FiltersData;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FetchError, Result};

/// Envelope status of a successful response.
pub const STATUS_OK: &str = "OK";

/// The `{ status, data }` wrapper around every API response body.
///
/// `data` is kept untyped until the status has been checked, so that a
/// failing envelope reports its status rather than a shape mismatch.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    /// Status reported by the API.
    pub status: String,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiEnvelope {
    /// Whether the API reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Check the status, then type the payload as filter data.
    pub fn into_filters(self) -> Result<FiltersData> {
        if !self.is_ok() {
            return Err(FetchError::Api {
                status: self.status,
            });
        }

        let data = self
            .data
            .ok_or_else(|| FetchError::JsonParse("envelope has no `data` field".to_string()))?;

        Ok(serde_json::from_value(data)?)
    }
}

/// Parse a filters response body into typed filter data.
pub fn parse_filters(body: &str) -> Result<FiltersData> {
    serde_json::from_str::<ApiEnvelope>(body)?.into_filters()
}
