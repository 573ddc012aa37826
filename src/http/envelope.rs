//! Platform response envelope

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Every open platform response is wrapped as `{code, msg, data}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Zero on success, platform error code otherwise
    #[serde(default)]
    pub code: i64,
    /// Human readable status
    #[serde(default)]
    pub msg: String,
    /// Response payload
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the platform reported success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Turn a non-zero code into an error
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::api(self.code, self.msg))
        }
    }

    /// Take the payload, failing when it is absent
    pub fn into_data(self) -> Result<T> {
        self.data
            .ok_or_else(|| Error::decode("response envelope has no data"))
    }
}

/// Pull `{code, msg}` out of an error body, if it is an envelope with a non-zero code
pub(crate) fn api_error_from_body(body: &str) -> Option<Error> {
    let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(body).ok()?;
    (!envelope.is_success()).then(|| Error::api(envelope.code, envelope.msg))
}
