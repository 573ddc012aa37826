//! `format_payload` implementation

use super::types::{FormattedPayload, Payload, RequestOptions};
use crate::auth::TokenType;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, StringMap};

/// Normalize a payload for sending
///
/// - headers: `defaults`, then payload headers, then option headers (later wins)
/// - params: nulls dropped, scalars stringified, arrays repeated, objects as JSON
/// - data: `null` is treated as no body
/// - token: user token, then tenant token, from the options
pub fn format_payload(
    payload: Payload,
    options: &RequestOptions,
    defaults: &StringMap,
) -> Result<FormattedPayload> {
    let mut headers = defaults.clone();
    headers.extend(payload.headers);
    headers.extend(options.headers.clone());

    let params = stringify_params(&payload.params)?;

    let data = payload.data.filter(|d| !d.is_null());

    let (token, token_type) = match (&options.user_access_token, &options.tenant_access_token) {
        (Some(user), _) => (Some(user.clone()), Some(TokenType::User)),
        (None, Some(tenant)) => (Some(tenant.clone()), Some(TokenType::Tenant)),
        (None, None) => (None, options.token_type),
    };

    Ok(FormattedPayload {
        headers,
        params,
        data,
        path: payload.path,
        token,
        token_type,
    })
}

/// Flatten query parameters into sorted `(key, value)` pairs
pub fn stringify_params(params: &JsonObject) -> Result<Vec<(String, String)>> {
    let mut out = Vec::with_capacity(params.len());

    for (key, value) in params {
        if key.is_empty() {
            return Err(Error::invalid_payload("empty query parameter name"));
        }
        match value {
            JsonValue::Null => {}
            JsonValue::Array(values) => {
                for v in values {
                    if let Some(s) = scalar_to_string(v)? {
                        out.push((key.clone(), s));
                    }
                }
            }
            other => {
                if let Some(s) = scalar_to_string(other)? {
                    out.push((key.clone(), s));
                }
            }
        }
    }

    // stable: repeated keys keep their array order
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

fn scalar_to_string(value: &JsonValue) -> Result<Option<String>> {
    Ok(match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Array(_) | JsonValue::Object(_) => Some(serde_json::to_string(value)?),
    })
}
