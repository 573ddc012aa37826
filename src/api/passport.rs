//! Passport: login sessions

use super::context::ApiContext;
use super::types::Endpoint;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};

pub const QUERY_SESSIONS: Endpoint =
    Endpoint::new(Method::POST, "/open-apis/passport/v1/sessions/query");
pub const LOGOUT_SESSION: Endpoint =
    Endpoint::new(Method::POST, "/open-apis/passport/v1/sessions/logout");

/// Passport resource group
#[derive(Debug, Clone, Copy)]
pub struct Passport<'a> {
    ctx: ApiContext<'a>,
}

impl<'a> Passport<'a> {
    pub(crate) fn new(ctx: ApiContext<'a>) -> Self {
        Self { ctx }
    }

    /// Login sessions for the `user_ids` in the body
    pub async fn query_sessions(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&QUERY_SESSIONS, payload, options).await
    }

    /// Force a user's sessions to log out
    pub async fn logout_session(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&LOGOUT_SESSION, payload, options).await
    }
}
