//! Meeting minutes

use super::context::ApiContext;
use super::types::Endpoint;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};

pub const GET_MINUTE: Endpoint =
    Endpoint::new(Method::GET, "/open-apis/minutes/v1/minutes/:minute_token");
pub const GET_MINUTE_STATISTICS: Endpoint = Endpoint::new(
    Method::GET,
    "/open-apis/minutes/v1/minutes/:minute_token/statistics",
);

/// Minutes resource group
#[derive(Debug, Clone, Copy)]
pub struct Minutes<'a> {
    ctx: ApiContext<'a>,
}

impl<'a> Minutes<'a> {
    pub(crate) fn new(ctx: ApiContext<'a>) -> Self {
        Self { ctx }
    }

    /// Minute metadata; path param `minute_token`
    pub async fn get_minute(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&GET_MINUTE, payload, options).await
    }

    /// View statistics of a minute
    pub async fn get_minute_statistics(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&GET_MINUTE_STATISTICS, payload, options).await
    }
}
