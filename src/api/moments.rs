//! Moments (company social feed)

use super::context::ApiContext;
use super::types::Endpoint;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};

pub const GET_POST: Endpoint = Endpoint::new(Method::GET, "/open-apis/moments/v1/posts/:post_id");

#[derive(Debug, Clone, Copy)]
pub struct Moments<'a> {
    ctx: ApiContext<'a>,
}

impl<'a> Moments<'a> {
    pub(crate) fn new(ctx: ApiContext<'a>) -> Self {
        Self { ctx }
    }

    /// A single post; path param `post_id`
    pub async fn get_post(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&GET_POST, payload, options).await
    }
}
