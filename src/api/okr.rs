//! OKR: periods, objectives, reviews and progress records

use super::context::ApiContext;
use super::types::Endpoint;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::pagination::{PageShape, PageStream};
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};
use serde::de::DeserializeOwned;

pub const LIST_PERIODS: Endpoint = Endpoint::new(Method::GET, "/open-apis/okr/v1/periods");
pub const LIST_USER_OKRS: Endpoint =
    Endpoint::new(Method::GET, "/open-apis/okr/v1/users/:user_id/okrs");
pub const BATCH_GET_OKRS: Endpoint =
    Endpoint::new(Method::GET, "/open-apis/okr/v1/okrs/batch_get");
pub const QUERY_REVIEWS: Endpoint = Endpoint::new(Method::GET, "/open-apis/okr/v1/reviews/query");
pub const CREATE_PROGRESS_RECORD: Endpoint =
    Endpoint::new(Method::POST, "/open-apis/okr/v1/progress_records");
pub const GET_PROGRESS_RECORD: Endpoint =
    Endpoint::new(Method::GET, "/open-apis/okr/v1/progress_records/:progress_id");
pub const UPDATE_PROGRESS_RECORD: Endpoint =
    Endpoint::new(Method::PUT, "/open-apis/okr/v1/progress_records/:progress_id");
pub const DELETE_PROGRESS_RECORD: Endpoint =
    Endpoint::new(Method::DELETE, "/open-apis/okr/v1/progress_records/:progress_id");

/// OKR resource group
#[derive(Debug, Clone, Copy)]
pub struct Okr<'a> {
    ctx: ApiContext<'a>,
}

impl<'a> Okr<'a> {
    pub(crate) fn new(ctx: ApiContext<'a>) -> Self {
        Self { ctx }
    }

    /// One page of OKR periods
    pub async fn list_periods(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&LIST_PERIODS, payload, options).await
    }

    /// Every page of OKR periods
    pub fn list_periods_iter<T>(&self, payload: Payload, options: &RequestOptions) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ctx
            .paginate(&LIST_PERIODS, payload, options, PageShape::default())
    }

    /// A user's OKRs; path param `user_id`, params `offset` and `limit`
    ///
    /// This endpoint pages by offset, so there is no stream variant.
    pub async fn list_user_okrs(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&LIST_USER_OKRS, payload, options).await
    }

    /// Fetch OKRs by id; `okr_ids` may be an array param
    pub async fn batch_get_okrs(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&BATCH_GET_OKRS, payload, options).await
    }

    /// Review records for `user_ids` over `period_ids`
    pub async fn query_reviews(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&QUERY_REVIEWS, payload, options).await
    }

    pub async fn create_progress_record(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&CREATE_PROGRESS_RECORD, payload, options).await
    }

    pub async fn get_progress_record(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&GET_PROGRESS_RECORD, payload, options).await
    }

    pub async fn update_progress_record(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&UPDATE_PROGRESS_RECORD, payload, options).await
    }

    pub async fn delete_progress_record(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&DELETE_PROGRESS_RECORD, payload, options).await
    }
}
