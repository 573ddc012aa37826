//! Payroll: accounting items, cost allocation, pay groups and payment details

use super::context::ApiContext;
use super::types::Endpoint;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::pagination::{PageShape, PageStream};
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};
use serde::de::DeserializeOwned;

pub const LIST_ACCT_ITEMS: Endpoint =
    Endpoint::new(Method::GET, "/open-apis/payroll/v1/acct_items");
pub const LIST_COST_ALLOCATION_PLANS: Endpoint =
    Endpoint::new(Method::GET, "/open-apis/payroll/v1/cost_allocation_plans");
pub const LIST_PAYGROUPS: Endpoint = Endpoint::new(Method::GET, "/open-apis/payroll/v1/paygroups");
pub const QUERY_PAYMENT_DETAILS: Endpoint =
    Endpoint::new(Method::POST, "/open-apis/payroll/v1/payment_detail/query");
pub const ARCHIVE_PAYMENT_ACTIVITY: Endpoint =
    Endpoint::new(Method::POST, "/open-apis/payroll/v1/payment_activitys/archive");

/// Payroll resource group
#[derive(Debug, Clone, Copy)]
pub struct Payroll<'a> {
    ctx: ApiContext<'a>,
}

impl<'a> Payroll<'a> {
    pub(crate) fn new(ctx: ApiContext<'a>) -> Self {
        Self { ctx }
    }

    pub async fn list_acct_items(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&LIST_ACCT_ITEMS, payload, options).await
    }

    pub fn list_acct_items_iter<T>(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ctx
            .paginate(&LIST_ACCT_ITEMS, payload, options, PageShape::default())
    }

    /// Cost allocation plans; requires `pay_period`
    pub async fn list_cost_allocation_plans(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx
            .call(&LIST_COST_ALLOCATION_PLANS, payload, options)
            .await
    }

    pub fn list_cost_allocation_plans_iter<T>(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ctx.paginate(
            &LIST_COST_ALLOCATION_PLANS,
            payload,
            options,
            PageShape::default(),
        )
    }

    pub async fn list_paygroups(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&LIST_PAYGROUPS, payload, options).await
    }

    pub fn list_paygroups_iter<T>(&self, payload: Payload, options: &RequestOptions) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ctx
            .paginate(&LIST_PAYGROUPS, payload, options, PageShape::default())
    }

    /// Payment details of one activity; filters go in the body, the cursor
    /// in the query string
    pub async fn query_payment_details(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&QUERY_PAYMENT_DETAILS, payload, options).await
    }

    /// Every page of an activity's payment details (items under `payment_details`)
    pub fn query_payment_details_iter<T>(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ctx.paginate(
            &QUERY_PAYMENT_DETAILS,
            payload,
            options,
            PageShape::items("payment_details"),
        )
    }

    /// Archive a payment activity; body carries `activity_id`
    pub async fn archive_payment_activity(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx
            .call(&ARCHIVE_PAYMENT_ACTIVITY, payload, options)
            .await
    }
}
