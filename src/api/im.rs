//! Messaging: messages and chats

use super::context::ApiContext;
use super::types::Endpoint;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::pagination::{PageShape, PageStream};
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};
use serde::de::DeserializeOwned;

pub const CREATE_MESSAGE: Endpoint = Endpoint::new(Method::POST, "/open-apis/im/v1/messages");
pub const LIST_MESSAGES: Endpoint = Endpoint::new(Method::GET, "/open-apis/im/v1/messages");
pub const GET_MESSAGE: Endpoint =
    Endpoint::new(Method::GET, "/open-apis/im/v1/messages/:message_id");
pub const UPDATE_MESSAGE: Endpoint =
    Endpoint::new(Method::PUT, "/open-apis/im/v1/messages/:message_id");
pub const DELETE_MESSAGE: Endpoint =
    Endpoint::new(Method::DELETE, "/open-apis/im/v1/messages/:message_id");
pub const REPLY_MESSAGE: Endpoint =
    Endpoint::new(Method::POST, "/open-apis/im/v1/messages/:message_id/reply");
pub const LIST_CHATS: Endpoint = Endpoint::new(Method::GET, "/open-apis/im/v1/chats");
pub const GET_CHAT: Endpoint = Endpoint::new(Method::GET, "/open-apis/im/v1/chats/:chat_id");

/// Messaging resource group
#[derive(Debug, Clone, Copy)]
pub struct Im<'a> {
    ctx: ApiContext<'a>,
}

impl<'a> Im<'a> {
    pub(crate) fn new(ctx: ApiContext<'a>) -> Self {
        Self { ctx }
    }

    /// Send a message
    ///
    /// Expects `receive_id_type` as a param and `receive_id`, `msg_type`,
    /// `content` in the body.
    pub async fn create_message(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&CREATE_MESSAGE, payload, options).await
    }

    /// Fetch one message; path param `message_id`
    pub async fn get_message(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&GET_MESSAGE, payload, options).await
    }

    /// Recall a message; path param `message_id`
    pub async fn delete_message(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&DELETE_MESSAGE, payload, options).await
    }

    /// Reply in a message's thread; path param `message_id`
    pub async fn reply_message(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&REPLY_MESSAGE, payload, options).await
    }

    /// Edit a sent message; path param `message_id`
    pub async fn update_message(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&UPDATE_MESSAGE, payload, options).await
    }

    /// One page of a chat's history
    ///
    /// Params: `container_id_type`, `container_id`, optional `page_size`
    /// and `page_token`.
    pub async fn list_messages(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&LIST_MESSAGES, payload, options).await
    }

    /// Every page of a chat's history
    pub fn list_messages_iter<T>(&self, payload: Payload, options: &RequestOptions) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ctx
            .paginate(&LIST_MESSAGES, payload, options, PageShape::default())
    }

    /// One page of the chats the caller belongs to
    pub async fn list_chats(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&LIST_CHATS, payload, options).await
    }

    /// Every page of the chats the caller belongs to
    pub fn list_chats_iter<T>(&self, payload: Payload, options: &RequestOptions) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ctx
            .paginate(&LIST_CHATS, payload, options, PageShape::default())
    }

    /// Chat details; path param `chat_id`
    pub async fn get_chat(
        &self,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.ctx.call(&GET_CHAT, payload, options).await
    }
}
