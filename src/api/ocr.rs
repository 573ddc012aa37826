//! Optical character recognition

use super::context::ApiContext;
use super::types::Endpoint;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;

pub const BASIC_RECOGNIZE: Endpoint = Endpoint::new(
    Method::POST,
    "/open-apis/optical_char_recognition/v1/image/basic_recognize",
);

/// OCR resource group
#[derive(Debug, Clone, Copy)]
pub struct Ocr<'a> {
    ctx: ApiContext<'a>,
}

impl<'a> Ocr<'a> {
    pub(crate) fn new(ctx: ApiContext<'a>) -> Self {
        Self { ctx }
    }

    /// Recognize text in a base64-encoded image
    ///
    /// The recognized lines come back under `data.text_list`.
    pub async fn basic_recognize(
        &self,
        image_base64: impl Into<String>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        let payload = Payload::new().data(json!({ "image": image_base64.into() }));
        self.ctx.call(&BASIC_RECOGNIZE, payload, options).await
    }

    /// Recognize text in raw image bytes
    pub async fn basic_recognize_bytes(
        &self,
        image: &[u8],
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.basic_recognize(STANDARD.encode(image), options).await
    }
}
