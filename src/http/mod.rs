//! HTTP transport module
//!
//! Provides the shared transport every resource group sends through.
//!
//! # Features
//!
//! - **Base URL resolution**: relative endpoint paths are joined to the configured domain
//! - **Authentication**: bearer tokens from the [`crate::auth`] seam
//! - **Envelope decoding**: `{code, msg, data}` bodies, non-zero codes become [`crate::Error::Api`]
//!
//! Requests are sent once; there is no retry or rate limiting layer.

mod client;
mod envelope;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use envelope::ApiResponse;

#[cfg(test)]
mod tests;
