// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Lark Client
//!
//! A Rust client for the Feishu / Lark open platform REST API.
//!
//! ## Features
//!
//! - **Resource groups**: messaging, OKR, payroll, passport, OCR, minutes, moments
//! - **Lazy pagination**: every cursor-paginated list has a `*_iter` stream variant
//! - **Pluggable tokens**: bring your own [`TokenProvider`]; per-call tokens override it
//! - **Uniform errors**: transport, HTTP and platform failures share one [`Error`] type
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lark_client::{ClientConfig, JsonValue, LarkClient, PageEvent, Payload, RequestOptions, Result};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = LarkClient::new(ClientConfig::from_env()?)?;
//!
//!     // One page, pagination fields included
//!     let page = client
//!         .im()
//!         .list_chats(Payload::new().param("page_size", 20), &RequestOptions::new())
//!         .await?;
//!
//!     // Every page, one at a time
//!     let mut chats = client
//!         .im()
//!         .list_chats_iter::<JsonValue>(Payload::new(), &RequestOptions::new());
//!     while let Some(event) = chats.next().await {
//!         match event {
//!             PageEvent::Page(body) => println!("{} chats", body.items.len()),
//!             PageEvent::Failed(e) => eprintln!("stopped: {e}"),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            LarkClient                            │
//! │ im()  okr()  payroll()  passport()  ocr()  minutes()  moments()  │
//! └──────────────────────────────────────────────────────────────────┘
//!                                │ ApiContext
//! ┌──────────┬───────────┬───────┴───────┬───────────┬───────────────┐
//! │ Payload  │ Template  │   Paginate    │   HTTP    │    Auth       │
//! ├──────────┼───────────┼───────────────┼───────────┼───────────────┤
//! │ headers  │ :param    │ has_more      │ reqwest   │ TokenProvider │
//! │ params   │ encoding  │ page_token    │ envelope  │ bearer        │
//! └──────────┴───────────┴───────────────┴───────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Token provider seam and bearer authentication
pub mod auth;

/// Request payload normalization
pub mod payload;

/// Path templating
pub mod template;

/// HTTP transport and response envelope
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Resource groups and endpoints
pub mod api;

/// Top-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{ApiContext, Endpoint};
pub use auth::{NoToken, StaticToken, TokenProvider, TokenType};
pub use client::{LarkClient, LarkClientBuilder};
pub use config::{ClientConfig, Domain};
pub use http::ApiResponse;
pub use pagination::{PageBody, PageEvent, PageShape, PageStream};
pub use payload::{Payload, RequestOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
