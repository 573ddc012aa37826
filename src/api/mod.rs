//! Resource groups
//!
//! Each group is a thin handle over an [`ApiContext`] and exposes one
//! method per endpoint. One-shot methods return the platform envelope;
//! `*_iter` methods return a lazy [`crate::PageStream`] over every page.
//!
//! Every method takes a [`crate::Payload`] (path params, query params,
//! body, headers) and [`crate::RequestOptions`] (per-call headers and
//! tokens). Endpoint descriptors are public so the same calls can be made
//! through [`crate::LarkClient::request`] and [`crate::LarkClient::paginate`].

mod context;
mod types;

pub mod im;
pub mod minutes;
pub mod moments;
pub mod ocr;
pub mod okr;
pub mod passport;
pub mod payroll;

pub use context::ApiContext;
pub use im::Im;
pub use minutes::Minutes;
pub use moments::Moments;
pub use ocr::Ocr;
pub use okr::Okr;
pub use passport::Passport;
pub use payroll::Payroll;
pub use types::Endpoint;
