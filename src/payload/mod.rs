//! Payload normalization
//!
//! Every resource method takes a [`Payload`] (path parameters, query
//! parameters, JSON body, headers) plus [`RequestOptions`] and runs it
//! through [`format_payload`] before templating and sending. The formatted
//! result is what the transport and the paginator consume.

mod format;
mod types;

pub use format::{format_payload, stringify_params};
pub use types::{FormattedPayload, Payload, RequestOptions};
