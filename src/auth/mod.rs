//! Authentication module
//!
//! Token acquisition is owned by an external collaborator; this module only
//! defines the seam. A [`TokenProvider`] hands out tokens by [`TokenType`],
//! and the [`Authenticator`] attaches the selected token to outgoing
//! requests as a bearer credential. Per-request tokens always win over the
//! provider.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{NoToken, StaticToken, TokenProvider, TokenType};
