//! Pagination types
//!
//! Defines the page shape descriptor, the stripped page body and the
//! events a page stream yields.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Truthiness of a loosely typed flag
///
/// Empty strings, zero and `null` are false. Other strings, numbers,
/// arrays and objects are true.
fn truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Describes where a page keeps its pagination fields and items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShape {
    /// Boolean field telling whether more pages remain
    pub has_more_field: String,
    /// Fields that may carry the next cursor, checked in order
    pub token_fields: Vec<String>,
    /// Field holding the page's records
    pub items_field: String,
    /// Query parameter the cursor is sent back in
    pub token_param: String,
}

impl Default for PageShape {
    fn default() -> Self {
        Self {
            has_more_field: "has_more".to_string(),
            token_fields: vec!["page_token".to_string(), "next_page_token".to_string()],
            items_field: "items".to_string(),
            token_param: "page_token".to_string(),
        }
    }
}

impl PageShape {
    /// Default shape with a different items field
    pub fn items(field: impl Into<String>) -> Self {
        Self {
            items_field: field.into(),
            ..Self::default()
        }
    }

    /// Set the has-more field
    #[must_use]
    pub fn with_has_more_field(mut self, field: impl Into<String>) -> Self {
        self.has_more_field = field.into();
        self
    }

    /// Replace the token fields
    #[must_use]
    pub fn with_token_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.token_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the query parameter the cursor is sent in
    #[must_use]
    pub fn with_token_param(mut self, param: impl Into<String>) -> Self {
        self.token_param = param.into();
        self
    }

    /// Split a page's `data` into its body and pagination fields
    ///
    /// Missing or `null` data is an empty last page. `has_more` is read by
    /// truthiness and defaults to false; the first non-empty token field wins.
    pub fn split<T: DeserializeOwned>(&self, data: JsonValue) -> Result<SplitPage<T>> {
        let mut map = match data {
            JsonValue::Object(map) => map,
            JsonValue::Null => JsonObject::new(),
            other => {
                return Err(Error::pagination(format!(
                    "page data must be an object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let has_more = match map.remove(&self.has_more_field) {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::Bool(b)) => b,
            Some(other) => {
                let more = truthy(&other);
                warn!(
                    "Non-boolean '{}' in page: {}, treating as {}",
                    self.has_more_field, other, more
                );
                more
            }
        };

        let mut token = None;
        for field in &self.token_fields {
            let value = map.remove(field);
            if token.is_none() {
                token = value
                    .as_ref()
                    .and_then(JsonValue::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
            }
        }

        let items = match map.remove(&self.items_field) {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                Error::decode(format!("invalid '{}' in page: {e}", self.items_field))
            })?,
        };

        Ok(SplitPage {
            body: PageBody { items, rest: map },
            has_more,
            token,
        })
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// One page with pagination fields removed
#[derive(Debug, Clone, PartialEq)]
pub struct PageBody<T> {
    /// Records on this page
    pub items: Vec<T>,
    /// Every other field the page carried
    pub rest: JsonObject,
}

impl<T> PageBody<T> {
    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Serialize> PageBody<T> {
    /// Reassemble the stripped page as JSON, items under `items_field`
    pub fn to_value(&self, items_field: &str) -> Result<JsonValue> {
        let mut map = self.rest.clone();
        map.insert(items_field.to_string(), serde_json::to_value(&self.items)?);
        Ok(JsonValue::Object(map))
    }
}

/// A page split into body and cursor bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPage<T> {
    /// Stripped page
    pub body: PageBody<T>,
    /// Whether the server reported more pages
    pub has_more: bool,
    /// Cursor for the next page
    pub token: Option<String>,
}

/// What a page stream yields
#[derive(Debug)]
pub enum PageEvent<T> {
    /// A page was fetched
    Page(PageBody<T>),
    /// Fetching failed; this is the last event of the stream
    Failed(Error),
}

impl<T> PageEvent<T> {
    /// Check if this is a page
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page(_))
    }

    /// Check if this is the failure marker
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrow the page, if any
    pub fn page(&self) -> Option<&PageBody<T>> {
        match self {
            Self::Page(body) => Some(body),
            Self::Failed(_) => None,
        }
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> Result<PageBody<T>> {
        match self {
            Self::Page(body) => Ok(body),
            Self::Failed(e) => Err(e),
        }
    }
}

/// Cursor bookkeeping owned by one stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorState {
    /// Whether another fetch should be made
    pub has_more: bool,
    /// Cursor to send with the next fetch
    pub page_token: Option<String>,
    /// Pages fetched so far
    pub pages_fetched: u64,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            has_more: true,
            page_token: None,
            pages_fetched: 0,
        }
    }
}

impl CursorState {
    /// Fresh state: more pages, no cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page
    pub fn advance(&mut self, has_more: bool, token: Option<String>) {
        self.pages_fetched += 1;
        self.has_more = has_more;
        self.page_token = token;
    }

    /// Stop after the current page
    pub fn finish(&mut self) {
        self.has_more = false;
    }
}
