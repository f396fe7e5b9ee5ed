//! Request body content
//!
//! `Content` pairs an opaque payload with the content type it is declared as.
//! The client sends both through unmodified on POST and PUT.

use crate::error::Result;
use bytes::Bytes;
use serde::Serialize;

/// Content type used by [`Content::json`]
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type used by [`Content::text`]
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Content type used by [`Content::form`]
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A request body and its content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    body: Bytes,
    content_type: String,
}

impl Content {
    /// Create content from raw bytes and a content type
    pub fn new(body: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
        }
    }

    /// Plain UTF-8 text
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text.into(), TEXT_CONTENT_TYPE)
    }

    /// Serialize a value as a JSON body
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(body, JSON_CONTENT_TYPE))
    }

    /// URL-encoded form fields, in the order given
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        Self::new(body, FORM_CONTENT_TYPE)
    }

    /// The payload bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The declared content type
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Bytes, String) {
        (self.body, self.content_type)
    }
}
