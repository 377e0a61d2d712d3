use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::ranges as adapter;
use crate::parser::token::is_token;
use crate::types::equality::compare_strict;
use crate::types::headers::HeaderName;
use crate::types::values::Values;

/// A concrete media type: `type/subtype *(;param)`.
///
/// Unlike Accept ranges every parameter is significant: two media types
/// are equal only when they carry the same parameters with equal values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MimeType {
    pub mime_type: String,
    pub subtype: String,
    pub params: Values,
}

impl MimeType {
    pub fn new(mime_type: impl Into<String>, subtype: impl Into<String>) -> Self {
        MimeType {
            mime_type: mime_type.into(),
            subtype: subtype.into(),
            params: Values::new(),
        }
    }

    /// `application/sdp`
    pub fn sdp() -> Self {
        MimeType::new("application", "sdp")
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(name, value);
        self
    }

    pub fn charset(&self) -> Option<&str> {
        self.params.last("charset")
    }

    pub fn is_empty(&self) -> bool {
        self.mime_type.is_empty() && self.subtype.is_empty() && self.params.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        is_token(&self.mime_type) && is_token(&self.subtype) && self.params.is_valid()
    }
}

impl PartialEq for MimeType {
    fn eq(&self, other: &Self) -> bool {
        self.mime_type.eq_ignore_ascii_case(&other.mime_type)
            && self.subtype.eq_ignore_ascii_case(&other.subtype)
            && compare_strict(&self.params, &other.params)
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.mime_type, self.subtype)?;
        self.params.write_to(f, true)
    }
}

impl FromStr for MimeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(MimeType::default());
        }
        adapter::parse_mime_type(s)
    }
}

/// Content-Type header (RFC 3261 Section 20.15)
#[derive(Debug, Clone, PartialEq)]
pub struct ContentType(pub MimeType);

impl ContentType {
    pub fn new(mime: MimeType) -> Self {
        ContentType(mime)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::ParseError("Empty Content-Type".to_string()));
        }
        adapter::parse_mime_type(s).map(ContentType)
    }
}

newtype_deref!(ContentType => MimeType);
impl_header!(ContentType, HeaderName::ContentType);
