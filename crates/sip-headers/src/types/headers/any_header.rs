use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::header::Header;
use super::header_name::HeaderName;
use super::typed_header::TypedHeader;
use crate::parser::token::{is_text, is_token};

/// Catch-all header: any name with its raw value text.
///
/// Produced for names nobody registered a parser for, and for known names
/// whose registered parser declined the value.
///
/// ```
/// use rvoip_sip_headers::prelude::*;
///
/// let h = AnyHeader::new("x-custom-header", "some value");
/// assert_eq!(h.name(), HeaderName::Other("X-Custom-Header".into()));
/// assert_eq!(h.to_header_string(&RenderOptions::default()), "X-Custom-Header: some value");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnyHeader {
    pub name: HeaderName,
    pub value: String,
}

impl AnyHeader {
    /// `name` is canonicalized; `value` is kept as given.
    pub fn new(name: impl AsRef<str>, value: impl Into<String>) -> Self {
        AnyHeader {
            name: HeaderName::from_canonical(name.as_ref().trim()),
            value: value.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        is_token(self.name.as_str()) && is_text(&self.value)
    }
}

/// Values compare byte for byte; names by canonical form.
impl PartialEq for AnyHeader {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl fmt::Display for AnyHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Header for AnyHeader {
    fn name(&self) -> HeaderName {
        self.name.clone()
    }

    fn validate(&self) -> bool {
        self.is_valid()
    }

    fn equal(&self, other: &dyn Header) -> bool {
        TypedHeader::unwrap_dyn(other)
            .as_any()
            .downcast_ref::<AnyHeader>()
            .map_or(false, |o| self == o)
    }

    fn clone_header(&self) -> Box<dyn Header> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
