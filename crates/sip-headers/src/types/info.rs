//! Call-Info, Alert-Info and Error-Info (RFC 3261 Sections 20.9, 20.4, 20.18).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::address as adapter;
use crate::types::equality::{compare, INFO_SPECIAL};
use crate::types::headers::HeaderName;
use crate::types::render::write_joined;
use crate::types::uri::Uri;
use crate::types::values::Values;

/// `<absoluteURI> *(;param)`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfoAddr {
    pub uri: Option<Uri>,
    pub params: Values,
}

impl InfoAddr {
    pub fn new(uri: Uri) -> Self {
        InfoAddr { uri: Some(uri), params: Values::new() }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(name, value);
        self
    }

    pub fn purpose(&self) -> Option<&str> {
        self.params.last("purpose")
    }

    pub fn is_empty(&self) -> bool {
        self.uri.is_none() && self.params.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.uri.as_ref().map_or(false, Uri::is_valid) && self.params.is_valid()
    }
}

impl PartialEq for InfoAddr {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri && compare(&self.params, &other.params, INFO_SPECIAL)
    }
}

impl fmt::Display for InfoAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(uri) = &self.uri {
            write!(f, "<{}>", uri)?;
        }
        self.params.write_to(f, true)
    }
}

impl FromStr for InfoAddr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(InfoAddr::default());
        }
        adapter::parse_info_addr(s)
    }
}

/// Call-Info header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallInfo(pub Vec<InfoAddr>);

/// Alert-Info header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertInfo(pub Vec<InfoAddr>);

/// Error-Info header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorInfo(pub Vec<InfoAddr>);

macro_rules! info_list {
    ($ty:ident, $name:expr) => {
        impl $ty {
            pub fn new(entries: Vec<InfoAddr>) -> Self {
                $ty(entries)
            }

            pub fn is_valid(&self) -> bool {
                !self.0.is_empty() && self.0.iter().all(InfoAddr::is_valid)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_joined(f, &self.0, ", ")
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                adapter::parse_info_list(s).map($ty)
            }
        }

        newtype_deref!($ty => Vec<InfoAddr>);
        impl_header!($ty, $name);
    };
}

info_list!(CallInfo, HeaderName::CallInfo);
info_list!(AlertInfo, HeaderName::AlertInfo);
info_list!(ErrorInfo, HeaderName::ErrorInfo);
