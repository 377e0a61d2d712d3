use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::parser::token::is_token;
use crate::types::equality::{compare, DISPOSITION_SPECIAL};
use crate::types::headers::HeaderName;
use crate::types::values::Values;

/// Content-Disposition header (RFC 3261 Section 20.11)
///
/// The disposition type (`session`, `render`, `icon`, `alert` or an
/// extension token) is compared case-insensitively. `handling` is special.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDisposition {
    pub disposition: String,
    pub params: Values,
}

impl ContentDisposition {
    pub fn new(disposition: impl Into<String>) -> Self {
        ContentDisposition { disposition: disposition.into(), params: Values::new() }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(name, value);
        self
    }

    /// `optional` or `required`; RFC 3261 defaults a missing value to
    /// `required`.
    pub fn handling(&self) -> &str {
        self.params.last("handling").unwrap_or("required")
    }

    pub fn is_valid(&self) -> bool {
        is_token(&self.disposition) && self.params.is_valid()
    }
}

impl PartialEq for ContentDisposition {
    fn eq(&self, other: &Self) -> bool {
        self.disposition.eq_ignore_ascii_case(&other.disposition)
            && compare(&self.params, &other.params, DISPOSITION_SPECIAL)
    }
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.disposition)?;
        self.params.write_to(f, true)
    }
}

impl FromStr for ContentDisposition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_content_disposition(s)
    }
}

impl_header!(ContentDisposition, HeaderName::ContentDisposition);
