use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::ranges as adapter;
use crate::parser::token::is_token;
use crate::types::accept::{quality_of, range_params_valid};
use crate::types::equality::compare_quality;
use crate::types::headers::HeaderName;
use crate::types::render::write_joined;
use crate::types::values::Values;

/// `codings *(;param)` where codings is a content-coding or `*`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodingRange {
    pub coding: String,
    pub params: Values,
}

impl EncodingRange {
    pub fn new(coding: impl Into<String>) -> Self {
        EncodingRange { coding: coding.into(), params: Values::new() }
    }

    pub fn quality(&self) -> OrderedFloat<f32> {
        quality_of(&self.params)
    }

    pub fn is_empty(&self) -> bool {
        self.coding.is_empty() && self.params.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        is_token(&self.coding) && range_params_valid(&self.params)
    }
}

impl PartialEq for EncodingRange {
    fn eq(&self, other: &Self) -> bool {
        self.coding.eq_ignore_ascii_case(&other.coding) && compare_quality(&self.params, &other.params)
    }
}

impl fmt::Display for EncodingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.coding)?;
        self.params.write_to(f, true)
    }
}

impl FromStr for EncodingRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(EncodingRange::default());
        }
        adapter::parse_encoding_range(s)
    }
}

/// Accept-Encoding header (RFC 3261 Section 20.2)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcceptEncoding(pub Vec<EncodingRange>);

impl AcceptEncoding {
    pub fn new(ranges: Vec<EncodingRange>) -> Self {
        AcceptEncoding(ranges)
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().all(EncodingRange::is_valid)
    }
}

impl fmt::Display for AcceptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for AcceptEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_accept_encoding(s).map(AcceptEncoding)
    }
}

newtype_deref!(AcceptEncoding => Vec<EncodingRange>);
impl_header!(AcceptEncoding, HeaderName::AcceptEncoding);
