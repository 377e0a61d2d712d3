//! Accept header and the quality-value helpers shared by all range lists.
//!
//! A missing `q` counts as `q=1` when ranges are compared, and `q` is a
//! special parameter: ranges differing only in their quality are different
//! preferences.
//!
//! ```
//! use rvoip_sip_headers::types::accept::Accept;
//!
//! let accept: Accept = "text/plain;q=0.9;a=123, text/csv".parse().unwrap();
//! assert_eq!(accept.to_string(), "text/plain;q=0.9;a=123, text/csv");
//! assert_eq!(accept[0].quality().into_inner(), 0.9);
//! assert_eq!(accept[1].quality().into_inner(), 1.0);
//! ```

use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::ranges as adapter;
use crate::parser::token::is_token;
use crate::types::equality::compare_quality;
use crate::types::headers::HeaderName;
use crate::types::render::write_joined;
use crate::types::values::Values;

/// qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )
pub fn is_qvalue(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let frac_ok = |allowed: fn(char) -> bool| frac.map_or(true, |f| f.len() <= 3 && f.chars().all(allowed));
    match int {
        "0" => frac_ok(|c| c.is_ascii_digit()),
        "1" => frac_ok(|c| c == '0'),
        _ => false,
    }
}

/// The `q` parameter, 1.0 when absent or unparsable.
pub fn quality_of(params: &Values) -> OrderedFloat<f32> {
    OrderedFloat(params.last("q").and_then(|q| q.parse().ok()).unwrap_or(1.0))
}

/// Parameter validity plus a well-formed `q`, if present.
pub(crate) fn range_params_valid(params: &Values) -> bool {
    params.is_valid() && params.last("q").map_or(true, is_qvalue)
}

/// One entry of an Accept header: `type/subtype *(;param)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MimeRange {
    pub mime_type: String,
    pub subtype: String,
    pub params: Values,
}

impl MimeRange {
    pub fn new(mime_type: impl Into<String>, subtype: impl Into<String>) -> Self {
        MimeRange {
            mime_type: mime_type.into(),
            subtype: subtype.into(),
            params: Values::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(name, value);
        self
    }

    pub fn quality(&self) -> OrderedFloat<f32> {
        quality_of(&self.params)
    }

    pub fn is_empty(&self) -> bool {
        self.mime_type.is_empty() && self.subtype.is_empty() && self.params.is_empty()
    }

    /// True when `mime_type/subtype` is covered by this range, honouring
    /// `*` wildcards.
    pub fn matches(&self, mime_type: &str, subtype: &str) -> bool {
        (self.mime_type == "*" || self.mime_type.eq_ignore_ascii_case(mime_type))
            && (self.subtype == "*" || self.subtype.eq_ignore_ascii_case(subtype))
    }

    pub fn is_valid(&self) -> bool {
        is_token(&self.mime_type) && is_token(&self.subtype) && range_params_valid(&self.params)
    }
}

impl PartialEq for MimeRange {
    fn eq(&self, other: &Self) -> bool {
        self.mime_type.eq_ignore_ascii_case(&other.mime_type)
            && self.subtype.eq_ignore_ascii_case(&other.subtype)
            && compare_quality(&self.params, &other.params)
    }
}

impl fmt::Display for MimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mime_type)?;
        if !self.subtype.is_empty() {
            write!(f, "/{}", self.subtype)?;
        }
        self.params.write_to(f, true)
    }
}

impl FromStr for MimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(MimeRange::default());
        }
        adapter::parse_mime_range(s)
    }
}

/// Accept header (RFC 3261 Section 20.1)
///
/// An empty Accept is meaningful (no body acceptable) and valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accept(pub Vec<MimeRange>);

impl Accept {
    pub fn new(ranges: Vec<MimeRange>) -> Self {
        Accept(ranges)
    }

    /// Ranges ordered by descending quality, stable for equal qualities.
    pub fn by_preference(&self) -> Vec<&MimeRange> {
        let mut sorted: Vec<&MimeRange> = self.0.iter().collect();
        sorted.sort_by(|a, b| b.quality().cmp(&a.quality()));
        sorted
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().all(MimeRange::is_valid)
    }
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for Accept {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_accept(s).map(Accept)
    }
}

newtype_deref!(Accept => Vec<MimeRange>);
impl_header!(Accept, HeaderName::Accept);
