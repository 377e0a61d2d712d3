use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::ranges as adapter;
use crate::types::accept::{quality_of, range_params_valid};
use crate::types::equality::compare_quality;
use crate::types::headers::HeaderName;
use crate::types::render::write_joined;
use crate::types::values::Values;

/// language-range = ( 1*8ALPHA *( "-" 1*8ALPHA ) ) / "*"
pub fn is_language_range(s: &str) -> bool {
    s == "*"
        || (!s.is_empty()
            && s.split('-').all(|part| {
                (1..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic())
            }))
}

/// One Accept-Language entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageRange {
    pub language: String,
    pub params: Values,
}

impl LanguageRange {
    pub fn new(language: impl Into<String>) -> Self {
        LanguageRange { language: language.into(), params: Values::new() }
    }

    pub fn quality(&self) -> OrderedFloat<f32> {
        quality_of(&self.params)
    }

    pub fn is_empty(&self) -> bool {
        self.language.is_empty() && self.params.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        is_language_range(&self.language) && range_params_valid(&self.params)
    }
}

impl PartialEq for LanguageRange {
    fn eq(&self, other: &Self) -> bool {
        self.language.eq_ignore_ascii_case(&other.language) && compare_quality(&self.params, &other.params)
    }
}

impl fmt::Display for LanguageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        self.params.write_to(f, true)
    }
}

impl FromStr for LanguageRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(LanguageRange::default());
        }
        adapter::parse_language_range(s)
    }
}

/// Accept-Language header (RFC 3261 Section 20.3)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcceptLanguage(pub Vec<LanguageRange>);

impl AcceptLanguage {
    pub fn new(ranges: Vec<LanguageRange>) -> Self {
        AcceptLanguage(ranges)
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().all(LanguageRange::is_valid)
    }
}

impl fmt::Display for AcceptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for AcceptLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_accept_language(s).map(AcceptLanguage)
    }
}

newtype_deref!(AcceptLanguage => Vec<LanguageRange>);
impl_header!(AcceptLanguage, HeaderName::AcceptLanguage);
