use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::token::is_token;
use crate::types::headers::HeaderName;

/// Priority header (RFC 3261 Section 20.26)
///
/// Extension values are kept as `Other` and compared case-insensitively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum Priority {
    Emergency,
    Urgent,
    #[default]
    Normal,
    NonUrgent,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Emergency => "emergency",
            Priority::Urgent => "urgent",
            Priority::Normal => "normal",
            Priority::NonUrgent => "non-urgent",
            Priority::Other(token) => token,
        }
    }

    /// Rank used for ordering requests; lower is more urgent. Extension
    /// values rank after the standard ones.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Emergency => 0,
            Priority::Urgent => 1,
            Priority::Normal => 2,
            Priority::NonUrgent => 3,
            Priority::Other(_) => 4,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_token(self.as_str())
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ParseError("Empty Priority".to_string()));
        }
        Ok(match s.to_ascii_lowercase().as_str() {
            "emergency" => Priority::Emergency,
            "urgent" => Priority::Urgent,
            "normal" => Priority::Normal,
            "non-urgent" => Priority::NonUrgent,
            _ => Priority::Other(s.to_string()),
        })
    }
}

impl_header!(Priority, HeaderName::Priority);
