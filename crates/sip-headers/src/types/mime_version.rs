use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::types::headers::HeaderName;

/// MIME-Version header (RFC 3261 Section 20.24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl MimeVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        MimeVersion { major, minor }
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}

impl Default for MimeVersion {
    fn default() -> Self {
        MimeVersion::new(1, 0)
    }
}

impl fmt::Display for MimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for MimeVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_mime_version(s)
    }
}

impl_header!(MimeVersion, HeaderName::MimeVersion);
