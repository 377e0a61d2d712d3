use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::types::headers::HeaderName;
use crate::types::method::Method;

/// CSeq header (RFC 3261 Section 20.16)
///
/// ```
/// use rvoip_sip_headers::prelude::*;
///
/// let cseq: CSeq = "4711 INVITE".parse().unwrap();
/// assert_eq!(cseq.seq, 4711);
/// assert_eq!(cseq.method, Method::Invite);
/// assert_eq!(cseq.to_string(), "4711 INVITE");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CSeq {
    pub seq: u32,
    pub method: Method,
}

impl CSeq {
    pub fn new(seq: u32, method: Method) -> Self {
        CSeq { seq, method }
    }

    /// Sequence numbers must be below 2**31.
    pub fn is_valid(&self) -> bool {
        self.seq < (1 << 31) && self.method.is_valid()
    }
}

impl fmt::Display for CSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.seq, self.method)
    }
}

impl FromStr for CSeq {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_cseq(s)
    }
}

impl_header!(CSeq, HeaderName::CSeq);
