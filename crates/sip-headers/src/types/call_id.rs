use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::parser::token::is_word;
use crate::types::headers::HeaderName;

/// callid = word [ "@" word ]
pub fn is_call_id(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, host)) => is_word(local) && is_word(host),
        None => is_word(s),
    }
}

/// Call-ID header (RFC 3261 Section 20.8)
///
/// Call-IDs are opaque and compared case-sensitively.
///
/// ```
/// use rvoip_sip_headers::prelude::*;
///
/// let id: CallId = "a84b4c76e66710@pc33.atlanta.com".parse().unwrap();
/// assert_eq!(id.value(), "a84b4c76e66710@pc33.atlanta.com");
/// assert_ne!(id, CallId::new("A84B4C76E66710@pc33.atlanta.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CallId(pub String);

impl CallId {
    pub fn new(id: impl Into<String>) -> Self {
        CallId(id.into())
    }

    /// A fresh random Call-ID, optionally qualified with a host.
    pub fn random(host: Option<&str>) -> Self {
        let local = uuid::Uuid::new_v4().simple().to_string();
        match host {
            Some(h) => CallId(format!("{}@{}", local, h)),
            None => CallId(local),
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        is_call_id(&self.0)
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CallId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_call_id(s).map(CallId)
    }
}

impl_header!(CallId, HeaderName::CallId);
