//! # SIP Authentication-Info Header
//!
//! Sent by a server after successful Digest authentication, carrying the
//! next nonce and the mutual authentication response.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{is_hex, ParamWriter, Qop};
use crate::error::{Error, Result};
use crate::parser::headers::auth as adapter;
use crate::types::equality::compare;
use crate::types::headers::HeaderName;
use crate::types::values::Values;

/// Authentication-Info header (RFC 3261 Section 20.6)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthenticationInfo {
    pub nextnonce: Option<String>,
    pub qop: Option<Qop>,
    pub rspauth: Option<String>,
    pub cnonce: Option<String>,
    pub nonce_count: Option<u32>,
    pub params: Values,
}

impl AuthenticationInfo {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_nextnonce(mut self, nextnonce: impl Into<String>) -> Self {
        self.nextnonce = Some(nextnonce.into());
        self
    }

    pub fn with_qop(mut self, qop: Qop) -> Self {
        self.qop = Some(qop);
        self
    }

    pub fn with_rspauth(mut self, rspauth: impl Into<String>) -> Self {
        self.rspauth = Some(rspauth.into());
        self
    }

    pub fn with_cnonce(mut self, cnonce: impl Into<String>) -> Self {
        self.cnonce = Some(cnonce.into());
        self
    }

    pub fn with_nonce_count(mut self, nc: u32) -> Self {
        self.nonce_count = Some(nc);
        self
    }

    /// At least one field present; `rspauth` must be hex.
    pub fn is_valid(&self) -> bool {
        let any = self.nextnonce.is_some()
            || self.qop.is_some()
            || self.rspauth.is_some()
            || self.cnonce.is_some()
            || self.nonce_count.is_some()
            || !self.params.is_empty();
        any && self.rspauth.as_deref().map_or(true, |r| r.is_empty() || is_hex(r)) && self.params.is_valid()
    }
}

impl PartialEq for AuthenticationInfo {
    fn eq(&self, other: &Self) -> bool {
        self.nextnonce == other.nextnonce
            && self.qop == other.qop
            && self.rspauth == other.rspauth
            && self.cnonce == other.cnonce
            && self.nonce_count == other.nonce_count
            && compare(&self.params, &other.params, &[])
    }
}

impl fmt::Display for AuthenticationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = ParamWriter::bare(f);
        w.opt_quoted("cnonce", self.cnonce.as_deref())?;
        w.nonce_count("nc", self.nonce_count)?;
        w.opt_quoted("nextnonce", self.nextnonce.as_deref())?;
        if let Some(qop) = &self.qop {
            w.token("qop", qop)?;
        }
        w.opt_quoted("rspauth", self.rspauth.as_deref())?;
        w.overflow(&self.params)
    }
}

impl FromStr for AuthenticationInfo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_authentication_info(s)
    }
}

impl_header!(AuthenticationInfo, HeaderName::AuthenticationInfo);
