//! # SIP Authentication
//!
//! Credentials (`Authorization`, `Proxy-Authorization`) and challenges
//! (`WWW-Authenticate`, `Proxy-Authenticate`) are closed variant families:
//! a structured `Digest` variant, a `Bearer` variant and a generic variant
//! for any other scheme. Parsing dispatches on the scheme token; a scheme
//! nobody recognises always lands in the generic variant with its
//! parameters preserved.
//!
//! Every variant renders its parameters in a fixed order: known scalar
//! fields alphabetically, then structural fields (`uri`, `domain`,
//! `authz_server`), then unrecognised parameters alphabetically.
//!
//! ```
//! use rvoip_sip_headers::prelude::*;
//!
//! let auth: Authorization = "Digest username=\"bob\", realm=\"biloxi.com\", nonce=\"dcd98b\", \
//!     uri=\"sip:bob@biloxi.com\", response=\"6629fae49393a05397450978507c4ef1\"".parse().unwrap();
//! assert_eq!(auth.scheme(), "Digest");
//! assert!(auth.is_valid());
//! ```

mod authentication_info;
mod challenge;
mod credentials;
mod headers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::token::{is_token, is_token68, quote, unquote};
use crate::types::equality::compare;
use crate::types::values::Values;

pub use authentication_info::AuthenticationInfo;
pub use challenge::{AuthChallenge, BearerChallenge, DigestChallenge, DomainEntry};
pub use credentials::{AuthCredentials, BearerCredentials, DigestCredentials};
pub use headers::{Authorization, ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate};

/// Digest hash algorithm (RFC 3261, RFC 7616, RFC 8760)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Algorithm {
    Md5,
    Md5Sess,
    Sha256,
    Sha256Sess,
    Sha512,
    Sha512Sess,
    Other(String),
}

impl Algorithm {
    pub fn as_str(&self) -> &str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Md5Sess => "MD5-sess",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha256Sess => "SHA-256-sess",
            Algorithm::Sha512 => "SHA-512-256",
            Algorithm::Sha512Sess => "SHA-512-256-sess",
            Algorithm::Other(s) => s,
        }
    }

    /// Length in hex digits of a response computed with this algorithm.
    pub fn digest_len(&self) -> Option<usize> {
        match self {
            Algorithm::Md5 | Algorithm::Md5Sess => Some(32),
            Algorithm::Sha256 | Algorithm::Sha256Sess | Algorithm::Sha512 | Algorithm::Sha512Sess => Some(64),
            Algorithm::Other(_) => None,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Md5
    }
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = unquote(s.trim());
        Ok(match s.to_ascii_lowercase().as_str() {
            "" => return Err(Error::ParseError("Empty algorithm".to_string())),
            "md5" => Algorithm::Md5,
            "md5-sess" => Algorithm::Md5Sess,
            "sha-256" => Algorithm::Sha256,
            "sha-256-sess" => Algorithm::Sha256Sess,
            "sha-512-256" => Algorithm::Sha512,
            "sha-512-256-sess" => Algorithm::Sha512Sess,
            _ => Algorithm::Other(s),
        })
    }
}

/// Quality of protection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Qop {
    Auth,
    AuthInt,
    Other(String),
}

impl Qop {
    pub fn as_str(&self) -> &str {
        match self {
            Qop::Auth => "auth",
            Qop::AuthInt => "auth-int",
            Qop::Other(s) => s,
        }
    }
}

impl PartialEq for Qop {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl fmt::Display for Qop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Qop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = unquote(s.trim());
        Ok(match s.to_ascii_lowercase().as_str() {
            "" => return Err(Error::ParseError("Empty qop".to_string())),
            "auth" => Qop::Auth,
            "auth-int" => Qop::AuthInt,
            _ => Qop::Other(s),
        })
    }
}

/// Any scheme without a structured variant: the scheme token plus either a
/// token68 blob, a parameter list, or both.
///
/// Shared by credentials and challenges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericAuth {
    pub scheme: String,
    pub token: Option<String>,
    pub params: Values,
}

impl GenericAuth {
    pub fn new(scheme: impl Into<String>) -> Self {
        GenericAuth { scheme: scheme.into(), ..Default::default() }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(name, value);
        self
    }

    pub fn is_valid(&self) -> bool {
        is_token(&self.scheme)
            && self.token.as_deref().map_or(true, is_token68)
            && (self.token.is_some() || !self.params.is_empty())
            && self.params.is_valid()
    }
}

impl PartialEq for GenericAuth {
    fn eq(&self, other: &Self) -> bool {
        self.scheme.eq_ignore_ascii_case(&other.scheme)
            && self.token == other.token
            && compare(&self.params, &other.params, &[])
    }
}

impl fmt::Display for GenericAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scheme)?;
        let mut first = true;
        if let Some(token) = &self.token {
            write!(f, " {}", token)?;
            first = false;
        }
        if !self.params.is_empty() {
            f.write_str(if first { " " } else { ", " })?;
            self.params.write_list(f, ", ", true)?;
        }
        Ok(())
    }
}

/// Writes comma separated `name=value` pairs, inserting the separator
/// before every pair but the first.
pub(crate) struct ParamWriter<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    first: bool,
    bare: bool,
}

impl<'a, 'f> ParamWriter<'a, 'f> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'f>, scheme: &str) -> std::result::Result<Self, fmt::Error> {
        f.write_str(scheme)?;
        Ok(ParamWriter { f, first: true, bare: false })
    }

    /// No scheme prefix: the first pair is written without a leading space.
    pub(crate) fn bare(f: &'a mut fmt::Formatter<'f>) -> Self {
        ParamWriter { f, first: true, bare: true }
    }

    fn sep(&mut self) -> fmt::Result {
        match (self.first, self.bare) {
            (true, true) => {}
            (true, false) => self.f.write_str(" ")?,
            (false, _) => self.f.write_str(", ")?,
        }
        self.first = false;
        Ok(())
    }

    pub(crate) fn token(&mut self, name: &str, value: impl fmt::Display) -> fmt::Result {
        self.sep()?;
        write!(self.f, "{}={}", name, value)
    }

    pub(crate) fn quoted(&mut self, name: &str, value: &str) -> fmt::Result {
        self.sep()?;
        write!(self.f, "{}={}", name, quote(value))
    }

    pub(crate) fn opt_quoted(&mut self, name: &str, value: Option<&str>) -> fmt::Result {
        match value {
            Some(v) => self.quoted(name, v),
            None => Ok(()),
        }
    }

    /// `nc` as 8 hex digits.
    pub(crate) fn nonce_count(&mut self, name: &str, nc: Option<u32>) -> fmt::Result {
        match nc {
            Some(nc) => self.token(name, format_args!("{:08x}", nc)),
            None => Ok(()),
        }
    }

    pub(crate) fn flag(&mut self, name: &str, set: bool) -> fmt::Result {
        if set {
            self.token(name, "true")
        } else {
            Ok(())
        }
    }

    pub(crate) fn overflow(&mut self, params: &Values) -> fmt::Result {
        if params.is_empty() {
            return Ok(());
        }
        self.sep()?;
        params.write_list(&mut *self.f, ", ", true)
    }
}

/// `nc-value = 8LHEX`
pub(crate) fn parse_nonce_count(s: &str) -> Option<u32> {
    let s = unquote(s.trim());
    if s.len() == 8 {
        u32::from_str_radix(&s, 16).ok()
    } else {
        None
    }
}

pub(crate) fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}
