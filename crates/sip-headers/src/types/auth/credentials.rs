use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{is_hex, Algorithm, GenericAuth, ParamWriter, Qop};
use crate::error::{Error, Result};
use crate::parser::headers::auth as adapter;
use crate::parser::token::is_token68;
use crate::types::equality::compare;
use crate::types::uri::Uri;
use crate::types::values::Values;

/// Digest credentials (RFC 3261 Section 22.4, RFC 7616)
///
/// Quoted fields are stored without their quotes. Parameters without a
/// field of their own are kept in `params` verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestCredentials {
    pub username: String,
    pub realm: String,
    pub nonce: String,
    pub uri: Option<Uri>,
    pub response: String,
    pub algorithm: Option<Algorithm>,
    pub cnonce: Option<String>,
    pub opaque: Option<String>,
    pub qop: Option<Qop>,
    pub nonce_count: Option<u32>,
    pub userhash: bool,
    pub params: Values,
}

impl DigestCredentials {
    pub fn new(username: impl Into<String>, realm: impl Into<String>, nonce: impl Into<String>) -> Self {
        DigestCredentials {
            username: username.into(),
            realm: realm.into(),
            nonce: nonce.into(),
            ..Default::default()
        }
    }

    pub fn with_uri(mut self, uri: Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    /// Algorithm in effect; a missing parameter means MD5.
    pub fn effective_algorithm(&self) -> Algorithm {
        self.algorithm.clone().unwrap_or_default()
    }

    /// The response must be a hex digest of the algorithm's length, and a
    /// `qop` requires both `cnonce` and `nc`.
    pub fn is_valid(&self) -> bool {
        let response_ok = is_hex(&self.response)
            && self
                .effective_algorithm()
                .digest_len()
                .map_or(true, |len| self.response.len() == len);
        let qop_ok = self.qop.is_none() || (self.cnonce.is_some() && self.nonce_count.is_some());
        !self.username.is_empty()
            && !self.nonce.is_empty()
            && response_ok
            && qop_ok
            && self.uri.as_ref().map_or(true, Uri::is_valid)
            && self.params.is_valid()
    }
}

impl PartialEq for DigestCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && self.realm == other.realm
            && self.nonce == other.nonce
            && self.uri == other.uri
            && self.response == other.response
            && self.algorithm == other.algorithm
            && self.cnonce == other.cnonce
            && self.opaque == other.opaque
            && self.qop == other.qop
            && self.nonce_count == other.nonce_count
            && self.userhash == other.userhash
            && compare(&self.params, &other.params, &[])
    }
}

impl fmt::Display for DigestCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = ParamWriter::new(f, "Digest")?;
        if let Some(algorithm) = &self.algorithm {
            w.token("algorithm", algorithm)?;
        }
        w.opt_quoted("cnonce", self.cnonce.as_deref())?;
        w.nonce_count("nc", self.nonce_count)?;
        if !self.nonce.is_empty() {
            w.quoted("nonce", &self.nonce)?;
        }
        w.opt_quoted("opaque", self.opaque.as_deref())?;
        if let Some(qop) = &self.qop {
            w.token("qop", qop)?;
        }
        if !self.realm.is_empty() {
            w.quoted("realm", &self.realm)?;
        }
        if !self.response.is_empty() {
            w.quoted("response", &self.response)?;
        }
        w.flag("userhash", self.userhash)?;
        if !self.username.is_empty() {
            w.quoted("username", &self.username)?;
        }
        if let Some(uri) = &self.uri {
            w.quoted("uri", &uri.to_string())?;
        }
        w.overflow(&self.params)
    }
}

/// Bearer credentials (RFC 8898): a token68 access token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BearerCredentials {
    pub token: String,
}

impl BearerCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        BearerCredentials { token: token.into() }
    }

    pub fn is_valid(&self) -> bool {
        is_token68(&self.token)
    }
}

impl fmt::Display for BearerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bearer {}", self.token)
    }
}

/// Credentials carried by Authorization and Proxy-Authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthCredentials {
    Digest(DigestCredentials),
    Bearer(BearerCredentials),
    Any(GenericAuth),
}

impl AuthCredentials {
    pub fn scheme(&self) -> &str {
        match self {
            AuthCredentials::Digest(_) => "Digest",
            AuthCredentials::Bearer(_) => "Bearer",
            AuthCredentials::Any(any) => &any.scheme,
        }
    }

    pub fn as_digest(&self) -> Option<&DigestCredentials> {
        match self {
            AuthCredentials::Digest(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            AuthCredentials::Digest(d) => d.is_valid(),
            AuthCredentials::Bearer(b) => b.is_valid(),
            AuthCredentials::Any(any) => any.is_valid(),
        }
    }
}

impl fmt::Display for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthCredentials::Digest(d) => fmt::Display::fmt(d, f),
            AuthCredentials::Bearer(b) => fmt::Display::fmt(b, f),
            AuthCredentials::Any(any) => fmt::Display::fmt(any, f),
        }
    }
}

impl FromStr for AuthCredentials {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_credentials(s)
    }
}

impl From<DigestCredentials> for AuthCredentials {
    fn from(d: DigestCredentials) -> Self {
        AuthCredentials::Digest(d)
    }
}

impl From<BearerCredentials> for AuthCredentials {
    fn from(b: BearerCredentials) -> Self {
        AuthCredentials::Bearer(b)
    }
}
