use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Algorithm, GenericAuth, ParamWriter, Qop};
use crate::error::{Error, Result};
use crate::parser::headers::auth as adapter;
use crate::parser::token::is_token;
use crate::types::equality::compare;
use crate::types::uri::Uri;
use crate::types::values::Values;

/// One entry of a Digest `domain` list: an absolute URI or an abs_path.
///
/// Entries that do not parse as a URI are kept as written, so a challenge
/// naming `/` or `/protected` still parses and renders back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainEntry {
    Uri(Uri),
    Path(String),
}

impl DomainEntry {
    /// URIs must validate; raw entries must be an abs_path.
    pub fn is_valid(&self) -> bool {
        match self {
            DomainEntry::Uri(uri) => uri.is_valid(),
            DomainEntry::Path(path) => {
                path.starts_with('/') && path.chars().all(|c| c.is_ascii_graphic() && c != '"')
            }
        }
    }
}

impl From<Uri> for DomainEntry {
    fn from(uri: Uri) -> Self {
        DomainEntry::Uri(uri)
    }
}

impl FromStr for DomainEntry {
    type Err = Error;

    /// Never fails for non-empty input: anything that is not a URI is a path.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::ParseError("Empty domain entry".to_string()));
        }
        if s.starts_with('/') {
            return Ok(DomainEntry::Path(s.to_string()));
        }
        Ok(Uri::parse(s).map_or_else(|_| DomainEntry::Path(s.to_string()), DomainEntry::Uri))
    }
}

impl fmt::Display for DomainEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainEntry::Uri(uri) => write!(f, "{}", uri),
            DomainEntry::Path(path) => f.write_str(path),
        }
    }
}

/// Digest challenge (RFC 3261 Section 22.4, RFC 7616)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestChallenge {
    pub realm: String,
    pub nonce: String,
    /// Protection space, rendered as a quoted space separated list.
    pub domain: Vec<DomainEntry>,
    pub opaque: Option<String>,
    pub stale: bool,
    pub algorithm: Option<Algorithm>,
    /// Offered qop values, rendered quoted and comma joined.
    pub qop: Vec<Qop>,
    pub userhash: bool,
    pub params: Values,
}

impl DigestChallenge {
    pub fn new(realm: impl Into<String>, nonce: impl Into<String>) -> Self {
        DigestChallenge {
            realm: realm.into(),
            nonce: nonce.into(),
            ..Default::default()
        }
    }

    pub fn with_qop(mut self, qop: Qop) -> Self {
        self.qop.push(qop);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn is_valid(&self) -> bool {
        !self.realm.is_empty()
            && !self.nonce.is_empty()
            && self.domain.iter().all(DomainEntry::is_valid)
            && self.qop.iter().all(|q| is_token(q.as_str()))
            && self.params.is_valid()
    }
}

impl PartialEq for DigestChallenge {
    fn eq(&self, other: &Self) -> bool {
        self.realm == other.realm
            && self.nonce == other.nonce
            && self.domain == other.domain
            && self.opaque == other.opaque
            && self.stale == other.stale
            && self.algorithm == other.algorithm
            && self.qop == other.qop
            && self.userhash == other.userhash
            && compare(&self.params, &other.params, &[])
    }
}

impl fmt::Display for DigestChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = ParamWriter::new(f, "Digest")?;
        if let Some(algorithm) = &self.algorithm {
            w.token("algorithm", algorithm)?;
        }
        if !self.nonce.is_empty() {
            w.quoted("nonce", &self.nonce)?;
        }
        w.opt_quoted("opaque", self.opaque.as_deref())?;
        if !self.qop.is_empty() {
            let list = self.qop.iter().map(Qop::as_str).collect::<Vec<_>>().join(",");
            w.quoted("qop", &list)?;
        }
        if !self.realm.is_empty() {
            w.quoted("realm", &self.realm)?;
        }
        w.flag("stale", self.stale)?;
        w.flag("userhash", self.userhash)?;
        if !self.domain.is_empty() {
            let list = self.domain.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
            w.quoted("domain", &list)?;
        }
        w.overflow(&self.params)
    }
}

/// Bearer challenge (RFC 8898)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BearerChallenge {
    pub realm: Option<String>,
    pub scope: Option<String>,
    pub error: Option<String>,
    /// Authorization server URI; mandatory in SIP.
    pub authz_server: String,
    pub params: Values,
}

impl BearerChallenge {
    pub fn new(authz_server: impl Into<String>) -> Self {
        BearerChallenge { authz_server: authz_server.into(), ..Default::default() }
    }

    pub fn is_valid(&self) -> bool {
        !self.authz_server.is_empty() && self.params.is_valid()
    }
}

impl PartialEq for BearerChallenge {
    fn eq(&self, other: &Self) -> bool {
        self.realm == other.realm
            && self.scope == other.scope
            && self.error.as_deref().map(str::to_ascii_lowercase)
                == other.error.as_deref().map(str::to_ascii_lowercase)
            && self.authz_server == other.authz_server
            && compare(&self.params, &other.params, &[])
    }
}

impl fmt::Display for BearerChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = ParamWriter::new(f, "Bearer")?;
        w.opt_quoted("error", self.error.as_deref())?;
        w.opt_quoted("realm", self.realm.as_deref())?;
        w.opt_quoted("scope", self.scope.as_deref())?;
        if !self.authz_server.is_empty() {
            w.quoted("authz_server", &self.authz_server)?;
        }
        w.overflow(&self.params)
    }
}

/// Challenge carried by WWW-Authenticate and Proxy-Authenticate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthChallenge {
    Digest(DigestChallenge),
    Bearer(BearerChallenge),
    Any(GenericAuth),
}

impl AuthChallenge {
    pub fn scheme(&self) -> &str {
        match self {
            AuthChallenge::Digest(_) => "Digest",
            AuthChallenge::Bearer(_) => "Bearer",
            AuthChallenge::Any(any) => &any.scheme,
        }
    }

    pub fn as_digest(&self) -> Option<&DigestChallenge> {
        match self {
            AuthChallenge::Digest(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            AuthChallenge::Digest(d) => d.is_valid(),
            AuthChallenge::Bearer(b) => b.is_valid(),
            AuthChallenge::Any(any) => any.is_valid(),
        }
    }
}

impl fmt::Display for AuthChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthChallenge::Digest(d) => fmt::Display::fmt(d, f),
            AuthChallenge::Bearer(b) => fmt::Display::fmt(b, f),
            AuthChallenge::Any(any) => fmt::Display::fmt(any, f),
        }
    }
}

impl FromStr for AuthChallenge {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_challenge(s)
    }
}

impl From<DigestChallenge> for AuthChallenge {
    fn from(d: DigestChallenge) -> Self {
        AuthChallenge::Digest(d)
    }
}

impl From<BearerChallenge> for AuthChallenge {
    fn from(b: BearerChallenge) -> Self {
        AuthChallenge::Bearer(b)
    }
}
