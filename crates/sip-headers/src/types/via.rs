//! # SIP Via Header
//!
//! This module provides the SIP Via header as defined in
//! [RFC 3261 Section 20.42](https://datatracker.ietf.org/doc/html/rfc3261#section-20.42).
//!
//! Each Via header holds one or more comma-separated hops, each with its
//! own sent-protocol, sent-by address and parameters:
//!
//! ```text
//! Via: SIP/2.0/UDP pc33.atlanta.com:5060;branch=z9hG4bK776asdhds
//! ```
//!
//! ## Equality
//!
//! Hops compare protocol, transport and host case-insensitively. The
//! transaction-identifying parameters `branch`, `received`, `rport`, `ttl`
//! and `maddr` must be present in both hops or in neither; other parameters
//! only matter when both hops carry them. Hop order is significant.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut hop = ViaHop::new(Transport::Udp, Host::domain("pc33.atlanta.com"), Some(5060));
//! hop.set_branch("z9hG4bK776asdhds");
//! hop.set_rport(None);
//! assert_eq!(hop.to_string(), "SIP/2.0/UDP pc33.atlanta.com:5060;branch=z9hG4bK776asdhds;rport");
//!
//! let via: Via = "SIP/2.0/UDP PC33.atlanta.com:5060;rport;branch=z9hG4bK776asdhds".parse().unwrap();
//! assert_eq!(via[0], hop);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::via as adapter;
use crate::parser::token::is_token;
use crate::types::equality::{compare, VIA_SPECIAL};
use crate::types::headers::HeaderName;
use crate::types::render::write_joined;
use crate::types::uri::Host;
use crate::types::values::Values;

/// Prefix marking RFC 3261 branch identifiers.
pub const BRANCH_MAGIC_COOKIE: &str = "z9hG4bK";

/// Transport named in a Via sent-protocol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum Transport {
    #[default]
    Udp,
    Tcp,
    Tls,
    Sctp,
    Ws,
    Wss,
    /// Extension transport token
    Other(String),
}

impl Transport {
    pub fn as_str(&self) -> &str {
        match self {
            Transport::Udp => "UDP",
            Transport::Tcp => "TCP",
            Transport::Tls => "TLS",
            Transport::Sctp => "SCTP",
            Transport::Ws => "WS",
            Transport::Wss => "WSS",
            Transport::Other(t) => t,
        }
    }
}

impl PartialEq for Transport {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::ParseError("Empty transport".to_string()));
        }
        Ok(match s.to_ascii_uppercase().as_str() {
            "UDP" => Transport::Udp,
            "TCP" => Transport::Tcp,
            "TLS" => Transport::Tls,
            "SCTP" => Transport::Sctp,
            "WS" => Transport::Ws,
            "WSS" => Transport::Wss,
            _ => Transport::Other(s.to_string()),
        })
    }
}

/// `protocol-name/protocol-version/transport`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentProtocol {
    /// Protocol name (usually "SIP")
    pub name: String,
    /// Protocol version (usually "2.0")
    pub version: String,
    pub transport: Transport,
}

impl SentProtocol {
    /// `SIP/2.0/<transport>`
    pub fn sip(transport: Transport) -> Self {
        SentProtocol {
            name: "SIP".to_string(),
            version: "2.0".to_string(),
            transport,
        }
    }
}

impl PartialEq for SentProtocol {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
            && self.version.eq_ignore_ascii_case(&other.version)
            && self.transport == other.transport
    }
}

impl fmt::Display for SentProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.name, self.version, self.transport)
    }
}

/// A single Via hop.
///
/// # Examples
///
/// ```
/// use rvoip_sip_headers::prelude::*;
///
/// let hop: ViaHop = "SIP/2.0/TCP [2001:db8::1]:5070;received=192.0.2.1;rport=9988".parse().unwrap();
/// assert_eq!(hop.sent_protocol.transport, Transport::Tcp);
/// assert_eq!(hop.sent_by_port, Some(5070));
/// assert_eq!(hop.received(), Some("192.0.2.1"));
/// assert_eq!(hop.rport(), Some(Some(9988)));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViaHop {
    pub sent_protocol: SentProtocol,
    /// Host name or IP address; `None` only for the zero value
    pub sent_by_host: Option<Host>,
    /// Kept as written; ports above 65535 only fail `is_valid`.
    pub sent_by_port: Option<u32>,
    /// Parameters (branch, received, rport, etc.)
    pub params: Values,
}

impl ViaHop {
    /// Creates a `SIP/2.0` hop with no parameters.
    pub fn new(transport: Transport, host: Host, port: Option<u16>) -> Self {
        ViaHop {
            sent_protocol: SentProtocol::sip(transport),
            sent_by_host: Some(host),
            sent_by_port: port.map(u32::from),
            params: Values::new(),
        }
    }

    /// A fresh RFC 3261 branch: the magic cookie followed by a random id.
    pub fn new_branch() -> String {
        format!("{}{}", BRANCH_MAGIC_COOKIE, uuid::Uuid::new_v4().simple())
    }

    /// Builder-style hop with a freshly generated branch.
    pub fn with_new_branch(mut self) -> Self {
        self.set_branch(Self::new_branch());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sent_protocol.name.is_empty() && self.sent_by_host.is_none() && self.params.is_empty()
    }

    pub fn branch(&self) -> Option<&str> {
        self.params.last("branch")
    }

    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.params.set("branch", branch);
    }

    /// True when the branch carries the RFC 3261 magic cookie.
    pub fn has_rfc3261_branch(&self) -> bool {
        self.branch().map_or(false, |b| b.starts_with(BRANCH_MAGIC_COOKIE))
    }

    pub fn received(&self) -> Option<&str> {
        self.params.last("received")
    }

    pub fn set_received(&mut self, received: impl Into<String>) {
        self.params.set("received", received);
    }

    /// `None` when absent, `Some(None)` for the bare `rport` flag.
    pub fn rport(&self) -> Option<Option<u16>> {
        self.params.last("rport").map(|p| p.parse().ok())
    }

    pub fn set_rport(&mut self, port: Option<u16>) {
        self.params.set("rport", port.map(|p| p.to_string()).unwrap_or_default());
    }

    pub fn ttl(&self) -> Option<u8> {
        self.params.last("ttl").and_then(|t| t.parse().ok())
    }

    pub fn maddr(&self) -> Option<&str> {
        self.params.last("maddr")
    }

    pub fn is_valid(&self) -> bool {
        let proto = &self.sent_protocol;
        is_token(&proto.name)
            && is_token(&proto.version)
            && is_token(proto.transport.as_str())
            && self.sent_by_host.as_ref().map_or(false, Host::is_valid)
            && self.sent_by_port.map_or(true, |p| u16::try_from(p).is_ok())
            && self.params.is_valid()
            && self.ttl().map_or(!self.params.has("ttl"), |_| true)
    }
}

impl PartialEq for ViaHop {
    fn eq(&self, other: &Self) -> bool {
        self.sent_protocol == other.sent_protocol
            && self.sent_by_host == other.sent_by_host
            && self.sent_by_port == other.sent_by_port
            && compare(&self.params, &other.params, VIA_SPECIAL)
    }
}

impl fmt::Display for ViaHop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sent_protocol)?;
        if let Some(host) = &self.sent_by_host {
            write!(f, " {}", host)?;
        }
        if let Some(port) = self.sent_by_port {
            write!(f, ":{}", port)?;
        }
        self.params.write_to(f, true)
    }
}

impl FromStr for ViaHop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(ViaHop::default());
        }
        adapter::parse_via_hop(s)
    }
}

/// A structured representation of a SIP Via header
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let a: Via = "SIP/2.0/UDP a.example.com;branch=z9hG4bK1, SIP/2.0/TCP b.example.com;branch=z9hG4bK2"
///     .parse()
///     .unwrap();
/// let b: Via = "SIP/2.0/TCP b.example.com;branch=z9hG4bK2, SIP/2.0/UDP a.example.com;branch=z9hG4bK1"
///     .parse()
///     .unwrap();
/// assert_eq!(a.len(), 2);
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Via(pub Vec<ViaHop>);

impl Via {
    pub fn new(hops: Vec<ViaHop>) -> Self {
        Via(hops)
    }

    /// The topmost hop.
    pub fn top(&self) -> Option<&ViaHop> {
        self.0.first()
    }

    /// Branch of the topmost hop.
    pub fn branch(&self) -> Option<&str> {
        self.top().and_then(ViaHop::branch)
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(ViaHop::is_valid)
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for Via {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_via(s).map(Via)
    }
}

newtype_deref!(Via => Vec<ViaHop>);
impl_header!(Via, HeaderName::Via);
