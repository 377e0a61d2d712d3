//! URIs carried inside header values.
//!
//! Headers treat URIs through the [`UriValue`] capability: render, clone,
//! compare and validate. [`Uri`] is the owning handle stored in addresses,
//! info records and authorization fields; it parses `sip:`/`sips:` into
//! [`SipUri`], `tel:` into [`TelUri`] and any other scheme into
//! [`AbsoluteUri`].
//!
//! ```
//! use rvoip_sip_headers::Uri;
//!
//! let a = Uri::parse("sip:alice@Atlanta.COM;transport=tcp").unwrap();
//! let b = Uri::parse("sip:alice@atlanta.com;transport=TCP").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "sip:alice@Atlanta.COM;transport=tcp");
//! ```

use std::any::Any;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::parser::token::is_host;
use crate::types::equality::{compare, compare_strict, SIP_URI_SPECIAL};
use crate::types::values::Values;

/// Capability contract for URI implementations.
pub trait UriValue: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Lowercase scheme name.
    fn scheme(&self) -> &str;

    fn clone_uri(&self) -> Box<dyn UriValue>;

    /// Scheme-specific equivalence.
    fn equal(&self, other: &dyn UriValue) -> bool;

    fn validate(&self) -> bool;

    fn as_any(&self) -> &dyn Any;
}

/// Owning handle around any [`UriValue`].
#[derive(Debug)]
pub struct Uri(Box<dyn UriValue>);

impl Uri {
    pub fn new<U: UriValue>(uri: U) -> Self {
        Uri(Box::new(uri))
    }

    /// Parses a URI, choosing the implementation by scheme.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (scheme, _) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidUri(format!("missing scheme: {}", s)))?;
        let uri = match scheme.to_ascii_lowercase().as_str() {
            "sip" | "sips" => Uri::new(s.parse::<SipUri>()?),
            "tel" => Uri::new(s.parse::<TelUri>()?),
            _ => Uri::new(s.parse::<AbsoluteUri>()?),
        };
        Ok(uri)
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    pub fn is_valid(&self) -> bool {
        self.0.validate()
    }

    /// The underlying implementation, if it is a `T`.
    pub fn downcast_ref<T: UriValue>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn as_sip(&self) -> Option<&SipUri> {
        self.downcast_ref::<SipUri>()
    }

    pub fn inner(&self) -> &dyn UriValue {
        self.0.as_ref()
    }
}

impl Clone for Uri {
    fn clone(&self) -> Self {
        Uri(self.0.clone_uri())
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.0.equal(other.0.as_ref())
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0.as_ref(), f)
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uri::parse(s)
    }
}

impl From<SipUri> for Uri {
    fn from(uri: SipUri) -> Self {
        Uri::new(uri)
    }
}

impl Serialize for Uri {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Host part of a SIP URI or Via sent-by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Host {
    /// A domain name (e.g., "example.com").
    Domain(String),
    /// An IP address (v4 or v6).
    Address(IpAddr),
}

impl Host {
    pub fn domain(domain: impl Into<String>) -> Self {
        Host::Domain(domain.into())
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Host::Domain(d) => is_host(d),
            Host::Address(_) => true,
        }
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Host::Domain(a), Host::Domain(b)) => a.eq_ignore_ascii_case(b),
            (Host::Address(a), Host::Address(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Domain(d) => f.write_str(d),
            Host::Address(IpAddr::V4(ip)) => write!(f, "{}", ip),
            Host::Address(IpAddr::V6(ip)) => write!(f, "[{}]", ip),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidUri("empty host".to_string()));
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            return inner
                .parse::<Ipv6Addr>()
                .map(|ip| Host::Address(IpAddr::V6(ip)))
                .map_err(|_| Error::InvalidUri(format!("invalid IPv6 reference: {}", s)));
        }
        if let Ok(ip) = s.parse::<Ipv4Addr>() {
            return Ok(Host::Address(IpAddr::V4(ip)));
        }
        Ok(Host::Domain(s.to_string()))
    }
}

/// Splits `host[:port]`, honouring IPv6 brackets.
pub(crate) fn split_host_port(s: &str) -> Result<(Host, Option<u16>)> {
    let (host, port) = if s.starts_with('[') {
        match s.find(']') {
            Some(end) => {
                let rest = &s[end + 1..];
                let port = match rest.strip_prefix(':') {
                    Some(p) => Some(p),
                    None if rest.is_empty() => None,
                    None => return Err(Error::InvalidUri(format!("invalid host: {}", s))),
                };
                (&s[..=end], port)
            }
            None => return Err(Error::InvalidUri(format!("unterminated IPv6 reference: {}", s))),
        }
    } else {
        match s.rsplit_once(':') {
            Some((h, p)) => (h, Some(p)),
            None => (s, None),
        }
    };
    let port = port
        .map(|p| p.parse::<u16>().map_err(|_| Error::InvalidUri(format!("invalid port: {}", p))))
        .transpose()?;
    Ok((host.parse()?, port))
}

/// `sip:` / `sips:` URI (RFC 3261 Section 19.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipUri {
    pub secure: bool,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Host,
    pub port: Option<u16>,
    pub params: Values,
    pub headers: Values,
}

impl SipUri {
    pub fn new(host: Host) -> Self {
        SipUri {
            secure: false,
            user: None,
            password: None,
            host,
            port: None,
            params: Values::new(),
            headers: Values::new(),
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(name, value);
        self
    }

    pub fn transport(&self) -> Option<&str> {
        self.params.last("transport")
    }
}

impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.secure { "sips:" } else { "sip:" })?;
        if let Some(user) = &self.user {
            f.write_str(user)?;
            if let Some(password) = &self.password {
                write!(f, ":{}", password)?;
            }
            f.write_str("@")?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        // URI params keep their wire order
        for (name, value) in self.params.iter() {
            write!(f, ";{}", name)?;
            if !value.is_empty() {
                write!(f, "={}", value)?;
            }
        }
        for (i, (name, value)) in self.headers.iter().enumerate() {
            f.write_str(if i == 0 { "?" } else { "&" })?;
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

impl FromStr for SipUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (scheme, rest) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidUri(format!("missing scheme: {}", s)))?;
        let secure = match scheme.to_ascii_lowercase().as_str() {
            "sip" => false,
            "sips" => true,
            other => return Err(Error::InvalidUri(format!("not a SIP scheme: {}", other))),
        };

        let (rest, headers) = match rest.split_once('?') {
            Some((r, h)) => (r, parse_uri_headers(h)),
            None => (rest, Values::new()),
        };
        let (userinfo, hostpart) = match rest.rsplit_once('@') {
            Some((u, h)) => (Some(u), h),
            None => (None, rest),
        };
        let mut segments = hostpart.split(';');
        let hostport = segments.next().unwrap_or_default();
        let (host, port) = split_host_port(hostport)?;

        let mut params = Values::new();
        for segment in segments.filter(|s| !s.is_empty()) {
            match segment.split_once('=') {
                Some((n, v)) => params.append(n, v),
                None => params.append(segment, ""),
            };
        }

        let (user, password) = match userinfo {
            Some(info) => match info.split_once(':') {
                Some((u, p)) => (Some(u.to_string()), Some(p.to_string())),
                None => (Some(info.to_string()), None),
            },
            None => (None, None),
        };

        Ok(SipUri { secure, user, password, host, port, params, headers })
    }
}

fn parse_uri_headers(s: &str) -> Values {
    s.split('&')
        .filter(|h| !h.is_empty())
        .map(|h| h.split_once('=').unwrap_or((h, "")))
        .collect()
}

impl PartialEq for SipUri {
    /// RFC 3261 Section 19.1.4 comparison: user info is case-sensitive,
    /// host is not, and an explicit port never matches an absent one.
    fn eq(&self, other: &Self) -> bool {
        self.secure == other.secure
            && self.user == other.user
            && self.password == other.password
            && self.host == other.host
            && self.port == other.port
            && compare(&self.params, &other.params, SIP_URI_SPECIAL)
            && compare_strict(&self.headers, &other.headers)
    }
}

impl UriValue for SipUri {
    fn scheme(&self) -> &str {
        if self.secure { "sips" } else { "sip" }
    }

    fn clone_uri(&self) -> Box<dyn UriValue> {
        Box::new(self.clone())
    }

    fn equal(&self, other: &dyn UriValue) -> bool {
        other.as_any().downcast_ref::<SipUri>().map_or(false, |o| self == o)
    }

    fn validate(&self) -> bool {
        self.host.is_valid()
            && self.user.as_deref().map_or(true, |u| !u.is_empty() && !u.contains(char::is_whitespace))
            && self.params.is_valid()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `tel:` URI (RFC 3966).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelUri {
    pub number: String,
    pub params: Values,
}

impl TelUri {
    fn digits(&self) -> String {
        // visual separators carry no meaning
        self.number.chars().filter(|c| !matches!(c, '-' | '.' | '(' | ')')).collect()
    }
}

impl fmt::Display for TelUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tel:{}", self.number)?;
        for (name, value) in self.params.iter() {
            write!(f, ";{}", name)?;
            if !value.is_empty() {
                write!(f, "={}", value)?;
            }
        }
        Ok(())
    }
}

impl FromStr for TelUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rest = s
            .get(..4)
            .filter(|p| p.eq_ignore_ascii_case("tel:"))
            .map(|_| &s[4..])
            .ok_or_else(|| Error::InvalidUri(format!("not a tel URI: {}", s)))?;
        let mut segments = rest.split(';');
        let number = segments.next().unwrap_or_default().to_string();
        let params = segments
            .filter(|s| !s.is_empty())
            .map(|seg| seg.split_once('=').unwrap_or((seg, "")))
            .collect();
        Ok(TelUri { number, params })
    }
}

impl PartialEq for TelUri {
    fn eq(&self, other: &Self) -> bool {
        self.digits().eq_ignore_ascii_case(&other.digits()) && compare_strict(&self.params, &other.params)
    }
}

impl UriValue for TelUri {
    fn scheme(&self) -> &str {
        "tel"
    }

    fn clone_uri(&self) -> Box<dyn UriValue> {
        Box::new(self.clone())
    }

    fn equal(&self, other: &dyn UriValue) -> bool {
        other.as_any().downcast_ref::<TelUri>().map_or(false, |o| self == o)
    }

    fn validate(&self) -> bool {
        !self.number.is_empty()
            && self
                .number
                .chars()
                .all(|c| c.is_ascii_hexdigit() || matches!(c, '+' | '-' | '.' | '(' | ')' | '*' | '#'))
            && self.params.is_valid()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Any other absolute URI, kept opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsoluteUri {
    pub scheme: String,
    pub opaque: String,
}

impl fmt::Display for AbsoluteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.opaque)
    }
}

impl FromStr for AbsoluteUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (scheme, opaque) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidUri(format!("missing scheme: {}", s)))?;
        Ok(AbsoluteUri {
            scheme: scheme.to_string(),
            opaque: opaque.to_string(),
        })
    }
}

impl PartialEq for AbsoluteUri {
    fn eq(&self, other: &Self) -> bool {
        self.scheme.eq_ignore_ascii_case(&other.scheme) && self.opaque == other.opaque
    }
}

impl UriValue for AbsoluteUri {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn clone_uri(&self) -> Box<dyn UriValue> {
        Box::new(self.clone())
    }

    fn equal(&self, other: &dyn UriValue) -> bool {
        other.as_any().downcast_ref::<AbsoluteUri>().map_or(false, |o| self == o)
    }

    fn validate(&self) -> bool {
        let mut chars = self.scheme.chars();
        chars.next().map_or(false, |c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            && !self.opaque.is_empty()
            && !self.opaque.contains(|c: char| c.is_whitespace() || c == '<' || c == '>')
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
