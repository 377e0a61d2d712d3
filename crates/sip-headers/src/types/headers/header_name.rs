use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Single-character compact forms and the canonical names they stand for.
///
/// `o` is the historical compact form of `Event`.
const COMPACT_FORMS: &[(char, &str)] = &[
    ('c', "Content-Type"),
    ('e', "Content-Encoding"),
    ('f', "From"),
    ('i', "Call-ID"),
    ('k', "Supported"),
    ('l', "Content-Length"),
    ('m', "Contact"),
    ('o', "Event"),
    ('s', "Subject"),
    ('t', "To"),
    ('v', "Via"),
];

/// Names whose canonical casing is not plain per-segment title case.
const CASING_OVERRIDES: &[&str] = &["Call-ID", "CSeq", "MIME-Version", "WWW-Authenticate"];

/// Resolves any header name to its canonical spelling.
///
/// Compact forms map to their full name, everything else is title-cased per
/// `-` segment with a few fixed exceptions. Total: unknown names come back
/// title-cased.
///
/// ```
/// use rvoip_sip_headers::canonical_name;
///
/// assert_eq!(canonical_name("v"), "Via");
/// assert_eq!(canonical_name("call-id"), "Call-ID");
/// assert_eq!(canonical_name("www-authenticate"), "WWW-Authenticate");
/// assert_eq!(canonical_name("x-custom-thing"), "X-Custom-Thing");
/// ```
pub fn canonical_name(name: &str) -> String {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some((_, full)) = COMPACT_FORMS.iter().find(|(short, _)| short.eq_ignore_ascii_case(&c)) {
            return (*full).to_string();
        }
    }

    let title = name
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-");

    match CASING_OVERRIDES.iter().find(|o| o.eq_ignore_ascii_case(&title)) {
        Some(fixed) => (*fixed).to_string(),
        None => title,
    }
}

/// Common SIP header names
///
/// Header names are case-insensitive in SIP; this enum keeps the canonical
/// capitalization for standard headers and folds case while parsing.
/// Names with no dedicated variant are kept, canonicalized, in `Other`.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
/// use std::str::FromStr;
///
/// let from = HeaderName::From;
/// assert_eq!(from.as_str(), "From");
///
/// let from_compact = HeaderName::from_str("f").unwrap();
/// assert_eq!(from_compact, HeaderName::From);
///
/// let custom = HeaderName::from_str("x-custom-header").unwrap();
/// assert_eq!(custom, HeaderName::Other("X-Custom-Header".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderName {
    /// Accept: Media types acceptable in the response
    Accept,
    /// Accept-Encoding: Acceptable content codings
    AcceptEncoding,
    /// Accept-Language: Preferred languages for reason phrases and bodies
    AcceptLanguage,
    /// Alert-Info: Alternative ring tone
    AlertInfo,
    /// Allow: Methods supported by the UA
    Allow,
    /// Authentication-Info: Mutual authentication data
    AuthenticationInfo,
    /// Authorization: Credentials provided by a UA
    Authorization,
    /// Call-ID: Unique identifier for this call
    CallId,
    /// Call-Info: Additional information about the caller or callee
    CallInfo,
    /// Contact: Where subsequent requests should be sent
    Contact,
    /// Content-Disposition: How the body is to be interpreted
    ContentDisposition,
    /// Content-Encoding: Codings applied to the body
    ContentEncoding,
    /// Content-Language: Language of the body
    ContentLanguage,
    /// Content-Length: Size of the message body
    ContentLength,
    /// Content-Type: Media type of the message body
    ContentType,
    /// CSeq: Command sequence number
    CSeq,
    /// Date: Date and time of the request or response
    Date,
    /// Error-Info: Pointer to additional error information
    ErrorInfo,
    /// Event: Event package (RFC 6665)
    Event,
    /// Expires: Expiration time for registration or subscription
    Expires,
    /// From: Initiator of the request
    From,
    /// In-Reply-To: Call-IDs this call references
    InReplyTo,
    /// Max-Forwards: Limit on the number of proxies or gateways
    MaxForwards,
    /// MIME-Version
    MimeVersion,
    /// Min-Expires: Minimum expiration time
    MinExpires,
    /// Organization
    Organization,
    /// Priority: Urgency of the request
    Priority,
    /// Proxy-Authenticate: Challenge from a proxy
    ProxyAuthenticate,
    /// Proxy-Authorization: Credentials for a proxy
    ProxyAuthorization,
    /// Proxy-Require: Extensions a proxy must support
    ProxyRequire,
    /// Record-Route: Proxies to stay on the path
    RecordRoute,
    /// Reply-To: Logical return URI
    ReplyTo,
    /// Require: Extensions the UAS must support
    Require,
    /// Retry-After: When the service is expected to be available again
    RetryAfter,
    /// Route: Proxies the request should traverse
    Route,
    /// Server: Software used by the UAS
    Server,
    /// Subject: Summary of the call
    Subject,
    /// Supported: Extensions supported by the UA
    Supported,
    /// Timestamp: When the request was sent
    Timestamp,
    /// To: Logical recipient of the request
    To,
    /// Unsupported: Extensions not supported by the UAS
    Unsupported,
    /// User-Agent: Software used by the UAC
    UserAgent,
    /// Via: Path taken by the request so far
    Via,
    /// Warning: Additional status information
    Warning,
    /// WWW-Authenticate: Challenge from a UAS or registrar
    WwwAuthenticate,
    /// Any other header, canonicalized
    Other(String),
}

impl HeaderName {
    /// Canonical spelling of the header name.
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::Accept => "Accept",
            HeaderName::AcceptEncoding => "Accept-Encoding",
            HeaderName::AcceptLanguage => "Accept-Language",
            HeaderName::AlertInfo => "Alert-Info",
            HeaderName::Allow => "Allow",
            HeaderName::AuthenticationInfo => "Authentication-Info",
            HeaderName::Authorization => "Authorization",
            HeaderName::CallId => "Call-ID",
            HeaderName::CallInfo => "Call-Info",
            HeaderName::Contact => "Contact",
            HeaderName::ContentDisposition => "Content-Disposition",
            HeaderName::ContentEncoding => "Content-Encoding",
            HeaderName::ContentLanguage => "Content-Language",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::CSeq => "CSeq",
            HeaderName::Date => "Date",
            HeaderName::ErrorInfo => "Error-Info",
            HeaderName::Event => "Event",
            HeaderName::Expires => "Expires",
            HeaderName::From => "From",
            HeaderName::InReplyTo => "In-Reply-To",
            HeaderName::MaxForwards => "Max-Forwards",
            HeaderName::MimeVersion => "MIME-Version",
            HeaderName::MinExpires => "Min-Expires",
            HeaderName::Organization => "Organization",
            HeaderName::Priority => "Priority",
            HeaderName::ProxyAuthenticate => "Proxy-Authenticate",
            HeaderName::ProxyAuthorization => "Proxy-Authorization",
            HeaderName::ProxyRequire => "Proxy-Require",
            HeaderName::RecordRoute => "Record-Route",
            HeaderName::ReplyTo => "Reply-To",
            HeaderName::Require => "Require",
            HeaderName::RetryAfter => "Retry-After",
            HeaderName::Route => "Route",
            HeaderName::Server => "Server",
            HeaderName::Subject => "Subject",
            HeaderName::Supported => "Supported",
            HeaderName::Timestamp => "Timestamp",
            HeaderName::To => "To",
            HeaderName::Unsupported => "Unsupported",
            HeaderName::UserAgent => "User-Agent",
            HeaderName::Via => "Via",
            HeaderName::Warning => "Warning",
            HeaderName::WwwAuthenticate => "WWW-Authenticate",
            HeaderName::Other(s) => s.as_str(),
        }
    }

    /// The single-character compact form, when the header has one.
    pub fn compact_form(&self) -> Option<&'static str> {
        match self {
            HeaderName::ContentType => Some("c"),
            HeaderName::ContentEncoding => Some("e"),
            HeaderName::From => Some("f"),
            HeaderName::CallId => Some("i"),
            HeaderName::Supported => Some("k"),
            HeaderName::ContentLength => Some("l"),
            HeaderName::Contact => Some("m"),
            HeaderName::Event => Some("o"),
            HeaderName::Subject => Some("s"),
            HeaderName::To => Some("t"),
            HeaderName::Via => Some("v"),
            _ => None,
        }
    }

    /// True for names without a dedicated variant.
    pub fn is_extension(&self) -> bool {
        matches!(self, HeaderName::Other(_))
    }

    /// Resolves any name, including compact forms and extensions. Never
    /// fails; an empty name becomes an empty `Other`.
    pub fn from_canonical(name: &str) -> HeaderName {
        let canonical = canonical_name(name);
        match canonical.as_str() {
            "Accept" => HeaderName::Accept,
            "Accept-Encoding" => HeaderName::AcceptEncoding,
            "Accept-Language" => HeaderName::AcceptLanguage,
            "Alert-Info" => HeaderName::AlertInfo,
            "Allow" => HeaderName::Allow,
            "Authentication-Info" => HeaderName::AuthenticationInfo,
            "Authorization" => HeaderName::Authorization,
            "Call-ID" => HeaderName::CallId,
            "Call-Info" => HeaderName::CallInfo,
            "Contact" => HeaderName::Contact,
            "Content-Disposition" => HeaderName::ContentDisposition,
            "Content-Encoding" => HeaderName::ContentEncoding,
            "Content-Language" => HeaderName::ContentLanguage,
            "Content-Length" => HeaderName::ContentLength,
            "Content-Type" => HeaderName::ContentType,
            "CSeq" => HeaderName::CSeq,
            "Date" => HeaderName::Date,
            "Error-Info" => HeaderName::ErrorInfo,
            "Event" => HeaderName::Event,
            "Expires" => HeaderName::Expires,
            "From" => HeaderName::From,
            "In-Reply-To" => HeaderName::InReplyTo,
            "Max-Forwards" => HeaderName::MaxForwards,
            "MIME-Version" => HeaderName::MimeVersion,
            "Min-Expires" => HeaderName::MinExpires,
            "Organization" => HeaderName::Organization,
            "Priority" => HeaderName::Priority,
            "Proxy-Authenticate" => HeaderName::ProxyAuthenticate,
            "Proxy-Authorization" => HeaderName::ProxyAuthorization,
            "Proxy-Require" => HeaderName::ProxyRequire,
            "Record-Route" => HeaderName::RecordRoute,
            "Reply-To" => HeaderName::ReplyTo,
            "Require" => HeaderName::Require,
            "Retry-After" => HeaderName::RetryAfter,
            "Route" => HeaderName::Route,
            "Server" => HeaderName::Server,
            "Subject" => HeaderName::Subject,
            "Supported" => HeaderName::Supported,
            "Timestamp" => HeaderName::Timestamp,
            "To" => HeaderName::To,
            "Unsupported" => HeaderName::Unsupported,
            "User-Agent" => HeaderName::UserAgent,
            "Via" => HeaderName::Via,
            "Warning" => HeaderName::Warning,
            "WWW-Authenticate" => HeaderName::WwwAuthenticate,
            _ => HeaderName::Other(canonical),
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ParseError("Empty header name is not allowed".to_string()));
        }

        Ok(HeaderName::from_canonical(s))
    }
}
