//! Typed SIP header values for rvoip
//!
//! This crate provides the header-value layer of the rvoip SIP stack: the
//! ordered parameter map shared by most headers, the protocol equivalence
//! rules, deterministic rendering on top of a pooled scratch buffer, the
//! polymorphic authorization families and an open registry through which
//! applications can plug in parsers for their own header names.
//!
//! # Overview
//!
//! Every concrete header implements the [`Header`] trait: it can render
//! itself (`Display` for the value, [`Header::render`] for the full
//! `Name: value` line), clone itself behind a trait object, compare itself
//! with another header under RFC 3261 rules and validate its own syntax.
//!
//! ```
//! use rvoip_sip_headers::prelude::*;
//!
//! let via: Via = "SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds".parse().unwrap();
//! let same: Via = "sip/2.0/udp PC33.ATLANTA.COM;BRANCH=z9hG4bK776asdhds".parse().unwrap();
//! assert_eq!(via, same);
//!
//! let mut out = Vec::new();
//! via.render(&mut out, &RenderOptions::compact()).unwrap();
//! assert_eq!(out, b"v: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds");
//! ```
//!
//! Unknown header names are never an error. They round-trip through
//! [`types::headers::AnyHeader`] unless a parser was registered for them:
//!
//! ```
//! use rvoip_sip_headers::prelude::*;
//!
//! let header = parse_header_value("x-anything", b"some opaque value").unwrap();
//! assert_eq!(header.name().as_str(), "X-Anything");
//! assert_eq!(header.to_string(), "some opaque value");
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod parser;
pub mod types;

#[cfg(feature = "json")]
pub mod json;

pub use error::{Error, Result};
pub use parser::{parse_header_line, parse_header_value};
pub use types::headers::{
    build_header, canonical_name, register_parser, resolve_parser, unregister_parser, AnyHeader,
    Header, HeaderName, HeaderParser, TypedHeader, TypedHeaderTrait,
};
pub use types::render::{BufferPool, RenderOptions};
pub use types::uri::{Host, Uri};
pub use types::values::Values;

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parser::{parse_header_line, parse_header_value, ParseNode};
    pub use crate::types::address::{Contact, NameAddr, RecordRoute, ReplyTo, Route, To};
    pub use crate::types::auth::{
        Algorithm, AuthChallenge, AuthCredentials, AuthenticationInfo, Authorization,
        BearerChallenge, BearerCredentials, DigestChallenge, DigestCredentials, DomainEntry,
        ProxyAuthenticate, ProxyAuthorization, Qop, WwwAuthenticate,
    };
    pub use crate::types::equality::{compare, compare_strict};
    pub use crate::types::headers::{
        build_header, canonical_name, register_parser, unregister_parser, AnyHeader, Header,
        HeaderName, TypedHeader, TypedHeaderTrait,
    };
    pub use crate::types::media_type::{ContentType, MimeType};
    pub use crate::types::method::Method;
    pub use crate::types::render::{BufferPool, RenderOptions};
    pub use crate::types::uri::{Host, SipUri, Uri};
    pub use crate::types::values::Values;
    pub use crate::types::via::{Transport, Via, ViaHop};
    pub use crate::types::{
        Accept, AcceptEncoding, AcceptLanguage, AlertInfo, Allow, CSeq, CallId, CallInfo,
        ContentDisposition, ContentEncoding, ContentLanguage, ContentLength, Date, ErrorInfo,
        Expires, InReplyTo, MaxForwards, MimeVersion, MinExpires, Organization, Priority,
        ProxyRequire, Require, RetryAfter, Server, Subject, Supported, Timestamp, Unsupported,
        UserAgent, Warning,
    };

    #[cfg(feature = "json")]
    pub use crate::json::HeaderEnvelope;
}
