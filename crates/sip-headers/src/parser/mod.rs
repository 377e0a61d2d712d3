//! Header value parsing.
//!
//! The low level modules (`whitespace`, `separators`, `token`) hold the
//! RFC 3261 lexical productions. [`grammar`] combines them into rules that
//! produce a tree of named [`Node`]s, and the adapters under [`headers`]
//! walk those trees through the [`ParseNode`] interface to build the typed
//! values in [`crate::types`].
//!
//! The entry points here dispatch on the header name: registered parsers
//! first, then the built-in kinds, then the generic fallback.

use nom::IResult;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::headers::{build_header, resolve_parser, HeaderName, TypedHeader};

pub mod grammar;
pub mod headers;
pub mod node;
pub mod separators;
pub mod token;
pub mod utils;
pub mod whitespace;

pub use node::{Node, ParseNode};
pub use utils::unfold_lws;

/// Result type shared by every grammar rule.
pub type ParseResult<'a, O> = IResult<&'a str, O>;

/// Parses the raw value of header `name` into a [`TypedHeader`].
///
/// `name` may be a compact form (`"v"`) or any casing of the canonical
/// name. A parser registered for the name takes precedence over the
/// built-in kind. Names without either produce [`TypedHeader::Any`];
/// an unknown name is never an error, a malformed value of a known kind
/// is.
///
/// ```
/// use rvoip_sip_headers::prelude::*;
///
/// let header = parse_header_value("l", b"349").unwrap();
/// assert_eq!(header, TypedHeader::ContentLength(ContentLength::new(349)));
/// assert!(parse_header_value("Content-Length", b"many").is_err());
/// ```
pub fn parse_header_value(name: &str, raw: &[u8]) -> Result<TypedHeader> {
    let header_name: HeaderName = name.parse()?;

    if resolve_parser(header_name.as_str()).is_some() {
        return Ok(build_header(header_name.as_str(), raw));
    }
    if !TypedHeader::is_builtin(&header_name) {
        return Ok(build_header(header_name.as_str(), raw));
    }

    let text = std::str::from_utf8(raw)?;
    let value = unfold_lws(text);
    match TypedHeader::parse_builtin(&header_name, value.trim()) {
        Some(Ok(header)) => Ok(header),
        Some(Err(e)) => {
            debug!(header = %header_name, error = %e, "rejected header value");
            Err(e)
        }
        None => Ok(build_header(header_name.as_str(), raw)),
    }
}

/// Parses a whole `Name: value` line. A trailing CRLF is ignored.
///
/// ```
/// use rvoip_sip_headers::prelude::*;
///
/// let header = parse_header_line("i: a84b4c76e66710@pc33.atlanta.com\r\n").unwrap();
/// assert_eq!(header.name(), HeaderName::CallId);
/// assert_eq!(header.to_header_string(&RenderOptions::default()), "Call-ID: a84b4c76e66710@pc33.atlanta.com");
/// ```
pub fn parse_header_line(line: &str) -> Result<TypedHeader> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| Error::InvalidHeader(format!("missing colon: {}", line)))?;
    let name = name.trim_end_matches(|c| c == ' ' || c == '\t');
    if name.is_empty() || name.starts_with(|c: char| c == ' ' || c == '\t') {
        return Err(Error::InvalidHeader(format!("invalid header name: {:?}", name)));
    }
    parse_header_value(name, value.as_bytes())
}
