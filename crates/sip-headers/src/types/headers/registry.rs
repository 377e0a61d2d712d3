//! Process-wide extension header registry.
//!
//! Maps lowercase header names to parser functions so applications can
//! plug in their own header kinds without touching this crate. Lookups
//! that miss, and parsers that decline a value, fall back to
//! [`AnyHeader`]: building a header never fails because of its name.
//!
//! Registration is expected to happen during start-up, before the first
//! parse, but the table is internally synchronized and may be mutated at
//! any time.
//!
//! ```
//! use rvoip_sip_headers::prelude::*;
//! use rvoip_sip_headers::{build_header, register_parser, unregister_parser};
//!
//! register_parser("X-Doc-Priority", |_name, raw| {
//!     let text = std::str::from_utf8(raw).ok()?;
//!     text.trim().parse::<Priority>().ok().map(TypedHeader::from)
//! });
//! let header = build_header("x-doc-priority", b"urgent");
//! assert_eq!(header.downcast_ref::<Priority>(), Some(&Priority::Urgent));
//!
//! unregister_parser("X-DOC-PRIORITY");
//! assert!(matches!(build_header("X-Doc-Priority", b"urgent"), TypedHeader::Any(_)));
//! ```

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::{debug, trace};

use super::any_header::AnyHeader;
use super::typed_header::TypedHeader;
use crate::parser::utils::unfold_lws;

/// Parser for one header name: receives the name as written and the raw
/// value bytes, returns `None` to decline the value.
pub type HeaderParser = Arc<dyn Fn(&str, &[u8]) -> Option<TypedHeader> + Send + Sync>;

static REGISTRY: OnceLock<DashMap<String, HeaderParser>> = OnceLock::new();

fn registry() -> &'static DashMap<String, HeaderParser> {
    REGISTRY.get_or_init(DashMap::new)
}

/// Registers `parser` for `name` (case-insensitive). A later registration
/// for the same name replaces the earlier one.
pub fn register_parser<F>(name: &str, parser: F)
where
    F: Fn(&str, &[u8]) -> Option<TypedHeader> + Send + Sync + 'static,
{
    let key = name.trim().to_ascii_lowercase();
    debug!(header = %key, "registering header parser");
    if registry().insert(key, Arc::new(parser)).is_some() {
        debug!(header = %name.trim(), "replaced existing header parser");
    }
}

/// Removes the parser for `name`. Returns whether one was registered.
pub fn unregister_parser(name: &str) -> bool {
    let key = name.trim().to_ascii_lowercase();
    let removed = registry().remove(&key).is_some();
    debug!(header = %key, removed, "unregistering header parser");
    removed
}

/// The parser registered for `name`, if any.
pub fn resolve_parser(name: &str) -> Option<HeaderParser> {
    registry()
        .get(&name.trim().to_ascii_lowercase())
        .map(|entry| Arc::clone(entry.value()))
}

/// Builds a header from a name and raw value through the registry.
///
/// Falls back to [`AnyHeader`] when no parser is registered or the
/// registered parser declines the value.
pub fn build_header(name: &str, raw: &[u8]) -> TypedHeader {
    // The map guard is released before the parser runs so parsers may
    // themselves use the registry.
    if let Some(parser) = resolve_parser(name) {
        trace!(header = %name, "registry hit");
        if let Some(header) = parser(name, raw) {
            return header;
        }
        trace!(header = %name, "registered parser declined value");
    }
    trace!(header = %name, "falling back to generic header");
    let text = String::from_utf8_lossy(raw);
    let value = unfold_lws(&text).trim().to_string();
    TypedHeader::Any(AnyHeader::new(name, value))
}
