use std::any::Any;
use std::fmt;
use std::io;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::headers::header_name::HeaderName;
use crate::types::headers::typed_header::TypedHeader;
use crate::types::render::{self, BufferPool, RenderOptions};

/// Capability contract shared by every header value.
///
/// `Display` renders the value part only (what follows `Name: `), while
/// [`Header::render`] produces the whole line. Equality follows the header
/// kind's protocol rules and is exposed through [`Header::equal`] so it
/// works across trait objects; concrete types also implement `PartialEq`
/// with the same semantics.
///
/// # Examples
///
/// ```
/// use rvoip_sip_headers::prelude::*;
///
/// let a: Box<dyn Header> = Box::new("Alice <sip:alice@atlanta.com>;tag=1928".parse::<To>().unwrap());
/// let b = a.clone();
/// assert!(a.equal(b.as_ref()));
/// assert!(a.validate());
/// assert_eq!(a.name(), HeaderName::To);
/// ```
pub trait Header: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Canonical header name.
    fn name(&self) -> HeaderName;

    /// Single-character compact name, if the header defines one.
    fn compact_name(&self) -> Option<&'static str> {
        self.name().compact_form()
    }

    /// Semantic validity. Never fails, only reports.
    fn validate(&self) -> bool;

    /// Protocol equivalence with another header of any kind. Headers of
    /// different kinds are never equal.
    fn equal(&self, other: &dyn Header) -> bool;

    /// Deep copy behind a trait object.
    fn clone_header(&self) -> Box<dyn Header>;

    fn as_any(&self) -> &dyn Any;

    /// Writes `Name: value` to `w` through the global buffer pool and
    /// returns the number of bytes written.
    fn render(&self, w: &mut dyn io::Write, opts: &RenderOptions) -> Result<usize> {
        render::render_header(self, w, opts)
    }

    /// Like [`Header::render`] with an explicit buffer pool.
    fn render_with_pool(&self, pool: &BufferPool, w: &mut dyn io::Write, opts: &RenderOptions) -> Result<usize> {
        render::render_with_pool(pool, self, w, opts)
    }

    /// The full header line as a `String`.
    fn to_header_string(&self, opts: &RenderOptions) -> String {
        render::header_to_string(self, opts)
    }
}

/// Statically known header kinds.
///
/// Lets generic code ask for the name of a kind without an instance and
/// parse values of that kind, as the JSON envelope does.
pub trait TypedHeaderTrait: Header + Clone + FromStr<Err = Error> + Sized {
    fn header_name() -> HeaderName;
}

/// Equality through downcasting: `other` must be a `T` (possibly wrapped in
/// a [`TypedHeader`]) that compares equal to `this`.
pub fn downcast_eq<T: Header + PartialEq>(this: &T, other: &dyn Header) -> bool {
    TypedHeader::unwrap_dyn(other)
        .as_any()
        .downcast_ref::<T>()
        .map_or(false, |o| this == o)
}

impl Clone for Box<dyn Header> {
    fn clone(&self) -> Self {
        self.clone_header()
    }
}

impl PartialEq for dyn Header {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}
