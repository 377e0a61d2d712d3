//! Address records: From, To, Reply-To, Contact, Route and Record-Route.
//!
//! Every address header carries one or more [`NameAddr`] values: an optional
//! display name, a URI and parameters. Comparison ignores the display name
//! and treats `tag` and `expires` as special parameters.
//!
//! ```
//! use rvoip_sip_headers::prelude::*;
//! use rvoip_sip_headers::types::address::From;
//!
//! let from: From = "\"Alice\" <sip:alice@atlanta.com>;tag=1928301774".parse().unwrap();
//! assert_eq!(from.tag(), Some("1928301774"));
//!
//! // display names and foreign parameters do not matter
//! let same: From = "<sip:alice@atlanta.com>;tag=1928301774;x=1".parse().unwrap();
//! assert_eq!(from, same);
//!
//! // tag is special: present on one side only means different
//! let untagged: From = "<sip:alice@atlanta.com>".parse().unwrap();
//! assert_ne!(from, untagged);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::address as adapter;
use crate::parser::token::{is_text, quote};
use crate::types::equality::{compare, ADDRESS_SPECIAL};
use crate::types::headers::HeaderName;
use crate::types::render::write_joined;
use crate::types::uri::Uri;
use crate::types::values::Values;

/// `[display-name] <URI> *(;param)`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameAddr {
    pub display_name: Option<String>,
    pub uri: Option<Uri>,
    pub params: Values,
}

impl NameAddr {
    pub fn new(uri: Uri) -> Self {
        NameAddr {
            display_name: None,
            uri: Some(uri),
            params: Values::new(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(name, value);
        self
    }

    /// True for the zero value: nothing set at all.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.uri.is_none() && self.params.is_empty()
    }

    pub fn tag(&self) -> Option<&str> {
        self.params.last("tag")
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.params.set("tag", tag);
    }

    pub fn expires(&self) -> Option<u32> {
        self.params.last("expires").and_then(|e| e.parse().ok())
    }

    pub fn q(&self) -> Option<f32> {
        self.params.last("q").and_then(|q| q.parse().ok())
    }

    pub fn is_valid(&self) -> bool {
        self.uri.as_ref().map_or(false, Uri::is_valid)
            && self.display_name.as_deref().map_or(true, is_text)
            && self.params.is_valid()
    }
}

impl PartialEq for NameAddr {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri && compare(&self.params, &other.params, ADDRESS_SPECIAL)
    }
}

impl fmt::Display for NameAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            write!(f, "{} ", quote(name))?;
        }
        if let Some(uri) = &self.uri {
            write!(f, "<{}>", uri)?;
        }
        self.params.write_to(f, true)
    }
}

impl FromStr for NameAddr {
    type Err = Error;

    /// Empty input yields the zero value.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(NameAddr::default());
        }
        adapter::parse_name_addr(s)
    }
}

/// From header (RFC 3261 Section 20.20)
#[derive(Debug, Clone, PartialEq)]
pub struct From(pub NameAddr);

/// To header (RFC 3261 Section 20.39)
#[derive(Debug, Clone, PartialEq)]
pub struct To(pub NameAddr);

/// Reply-To header (RFC 3261 Section 20.31)
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyTo(pub NameAddr);

macro_rules! single_address {
    ($ty:ident, $name:expr) => {
        impl $ty {
            pub fn new(addr: NameAddr) -> Self {
                $ty(addr)
            }

            pub fn tag(&self) -> Option<&str> {
                self.0.tag()
            }

            pub fn set_tag(&mut self, tag: impl Into<String>) {
                self.0.set_tag(tag)
            }

            pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
                self.0.set_tag(tag);
                self
            }

            pub fn is_valid(&self) -> bool {
                self.0.is_valid()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                adapter::parse_single_address(s).map($ty)
            }
        }

        newtype_deref!($ty => NameAddr);
        impl_header!($ty, $name);
    };
}

single_address!(From, HeaderName::From);
single_address!(To, HeaderName::To);
single_address!(ReplyTo, HeaderName::ReplyTo);

/// Contact header (RFC 3261 Section 20.10)
///
/// An empty list is the wildcard form `*`, used in REGISTER to remove all
/// bindings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contact(pub Vec<NameAddr>);

impl Contact {
    pub fn new(addrs: Vec<NameAddr>) -> Self {
        Contact(addrs)
    }

    /// The `*` form.
    pub fn wildcard() -> Self {
        Contact(Vec::new())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().all(NameAddr::is_valid)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return f.write_str("*");
        }
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for Contact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_contact(s)
    }
}

newtype_deref!(Contact => Vec<NameAddr>);
impl_header!(Contact, HeaderName::Contact);

/// Route header (RFC 3261 Section 20.34)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route(pub Vec<NameAddr>);

/// Record-Route header (RFC 3261 Section 20.30)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordRoute(pub Vec<NameAddr>);

macro_rules! address_list {
    ($ty:ident, $name:expr) => {
        impl $ty {
            pub fn new(addrs: Vec<NameAddr>) -> Self {
                $ty(addrs)
            }

            /// At least one entry, every entry valid.
            pub fn is_valid(&self) -> bool {
                !self.0.is_empty() && self.0.iter().all(NameAddr::is_valid)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_joined(f, &self.0, ", ")
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                adapter::parse_address_list(s).map($ty)
            }
        }

        newtype_deref!($ty => Vec<NameAddr>);
        impl_header!($ty, $name);
    };
}

address_list!(Route, HeaderName::Route);
address_list!(RecordRoute, HeaderName::RecordRoute);
