//! Comma separated token list headers.
//!
//! Entries are compared in order, ASCII case-insensitively. Reordering the
//! same set of tokens yields a different header value.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::parser::token::is_token;
use crate::types::headers::HeaderName;
use crate::types::method::Method;
use crate::types::render::write_joined;

fn tokens_eq(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_ignore_ascii_case(y))
}

fn tokens_valid(tokens: &[String], min: usize) -> bool {
    tokens.len() >= min && tokens.iter().all(|t| is_token(t))
}

macro_rules! token_list {
    ($(#[$meta:meta])* $name:ident, $header:expr, min = $min:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name(pub Vec<String>);

        impl $name {
            pub fn new<I, S>(tokens: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                $name(tokens.into_iter().map(Into::into).collect())
            }

            /// Case-insensitive membership test.
            pub fn contains(&self, token: &str) -> bool {
                self.0.iter().any(|t| t.eq_ignore_ascii_case(token))
            }

            pub fn push(&mut self, token: impl Into<String>) {
                self.0.push(token.into());
            }

            pub fn is_valid(&self) -> bool {
                tokens_valid(&self.0, $min)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                tokens_eq(&self.0, &other.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_joined(f, &self.0, ", ")
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                adapter::parse_token_list(s).map($name)
            }
        }

        newtype_deref!($name => Vec<String>);
        impl_header!($name, $header);
    };
}

token_list!(
    /// Require header (RFC 3261 Section 20.32)
    Require, HeaderName::Require, min = 1
);
token_list!(
    /// Proxy-Require header (RFC 3261 Section 20.29)
    ProxyRequire, HeaderName::ProxyRequire, min = 1
);
token_list!(
    /// Unsupported header (RFC 3261 Section 20.40)
    Unsupported, HeaderName::Unsupported, min = 1
);
token_list!(
    /// Supported header (RFC 3261 Section 20.37). An empty list is legal.
    Supported, HeaderName::Supported, min = 0
);
token_list!(
    /// Content-Encoding header (RFC 3261 Section 20.12)
    ContentEncoding, HeaderName::ContentEncoding, min = 1
);

/// Content-Language header (RFC 3261 Section 20.13)
#[derive(Debug, Clone, Default)]
pub struct ContentLanguage(pub Vec<String>);

impl ContentLanguage {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentLanguage(tags.into_iter().map(Into::into).collect())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|t| t != "*" && crate::types::accept_language::is_language_range(t))
    }
}

impl PartialEq for ContentLanguage {
    fn eq(&self, other: &Self) -> bool {
        tokens_eq(&self.0, &other.0)
    }
}

impl fmt::Display for ContentLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for ContentLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_token_list(s).map(ContentLanguage)
    }
}

newtype_deref!(ContentLanguage => Vec<String>);
impl_header!(ContentLanguage, HeaderName::ContentLanguage);

/// Allow header (RFC 3261 Section 20.5)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allow(pub Vec<Method>);

impl Allow {
    pub fn new(methods: Vec<Method>) -> Self {
        Allow(methods)
    }

    pub fn allows(&self, method: &Method) -> bool {
        self.0.contains(method)
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Method::is_valid)
    }
}

impl fmt::Display for Allow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for Allow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_method_list(s).map(Allow)
    }
}

newtype_deref!(Allow => Vec<Method>);
impl_header!(Allow, HeaderName::Allow);

/// In-Reply-To header (RFC 3261 Section 20.21). Call-IDs are compared
/// case-sensitively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InReplyTo(pub Vec<String>);

impl InReplyTo {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InReplyTo(ids.into_iter().map(Into::into).collect())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|id| crate::types::call_id::is_call_id(id))
    }
}

impl fmt::Display for InReplyTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for InReplyTo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_call_id_list(s).map(InReplyTo)
    }
}

newtype_deref!(InReplyTo => Vec<String>);
impl_header!(InReplyTo, HeaderName::InReplyTo);
