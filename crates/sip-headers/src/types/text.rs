//! Free-text headers. The value is kept verbatim after unfolding and
//! trimming and compared case-sensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::token::is_text;
use crate::parser::utils::unfold_lws;
use crate::types::headers::HeaderName;

macro_rules! text_header {
    ($(#[$meta:meta])* $name:ident, $header:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                $name(text.into())
            }

            pub fn is_valid(&self) -> bool {
                is_text(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Ok($name(unfold_lws(s).trim().to_string()))
            }
        }

        newtype_deref!($name => String);
        impl_header!($name, $header);
    };
}

text_header!(
    /// Subject header (RFC 3261 Section 20.36)
    Subject, HeaderName::Subject
);
text_header!(
    /// Organization header (RFC 3261 Section 20.25)
    Organization, HeaderName::Organization
);
text_header!(
    /// Server header (RFC 3261 Section 20.35)
    Server, HeaderName::Server
);
text_header!(
    /// User-Agent header (RFC 3261 Section 20.41)
    UserAgent, HeaderName::UserAgent
);
