//! Headers carrying a single unsigned integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::types::headers::HeaderName;

macro_rules! numeric_header {
    ($(#[$meta:meta])* $name:ident, $header:expr, max = $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(value: u32) -> Self {
                $name(value)
            }

            pub fn value(&self) -> u32 {
                self.0
            }

            pub fn is_valid(&self) -> bool {
                self.0 <= $max
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                adapter::parse_delta(s).map($name)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                $name(value)
            }
        }

        impl_header!($name, $header);
    };
}

numeric_header!(
    /// Content-Length header (RFC 3261 Section 20.14)
    ContentLength, HeaderName::ContentLength, max = u32::MAX
);
numeric_header!(
    /// Max-Forwards header (RFC 3261 Section 20.22)
    MaxForwards, HeaderName::MaxForwards, max = 255
);
numeric_header!(
    /// Expires header (RFC 3261 Section 20.19), delta-seconds.
    Expires, HeaderName::Expires, max = u32::MAX
);
numeric_header!(
    /// Min-Expires header (RFC 3261 Section 20.23)
    MinExpires, HeaderName::MinExpires, max = u32::MAX
);

impl MaxForwards {
    /// Decrements the hop count, returning `None` once it reaches zero.
    pub fn decrement(&self) -> Option<MaxForwards> {
        self.0.checked_sub(1).map(MaxForwards)
    }
}
