//! Header wrappers around the credential and challenge families.

use std::fmt;
use std::str::FromStr;

use super::{AuthChallenge, AuthCredentials};
use crate::error::{Error, Result};
use crate::types::headers::HeaderName;

macro_rules! auth_header {
    ($(#[$meta:meta])* $name:ident($inner:ty), $header:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(pub $inner);

        impl $name {
            pub fn new(value: impl Into<$inner>) -> Self {
                $name(value.into())
            }

            pub fn is_valid(&self) -> bool {
                self.0.is_valid()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                s.parse::<$inner>().map($name)
            }
        }

        newtype_deref!($name => $inner);
        impl_header!($name, $header);
    };
}

auth_header!(
    /// Authorization header (RFC 3261 Section 20.7)
    Authorization(AuthCredentials), HeaderName::Authorization
);
auth_header!(
    /// Proxy-Authorization header (RFC 3261 Section 20.28)
    ProxyAuthorization(AuthCredentials), HeaderName::ProxyAuthorization
);
auth_header!(
    /// WWW-Authenticate header (RFC 3261 Section 20.44)
    WwwAuthenticate(AuthChallenge), HeaderName::WwwAuthenticate
);
auth_header!(
    /// Proxy-Authenticate header (RFC 3261 Section 20.27)
    ProxyAuthenticate(AuthChallenge), HeaderName::ProxyAuthenticate
);
