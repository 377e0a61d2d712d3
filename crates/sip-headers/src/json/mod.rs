//! # JSON transport envelope
//!
//! Headers cross JSON boundaries as a two-field object:
//!
//! ```json
//! {"name": "Via", "value": "SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds"}
//! ```
//!
//! `name` is the canonical header name and `value` the rendered value.
//! Decoding re-parses `value` exactly like a header read off the wire, so
//! the envelope adds no format of its own and no extra validation.
//!
//! ```
//! use rvoip_sip_headers::prelude::*;
//! use rvoip_sip_headers::json::{from_json, to_json};
//!
//! let via: Via = "SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds".parse().unwrap();
//! let json = to_json(&via).unwrap();
//! assert_eq!(json, r#"{"name":"Via","value":"SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds"}"#);
//!
//! let back = from_json(&json).unwrap();
//! assert_eq!(back, TypedHeader::Via(via));
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::{Error, Result};
use crate::parser::{parse_header_value, unfold_lws};
use crate::types::headers::{Header, HeaderName, TypedHeader, TypedHeaderTrait};

/// `{name, value}` pair carrying one header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEnvelope {
    pub name: String,
    pub value: String,
}

impl HeaderEnvelope {
    /// Envelope for `header`: canonical name plus rendered value.
    pub fn from_header(header: &dyn Header) -> Self {
        HeaderEnvelope {
            name: header.name().to_string(),
            value: header.to_string(),
        }
    }

    /// Re-parses the envelope through the normal name dispatch.
    pub fn into_header(self) -> Result<TypedHeader> {
        trace!(header = %self.name, "decoding header envelope");
        parse_header_value(&self.name, self.value.as_bytes())
    }

    /// Decodes the value as `T`.
    ///
    /// An envelope naming any other header is a
    /// [`Error::HeaderNameMismatch`], whatever its value.
    ///
    /// ```
    /// use rvoip_sip_headers::prelude::*;
    ///
    /// let env = HeaderEnvelope { name: "l".into(), value: "42".into() };
    /// assert_eq!(env.decode_as::<ContentLength>().unwrap(), ContentLength::new(42));
    /// assert!(matches!(env.decode_as::<MaxForwards>(), Err(Error::HeaderNameMismatch { .. })));
    /// ```
    pub fn decode_as<T: TypedHeaderTrait>(&self) -> Result<T> {
        let found: HeaderName = self.name.parse()?;
        let expected = T::header_name();
        if found != expected {
            return Err(Error::HeaderNameMismatch {
                expected: expected.to_string(),
                found: self.name.clone(),
            });
        }
        unfold_lws(&self.value).trim().parse::<T>()
    }
}

/// Encodes `header` as a JSON envelope string.
pub fn to_json(header: &dyn Header) -> Result<String> {
    Ok(serde_json::to_string(&HeaderEnvelope::from_header(header))?)
}

/// Decodes a JSON envelope into whatever kind its name selects.
pub fn from_json(json: &str) -> Result<TypedHeader> {
    let envelope: HeaderEnvelope = serde_json::from_str(json)?;
    envelope.into_header()
}

/// Decodes a JSON envelope that must carry a `T`.
pub fn from_json_as<T: TypedHeaderTrait>(json: &str) -> Result<T> {
    let envelope: HeaderEnvelope = serde_json::from_str(json)?;
    envelope.decode_as::<T>()
}

impl Serialize for TypedHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        HeaderEnvelope::from_header(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypedHeader {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        HeaderEnvelope::deserialize(deserializer)?
            .into_header()
            .map_err(D::Error::custom)
    }
}
