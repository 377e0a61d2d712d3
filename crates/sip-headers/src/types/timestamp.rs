use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::types::headers::HeaderName;

/// Timestamp header (RFC 3261 Section 20.38): a request timestamp with an
/// optional processing delay added by the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timestamp {
    pub value: OrderedFloat<f64>,
    pub delay: Option<OrderedFloat<f64>>,
}

impl Timestamp {
    pub fn new(value: f64, delay: Option<f64>) -> Self {
        Timestamp {
            value: OrderedFloat(value),
            delay: delay.map(OrderedFloat),
        }
    }

    pub fn is_valid(&self) -> bool {
        let ok = |v: OrderedFloat<f64>| v.into_inner().is_finite() && v.into_inner() >= 0.0;
        ok(self.value) && self.delay.map_or(true, ok)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(delay) = self.delay {
            write!(f, " {}", delay)?;
        }
        Ok(())
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_timestamp(s)
    }
}

impl_header!(Timestamp, HeaderName::Timestamp);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp() {
        let ts: Timestamp = "54".parse().unwrap();
        assert_eq!(ts, Timestamp::new(54.0, None));
        assert_eq!(ts.to_string(), "54");

        let ts: Timestamp = "54.3 0.25".parse().unwrap();
        assert_eq!(ts, Timestamp::new(54.3, Some(0.25)));
        assert_eq!(ts.to_string(), "54.3 0.25");
        assert!(ts.is_valid());
        assert!("abc".parse::<Timestamp>().is_err());
    }
}
