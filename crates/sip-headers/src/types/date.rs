use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::headers::HeaderName;

const RFC1123_GMT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Date header (RFC 3261 Section 20.17), always expressed in GMT.
///
/// ```
/// use rvoip_sip_headers::types::Date;
///
/// let date: Date = "Sat, 13 Nov 2010 23:29:00 GMT".parse().unwrap();
/// assert_eq!(date.to_string(), "Sat, 13 Nov 2010 23:29:00 GMT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date(pub DateTime<Utc>);

impl Date {
    pub fn new(at: DateTime<Utc>) -> Self {
        Date(at)
    }

    pub fn now() -> Self {
        Date(Utc::now())
    }

    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RFC1123_GMT))
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(s.trim(), RFC1123_GMT)
            .map(|naive| Date(naive.and_utc()))
            .map_err(|e| Error::ParseError(format!("Invalid Date '{}': {}", s.trim(), e)))
    }
}

impl_header!(Date, HeaderName::Date);
