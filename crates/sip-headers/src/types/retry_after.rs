use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::types::equality::{compare, RETRY_AFTER_SPECIAL};
use crate::types::headers::HeaderName;
use crate::types::values::Values;

/// Retry-After header (RFC 3261 Section 20.33)
///
/// `delta-seconds [ comment ] *( SEMI retry-param )`. The comment is kept
/// for display but plays no part in equality; `duration` is special.
///
/// ```
/// use rvoip_sip_headers::types::RetryAfter;
///
/// let ra: RetryAfter = "18000;duration=3600".parse().unwrap();
/// assert_eq!(ra.delay, 18000);
/// assert_eq!(ra.duration(), Some(3600));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryAfter {
    pub delay: u32,
    /// Comment text without the enclosing parentheses.
    pub comment: Option<String>,
    pub params: Values,
}

impl RetryAfter {
    pub fn new(delay: u32) -> Self {
        RetryAfter { delay, ..Default::default() }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.params.set("duration", duration.to_string());
        self
    }

    pub fn duration(&self) -> Option<u32> {
        self.params.last("duration").and_then(|d| d.parse().ok())
    }

    pub fn is_valid(&self) -> bool {
        let comment_ok = self.comment.as_deref().map_or(true, |c| {
            let depth = c.chars().try_fold(0i32, |depth, ch| {
                let depth = match ch {
                    '(' => depth + 1,
                    ')' => depth - 1,
                    _ => depth,
                };
                (depth >= 0).then_some(depth)
            });
            depth == Some(0) && !c.chars().any(|ch| ch.is_control())
        });
        let duration_ok = !self.params.has("duration") || self.duration().is_some();
        comment_ok && duration_ok && self.params.is_valid()
    }
}

impl PartialEq for RetryAfter {
    fn eq(&self, other: &Self) -> bool {
        self.delay == other.delay && compare(&self.params, &other.params, RETRY_AFTER_SPECIAL)
    }
}

impl fmt::Display for RetryAfter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.delay)?;
        if let Some(comment) = &self.comment {
            write!(f, " ({})", comment)?;
        }
        self.params.write_to(f, true)
    }
}

impl FromStr for RetryAfter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_retry_after(s)
    }
}

impl_header!(RetryAfter, HeaderName::RetryAfter);
