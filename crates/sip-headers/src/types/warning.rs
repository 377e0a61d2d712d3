use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::misc as adapter;
use crate::parser::token::{is_host, is_text, is_token, quote};
use crate::types::headers::HeaderName;
use crate::types::render::write_joined;

/// `warn-code SP warn-agent SP warn-text`
///
/// `text` is stored unquoted and quoted again when rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarningEntry {
    pub code: u16,
    /// hostport or pseudonym of the agent adding the warning
    pub agent: String,
    pub text: String,
}

impl WarningEntry {
    pub fn new(code: u16, agent: impl Into<String>, text: impl Into<String>) -> Self {
        WarningEntry { code, agent: agent.into(), text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.code == 0 && self.agent.is_empty() && self.text.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        let agent_ok = match self.agent.rsplit_once(':') {
            Some((host, port)) if !self.agent.ends_with(']') => is_host(host) && port.parse::<u16>().is_ok(),
            _ => is_host(&self.agent) || is_token(&self.agent),
        };
        (100..=999).contains(&self.code) && agent_ok && is_text(&self.text)
    }
}

impl PartialEq for WarningEntry {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.agent.eq_ignore_ascii_case(&other.agent) && self.text == other.text
    }
}

impl fmt::Display for WarningEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.code, self.agent, quote(&self.text))
    }
}

impl FromStr for WarningEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(WarningEntry::default());
        }
        adapter::parse_warning_entry(s)
    }
}

/// Warning header (RFC 3261 Section 20.43)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Warning(pub Vec<WarningEntry>);

impl Warning {
    pub fn new(entries: Vec<WarningEntry>) -> Self {
        Warning(entries)
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(WarningEntry::is_valid)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0, ", ")
    }
}

impl FromStr for Warning {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        adapter::parse_warning(s).map(Warning)
    }
}

newtype_deref!(Warning => Vec<WarningEntry>);
impl_header!(Warning, HeaderName::Warning);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning() {
        let w: Warning = "307 isi.edu \"Session parameter 'foo' not understood\", 301 isi.edu \"Incompatible network address type 'E.164'\""
            .parse()
            .unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w[0].code, 307);
        assert_eq!(w[0].text, "Session parameter 'foo' not understood");
        assert!(w.is_valid());
        assert_eq!(
            w.to_string(),
            "307 isi.edu \"Session parameter 'foo' not understood\", 301 isi.edu \"Incompatible network address type 'E.164'\""
        );
    }

    #[test]
    fn test_text_is_case_sensitive() {
        let a: WarningEntry = "399 ISI.edu \"Hello\"".parse().unwrap();
        let b: WarningEntry = "399 isi.edu \"Hello\"".parse().unwrap();
        let c: WarningEntry = "399 isi.edu \"hello\"".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_validity() {
        assert!(!WarningEntry::new(99, "isi.edu", "x").is_valid());
        assert!(WarningEntry::new(399, "proxy.example.com:5060", "x").is_valid());
        assert!("".parse::<WarningEntry>().unwrap().is_empty());
    }
}
