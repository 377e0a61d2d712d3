//! Ordered, multi-valued parameter map.
//!
//! [`Values`] carries the `;name=value` parameters of addresses, Via hops,
//! media ranges and similar records, and the overflow parameters of the
//! authorization families. Entries keep their insertion order and every
//! value is kept verbatim, including surrounding quotes when the wire form
//! was quoted. Names are matched case-insensitively.
//!
//! Rendering is deterministic: a parameter literally named `q` goes first,
//! the remaining entries follow in case-insensitive alphabetical order of
//! their names, with insertion order breaking ties.
//!
//! ```
//! use rvoip_sip_headers::Values;
//!
//! let mut params = Values::new();
//! params.set("transport", "tcp").set("lr", "").set("q", "0.5");
//! assert_eq!(params.to_string(), ";q=0.5;lr;transport=tcp");
//!
//! params.append("lr", "again");
//! assert_eq!(params.last("LR"), Some("again"));
//! assert_eq!(params.get_all("lr"), vec!["", "again"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::token::{is_host, is_token, is_valid_quoted};
use crate::types::equality;

/// Ordered map from parameter name to one or more string values.
///
/// An empty value renders as a bare flag (`;lr`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Values(Vec<(String, String)>);

impl Values {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Values(Vec::new())
    }

    /// Number of stored entries, counting every value of a repeated name.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replaces every value stored under `name` with a single `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.0.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.0.push((name, value.into()));
        self
    }

    /// Adds another value under `name`, keeping existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// Builder-style [`Values::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// The current value of `name`: the most recently stored one.
    pub fn last(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Removes every value of `name`. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        before != self.0.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Distinct names in first-seen order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.0.len());
        for (n, _) in &self.0 {
            if !names.iter().any(|seen| seen.eq_ignore_ascii_case(n)) {
                names.push(n);
            }
        }
        names
    }

    /// Entries in rendering order: `q` first, then by lowercase name.
    pub fn ordered(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        // stable: repeated names keep insertion order
        entries.sort_by(|(a, _), (b, _)| {
            let a_q = a.eq_ignore_ascii_case("q");
            let b_q = b.eq_ignore_ascii_case("q");
            b_q.cmp(&a_q)
                .then_with(|| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()))
        });
        entries
    }

    /// Writes `;name[=value]` for every entry in rendering order.
    ///
    /// With `leading` unset the first entry carries no `;`, which is the
    /// shape of a bare parameter list.
    pub fn write_to(&self, w: &mut dyn fmt::Write, leading: bool) -> fmt::Result {
        for (i, (name, value)) in self.ordered().into_iter().enumerate() {
            if leading || i > 0 {
                w.write_char(';')?;
            }
            w.write_str(name)?;
            if !value.is_empty() {
                w.write_char('=')?;
                w.write_str(value)?;
            }
        }
        Ok(())
    }

    /// Writes `name=value` pairs joined by `sep`, used for comma separated
    /// parameter lists such as authorization overflow parameters.
    pub fn write_list(&self, w: &mut dyn fmt::Write, sep: &str, mut first: bool) -> fmt::Result {
        for (name, value) in self.ordered() {
            if !first {
                w.write_str(sep)?;
            }
            first = false;
            w.write_str(name)?;
            if !value.is_empty() {
                w.write_char('=')?;
                w.write_str(value)?;
            }
        }
        Ok(())
    }

    /// Every name is a token and every value is empty, a token, a host or
    /// a well-formed quoted string.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|(name, value)| {
            is_token(name)
                && (value.is_empty() || is_token(value) || is_host(value) || is_valid_quoted(value))
        })
    }
}

impl PartialEq for Values {
    fn eq(&self, other: &Self) -> bool {
        equality::compare(self, other, &[])
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, true)
    }
}

impl FromStr for Values {
    type Err = Error;

    /// Parses `;a=b;c` (the leading `;` is optional). Empty input yields an
    /// empty map.
    fn from_str(s: &str) -> Result<Self> {
        crate::parser::headers::parse_values(s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Values(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
