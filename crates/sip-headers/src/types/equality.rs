//! Parameter equivalence under RFC 3261 rules.
//!
//! Two parameter maps are compared name by name:
//!
//! 1. A name present on both sides must carry equal current values.
//! 2. A *special* name must be present on both sides or on neither.
//! 3. Any other name present on only one side is ignored.
//!
//! Values compare case-insensitively, except that quoted strings compare by
//! their unquoted payload, case-sensitively. Each header kind passes its own
//! set of special names; the sets used across the crate live here.

use crate::parser::token::{is_quoted, unquote};
use crate::types::values::Values;

/// `tag` and `expires` on From, To, Contact and friends.
pub const ADDRESS_SPECIAL: &[&str] = &["tag", "expires"];
/// Via hop parameters that identify a transaction path.
pub const VIA_SPECIAL: &[&str] = &["branch", "received", "rport", "ttl", "maddr"];
/// Quality value of Accept style ranges.
pub const RANGE_SPECIAL: &[&str] = &["q"];
pub const DISPOSITION_SPECIAL: &[&str] = &["handling"];
pub const INFO_SPECIAL: &[&str] = &["purpose"];
pub const RETRY_AFTER_SPECIAL: &[&str] = &["duration"];
/// SIP URI parameters that must appear in both URIs when present in one.
pub const SIP_URI_SPECIAL: &[&str] = &["user", "ttl", "method", "maddr", "transport"];

/// Compares two single values.
pub fn values_equal(a: &str, b: &str) -> bool {
    if is_quoted(a) || is_quoted(b) {
        unquote(a) == unquote(b)
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

fn is_special(name: &str, special: &[&str]) -> bool {
    special.iter().any(|s| s.eq_ignore_ascii_case(name))
}

/// Compares `a` and `b` with the given special names.
///
/// Symmetric: `compare(a, b, s) == compare(b, a, s)`.
pub fn compare(a: &Values, b: &Values, special: &[&str]) -> bool {
    for name in a.names() {
        match (a.last(name), b.last(name)) {
            (Some(x), Some(y)) => {
                if !values_equal(x, y) {
                    return false;
                }
            }
            _ => {
                if is_special(name, special) {
                    return false;
                }
            }
        }
    }
    b.names()
        .into_iter()
        .filter(|name| !a.has(name))
        .all(|name| !is_special(name, special))
}

/// Every name is special: both maps must carry the same names with equal
/// values.
pub fn compare_strict(a: &Values, b: &Values) -> bool {
    let a_names = a.names();
    let b_names = b.names();
    a_names.len() == b_names.len()
        && a_names
            .iter()
            .all(|name| matches!((a.last(name), b.last(name)), (Some(x), Some(y)) if values_equal(x, y)))
}

/// Like [`compare`], but `name` counts as `default` when it is absent.
///
/// Used for quality values, where a missing `q` means `q=1`.
pub fn compare_with_default(a: &Values, b: &Values, special: &[&str], name: &str, default: &str) -> bool {
    if a.has(name) == b.has(name) {
        return compare(a, b, special);
    }
    let fill = |v: &Values| {
        let mut v = v.clone();
        if !v.has(name) {
            v.set(name, default);
        }
        v
    };
    compare(&fill(a), &fill(b), special)
}

/// Compares quality-bearing parameters: `q` defaults to `1` and is special.
pub fn compare_quality(a: &Values, b: &Values) -> bool {
    compare_with_default(a, b, RANGE_SPECIAL, "q", "1")
}
