//! Adapters from grammar trees to the typed model.
//!
//! Each adapter runs one rule from [`grammar`](super::grammar) over its
//! input and walks the result through [`ParseNode`] lookups only. Parsing
//! is permissive: anything the grammar accepts becomes a value, and
//! protocol constraints are left to the types' `is_valid`.

pub mod address;
pub mod auth;
pub mod misc;
pub mod ranges;
pub mod via;

use crate::error::Result;
use crate::parser::grammar::{self, parse_all};
use crate::parser::node::{Node, ParseNode};
use crate::parser::ParseResult;
use crate::types::values::Values;

/// Parses `;name=value` parameters. The leading `;` is optional and empty
/// input yields an empty map.
pub fn parse_values(s: &str) -> Result<Values> {
    let tree = parse_all(grammar::param_list, s)?;
    Ok(values_from(&tree))
}

/// Collects every `generic-param` below `node`, values kept verbatim.
pub(crate) fn values_from<N: ParseNode>(node: &N) -> Values {
    node.all("generic-param")
        .into_iter()
        .map(|param| {
            (
                param.text_of("pname").unwrap_or_default(),
                param.text_of("pvalue").unwrap_or_default(),
            )
        })
        .collect()
}

/// Empty input is an empty list, anything else must match `rule` and
/// yields one item per `item` node.
pub(crate) fn parse_list<'a, F, T>(
    s: &'a str,
    rule: F,
    item: &str,
    mut build: impl FnMut(&Node<'a>) -> Result<T>,
) -> Result<Vec<T>>
where
    F: FnMut(&'a str) -> ParseResult<'a, Node<'a>>,
{
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    let tree = parse_all(rule, s)?;
    tree.all(item).into_iter().map(|node| build(node)).collect()
}
