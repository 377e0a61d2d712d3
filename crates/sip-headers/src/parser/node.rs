//! Parse tree produced by [`grammar`](super::grammar).
//!
//! Adapters only ever see the tree through [`ParseNode`]: named lookups
//! and the raw text a node matched. They never look at the input again.

use crate::error::{Error, Result};

/// Read-only view of a grammar match.
pub trait ParseNode: Sized {
    /// Name of the grammar rule that produced this node.
    fn rule(&self) -> &str;

    /// The input text the rule matched.
    fn text(&self) -> &str;

    fn children(&self) -> &[Self];

    /// First descendant produced by `rule`, depth first.
    fn first(&self, rule: &str) -> Option<&Self> {
        for child in self.children() {
            if child.rule() == rule {
                return Some(child);
            }
            if let Some(found) = child.first(rule) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant produced by `rule`, in input order. Matches are
    /// not searched for nested matches of the same rule.
    fn all(&self, rule: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        collect(self, rule, &mut found);
        found
    }

    /// Like [`ParseNode::first`], but a missing node is a parse error.
    fn require(&self, rule: &str) -> Result<&Self> {
        self.first(rule).ok_or_else(|| {
            Error::ParseError(format!("missing {} in {} '{}'", rule, self.rule(), self.text()))
        })
    }

    /// Text of the first `rule` descendant.
    fn text_of(&self, rule: &str) -> Option<&str> {
        self.first(rule).map(|n| n.text())
    }
}

fn collect<'n, N: ParseNode>(node: &'n N, rule: &str, found: &mut Vec<&'n N>) {
    for child in node.children() {
        if child.rule() == rule {
            found.push(child);
        } else {
            collect(child, rule, found);
        }
    }
}

/// Tree node borrowing the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'a> {
    pub rule: &'static str,
    pub text: &'a str,
    pub children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    pub fn new(rule: &'static str, text: &'a str, children: Vec<Node<'a>>) -> Self {
        Node { rule, text, children }
    }

    pub fn leaf(rule: &'static str, text: &'a str) -> Self {
        Node { rule, text, children: Vec::new() }
    }
}

impl ParseNode for Node<'_> {
    fn rule(&self) -> &str {
        self.rule
    }

    fn text(&self) -> &str {
        self.text
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
