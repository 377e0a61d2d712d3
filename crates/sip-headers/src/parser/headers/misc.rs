// Single-value and token-list headers.
//
// warning-value   =  warn-code SP warn-agent SP warn-text
// callid          =  word [ "@" word ]
// CSeq            =  "CSeq" HCOLON 1*DIGIT LWS Method
// Retry-After     =  "Retry-After" HCOLON delta-seconds [ comment ] *( SEMI retry-param )
// Timestamp       =  "Timestamp" HCOLON 1*(DIGIT) [ "." *(DIGIT) ] [ LWS delay ]

use ordered_float::OrderedFloat;

use super::{parse_list, values_from};
use crate::error::{Error, Result};
use crate::parser::grammar::{self, parse_all};
use crate::parser::node::ParseNode;
use crate::parser::token::unquote;
use crate::types::content_disposition::ContentDisposition;
use crate::types::cseq::CSeq;
use crate::types::method::Method;
use crate::types::mime_version::MimeVersion;
use crate::types::retry_after::RetryAfter;
use crate::types::timestamp::Timestamp;
use crate::types::warning::WarningEntry;

fn number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T> {
    text.parse::<T>()
        .map_err(|_| Error::ParseError(format!("Invalid {}: {}", what, text)))
}

pub fn parse_warning_entry(s: &str) -> Result<WarningEntry> {
    let tree = parse_all(grammar::warning_value, s)?;
    warning_from(&tree)
}

pub fn parse_warning(s: &str) -> Result<Vec<WarningEntry>> {
    parse_list(s, grammar::warning, "warning-value", |w| warning_from(w))
}

fn warning_from<N: ParseNode>(node: &N) -> Result<WarningEntry> {
    Ok(WarningEntry {
        code: number(node.require("warn-code")?.text(), "warn-code")?,
        agent: node.require("warn-agent")?.text().to_string(),
        text: unquote(node.require("warn-text")?.text()),
    })
}

/// Comma separated tokens; empty input is an empty list.
pub fn parse_token_list(s: &str) -> Result<Vec<String>> {
    parse_list(s, grammar::token_list, "token", |t| Ok(t.text().to_string()))
}

pub fn parse_method_list(s: &str) -> Result<Vec<Method>> {
    parse_token_list(s)?.iter().map(|m| m.parse::<Method>()).collect()
}

pub fn parse_call_id(s: &str) -> Result<String> {
    if s.trim().is_empty() {
        return Err(Error::ParseError("empty Call-ID".to_string()));
    }
    let tree = parse_all(grammar::call_id, s)?;
    Ok(tree.require("callid")?.text().to_string())
}

pub fn parse_call_id_list(s: &str) -> Result<Vec<String>> {
    parse_list(s, grammar::call_id_list, "callid", |id| Ok(id.text().to_string()))
}

pub fn parse_delta(s: &str) -> Result<u32> {
    let tree = parse_all(grammar::delta_seconds, s)?;
    number(tree.text(), "delta-seconds")
}

pub fn parse_cseq(s: &str) -> Result<CSeq> {
    let tree = parse_all(grammar::cseq, s)?;
    Ok(CSeq {
        seq: number(tree.require("seq")?.text(), "CSeq number")?,
        method: tree.require("method")?.text().parse()?,
    })
}

pub fn parse_mime_version(s: &str) -> Result<MimeVersion> {
    let tree = parse_all(grammar::mime_version, s)?;
    Ok(MimeVersion {
        major: number(tree.require("major")?.text(), "MIME major version")?,
        minor: number(tree.require("minor")?.text(), "MIME minor version")?,
    })
}

pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    let tree = parse_all(grammar::timestamp, s)?;
    let value = number::<f64>(tree.require("value")?.text(), "timestamp")?;
    let delay = tree
        .text_of("delay")
        .map(|d| number::<f64>(d, "timestamp delay"))
        .transpose()?;
    Ok(Timestamp {
        value: OrderedFloat(value),
        delay: delay.map(OrderedFloat),
    })
}

pub fn parse_retry_after(s: &str) -> Result<RetryAfter> {
    let tree = parse_all(grammar::retry_after, s)?;
    let comment = tree.text_of("comment").map(|c| {
        c.strip_prefix('(')
            .and_then(|c| c.strip_suffix(')'))
            .unwrap_or(c)
            .trim()
            .to_string()
    });
    Ok(RetryAfter {
        delay: number(tree.require("delta-seconds")?.text(), "delta-seconds")?,
        comment,
        params: values_from(&tree),
    })
}

pub fn parse_content_disposition(s: &str) -> Result<ContentDisposition> {
    let tree = parse_all(grammar::content_disposition, s)?;
    Ok(ContentDisposition {
        disposition: tree.require("disp-type")?.text().to_string(),
        params: values_from(&tree),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_entries() {
        let entries = parse_warning("370 devnull \"Choose a bigger pipe\", 399 [2001:db8::1]:5060 \"x\"").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].agent, "devnull");
        assert_eq!(entries[0].text, "Choose a bigger pipe");
        assert_eq!(entries[1].agent, "[2001:db8::1]:5060");
        assert!(parse_warning("").unwrap().is_empty());
        assert!(parse_warning_entry("370 devnull unquoted").is_err());
        assert!(parse_warning_entry("99999 devnull \"x\"").is_err());
    }

    #[test]
    fn test_token_and_method_lists() {
        assert_eq!(parse_token_list("100rel ,timer").unwrap(), vec!["100rel", "timer"]);
        assert!(parse_token_list("").unwrap().is_empty());
        assert!(parse_token_list("a,,b").is_err());

        let methods = parse_method_list("INVITE, ack, FOO").unwrap();
        assert_eq!(methods, vec![Method::Invite, Method::Ack, Method::Extension("FOO".to_string())]);
    }

    #[test]
    fn test_call_ids() {
        assert_eq!(parse_call_id(" f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com ").unwrap(), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com");
        assert!(parse_call_id("").is_err());
        assert!(parse_call_id("a b").is_err());
        assert_eq!(parse_call_id_list("a@b, c").unwrap(), vec!["a@b", "c"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_delta("3600").unwrap(), 3600);
        assert!(parse_delta("99999999999").is_err());
        assert_eq!(parse_cseq("1 REGISTER").unwrap(), CSeq::new(1, Method::Register));
        assert_eq!(parse_mime_version("1.0").unwrap(), MimeVersion::new(1, 0));
        assert_eq!(parse_timestamp("100 .5").unwrap(), Timestamp::new(100.0, Some(0.5)));
    }

    #[test]
    fn test_retry_after_comment() {
        let ra = parse_retry_after("18000 (back (really) soon) ;duration=3600").unwrap();
        assert_eq!(ra.comment.as_deref(), Some("back (really) soon"));
        assert_eq!(ra.duration(), Some(3600));
        assert!(ra.is_valid());
    }

    #[test]
    fn test_content_disposition() {
        let cd = parse_content_disposition("icon;handling=optional;x=\"y\"").unwrap();
        assert_eq!(cd.disposition, "icon");
        assert_eq!(cd.params.len(), 2);
    }
}
