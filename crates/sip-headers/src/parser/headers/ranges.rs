// Accept-family ranges and media types.
//
// Accept          =  "Accept" HCOLON [ accept-range *(COMMA accept-range) ]
// Accept-Encoding =  "Accept-Encoding" HCOLON [ encoding *(COMMA encoding) ]
// Accept-Language =  "Accept-Language" HCOLON [ language *(COMMA language) ]
// Content-Type    =  ( "Content-Type" / "c" ) HCOLON media-type

use super::{parse_list, values_from};
use crate::error::{Error, Result};
use crate::parser::grammar::{self, parse_all};
use crate::parser::node::ParseNode;
use crate::types::accept::MimeRange;
use crate::types::accept_encoding::EncodingRange;
use crate::types::accept_language::LanguageRange;
use crate::types::media_type::MimeType;

pub fn parse_mime_range(s: &str) -> Result<MimeRange> {
    let tree = parse_all(grammar::media_range, s)?;
    mime_range_from(&tree)
}

pub fn parse_accept(s: &str) -> Result<Vec<MimeRange>> {
    parse_list(s, grammar::accept, "media-range", |range| mime_range_from(range))
}

pub fn parse_encoding_range(s: &str) -> Result<EncodingRange> {
    let tree = parse_all(grammar::encoding, s)?;
    encoding_from(&tree)
}

pub fn parse_accept_encoding(s: &str) -> Result<Vec<EncodingRange>> {
    parse_list(s, grammar::accept_encoding, "encoding", |enc| encoding_from(enc))
}

pub fn parse_language_range(s: &str) -> Result<LanguageRange> {
    let tree = parse_all(grammar::language, s)?;
    language_from(&tree)
}

pub fn parse_accept_language(s: &str) -> Result<Vec<LanguageRange>> {
    parse_list(s, grammar::accept_language, "language", |lang| language_from(lang))
}

/// `type/subtype *(;param)`. Unlike a range, both halves are required.
pub fn parse_mime_type(s: &str) -> Result<MimeType> {
    if s.trim().is_empty() {
        return Err(Error::ParseError("empty media type".to_string()));
    }
    let tree = parse_all(grammar::media_range, s)?;
    Ok(MimeType {
        mime_type: tree.require("m-type")?.text().to_string(),
        subtype: tree.require("m-subtype")?.text().to_string(),
        params: values_from(&tree),
    })
}

fn mime_range_from<N: ParseNode>(node: &N) -> Result<MimeRange> {
    Ok(MimeRange {
        mime_type: node.require("m-type")?.text().to_string(),
        subtype: node.text_of("m-subtype").unwrap_or_default().to_string(),
        params: values_from(node),
    })
}

fn encoding_from<N: ParseNode>(node: &N) -> Result<EncodingRange> {
    Ok(EncodingRange {
        coding: node.require("codings")?.text().to_string(),
        params: values_from(node),
    })
}

fn language_from<N: ParseNode>(node: &N) -> Result<LanguageRange> {
    Ok(LanguageRange {
        language: node.require("language-range")?.text().to_string(),
        params: values_from(node),
    })
}
