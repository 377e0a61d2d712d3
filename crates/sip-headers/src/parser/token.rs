//! Character classes and lexical productions shared by all header grammars.

use std::net::{Ipv4Addr, Ipv6Addr};

use nom::{
    bytes::complete::{tag, take_till1, take_while1},
    combinator::{opt, recognize},
    error::{Error as NomError, ErrorKind},
    sequence::{delimited, pair},
};

use super::ParseResult;

/// token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '!' | '%' | '*' | '_' | '+' | '`' | '\'' | '~')
}

/// word adds the separators allowed inside Call-IDs
pub fn is_word_char(c: char) -> bool {
    is_token_char(c)
        || matches!(c, '(' | ')' | '<' | '>' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '{' | '}')
}

fn is_token68_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '+' | '/')
}

pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

pub fn is_token68(s: &str) -> bool {
    let body = s.trim_end_matches('=');
    !body.is_empty() && body.chars().all(is_token68_char)
}

pub fn token(input: &str) -> ParseResult<&str> {
    take_while1(is_token_char)(input)
}

pub fn word(input: &str) -> ParseResult<&str> {
    take_while1(is_word_char)(input)
}

pub fn token68(input: &str) -> ParseResult<&str> {
    recognize(pair(take_while1(is_token68_char), opt(take_while1(|c| c == '='))))(input)
}

pub fn digits(input: &str) -> ParseResult<&str> {
    take_while1(|c: char| c.is_ascii_digit())(input)
}

/// IPv6reference = "[" IPv6address "]"
pub fn ipv6_reference(input: &str) -> ParseResult<&str> {
    recognize(delimited(tag("["), take_till1(|c| c == ']'), tag("]")))(input)
}

/// quoted-string = DQUOTE *(qdtext / quoted-pair) DQUOTE
///
/// Returns the full text including the surrounding quotes.
pub fn quoted_string(input: &str) -> ParseResult<&str> {
    let fail = || nom::Err::Error(NomError::new(input, ErrorKind::Char));
    let mut chars = input.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return Err(fail());
    }
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            if c == '\r' || c == '\n' {
                return Err(fail());
            }
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return Ok((&input[i + 1..], &input[..=i])),
            '\r' | '\n' => return Err(fail()),
            c if c.is_control() && c != '\t' => return Err(fail()),
            _ => {}
        }
    }
    Err(fail())
}

pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

/// True when `s` is exactly one well-formed quoted string.
pub fn is_valid_quoted(s: &str) -> bool {
    matches!(quoted_string(s), Ok(("", _)))
}

/// Strips surrounding quotes and resolves quoted-pairs. Unquoted input is
/// returned unchanged.
pub fn unquote(s: &str) -> String {
    if !is_quoted(s) {
        return s.to_string();
    }
    let inner = &s[1..s.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Wraps `s` in quotes, escaping `"` and `\`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// hostname / IPv4address / IPv6reference
pub fn is_host(s: &str) -> bool {
    if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return inner.parse::<Ipv6Addr>().is_ok();
    }
    if s.parse::<Ipv4Addr>().is_ok() {
        return true;
    }
    let trimmed = s.strip_suffix('.').unwrap_or(s);
    !trimmed.is_empty()
        && trimmed.split('.').all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        })
}

/// Text that may appear in a header value without quoting: no control
/// characters other than tab.
pub fn is_text(s: &str) -> bool {
    s.chars().all(|c| !c.is_control() || c == '\t')
}
