// Header value grammar (RFC 3261 Section 25.1)
//
// Every rule returns a Node named after its ABNF production. Separators
// and whitespace are matched but never turned into nodes, so a node's
// children are exactly the values an adapter needs to look at.

use std::iter::once;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_while, take_while1},
    combinator::{eof, map, opt, recognize},
    error::{Error as NomError, ErrorKind},
    multi::{many0, separated_list0, separated_list1},
    sequence::{pair, preceded, terminated, tuple},
};

use super::node::Node;
use super::separators::{colon, comma, equal, laquot, raquot, semi, slash};
use super::token::{digits, ipv6_reference, is_token_char, quoted_string, token, token68, word};
use super::whitespace::{lws, sws};
use super::ParseResult;
use crate::error::{Error, Result};

/// Runs `rule` over the whole of `input` (surrounding whitespace ignored).
/// Anything left over is a parse error.
pub fn parse_all<'a, F>(mut rule: F, input: &'a str) -> Result<Node<'a>>
where
    F: FnMut(&'a str) -> ParseResult<'a, Node<'a>>,
{
    let input = input.trim();
    let (rest, tree) = rule(input)?;
    if !rest.is_empty() {
        return Err(Error::ParseError(format!("unexpected input after {}: '{}'", tree.rule, rest)));
    }
    Ok(tree)
}

/// Wraps the children produced by `f` in a node spanning the matched input.
fn node<'a, F>(rule: &'static str, mut f: F) -> impl FnMut(&'a str) -> ParseResult<'a, Node<'a>>
where
    F: FnMut(&'a str) -> ParseResult<'a, Vec<Node<'a>>>,
{
    move |input: &'a str| {
        let (rest, children) = f(input)?;
        let text = &input[..input.len() - rest.len()];
        Ok((rest, Node::new(rule, text, children)))
    }
}

fn leaf<'a, F>(rule: &'static str, f: F) -> impl FnMut(&'a str) -> ParseResult<'a, Node<'a>>
where
    F: FnMut(&'a str) -> ParseResult<'a, &'a str>,
{
    map(f, move |text| Node::leaf(rule, text))
}

fn is_value_char(c: char) -> bool {
    is_token_char(c) || matches!(c, ':' | '/' | '@' | '[' | ']' | '?' | '&')
}

fn is_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// gen-value = token / host / quoted-string
fn gen_value(input: &str) -> ParseResult<&str> {
    alt((quoted_string, ipv6_reference, take_while1(is_value_char)))(input)
}

/// generic-param = token [ EQUAL gen-value ]
pub fn generic_param(input: &str) -> ParseResult<Node> {
    node("generic-param", |i| {
        let (i, name) = leaf("pname", token)(i)?;
        let (i, value) = opt(preceded(equal, leaf("pvalue", gen_value)))(i)?;
        Ok((i, once(name).chain(value).collect()))
    })(input)
}

// *( SEMI generic-param )
fn params(input: &str) -> ParseResult<Vec<Node>> {
    many0(preceded(semi, generic_param))(input)
}

/// A bare parameter list with an optional leading SEMI.
pub fn param_list(input: &str) -> ParseResult<Node> {
    node("params", |i| {
        let (i, _) = opt(semi)(i)?;
        separated_list0(semi, generic_param)(i)
    })(input)
}

/// display-name = *(token LWS) / quoted-string
fn display_name(input: &str) -> ParseResult<Node> {
    leaf(
        "display-name",
        alt((quoted_string, recognize(pair(token, many0(pair(lws, token)))))),
    )(input)
}

// The text between angle brackets, handed to the URI parser as is.
fn bracketed_uri(input: &str) -> ParseResult<Node> {
    let (i, _) = laquot(input)?;
    let (i, uri) = leaf("addr-spec", take_till1(|c: char| c == '>'))(i)?;
    let (i, _) = raquot(i)?;
    Ok((i, uri))
}

/// name-addr = [ display-name ] LAQUOT addr-spec RAQUOT
pub fn name_addr(input: &str) -> ParseResult<Node> {
    node("name-addr", |i| {
        let (i, display) = opt(display_name)(i)?;
        let (i, uri) = bracketed_uri(i)?;
        Ok((i, display.into_iter().chain(once(uri)).collect()))
    })(input)
}

// Unbracketed addr-spec: runs up to the first separator that would end it
// in a header.
fn addr_spec(input: &str) -> ParseResult<Node> {
    leaf(
        "addr-spec",
        take_till1(|c: char| matches!(c, ';' | ',' | '<' | '>' | '"') || c.is_whitespace()),
    )(input)
}

/// ( name-addr / addr-spec ) *( SEMI generic-param )
pub fn address(input: &str) -> ParseResult<Node> {
    node("address", |i| {
        let (i, head) = alt((name_addr, addr_spec))(i)?;
        let (i, params) = params(i)?;
        Ok((i, once(head).chain(params).collect()))
    })(input)
}

/// address *( COMMA address )
pub fn address_list(input: &str) -> ParseResult<Node> {
    node("address-list", separated_list1(comma, address))(input)
}

/// Contact = STAR / ( contact-param *( COMMA contact-param ) )
pub fn contact(input: &str) -> ParseResult<Node> {
    alt((
        node("contact-star", map(tag("*"), |_| Vec::new())),
        node("contact", separated_list1(comma, address)),
    ))(input)
}

/// info = LAQUOT absoluteURI RAQUOT *( SEMI generic-param )
pub fn info(input: &str) -> ParseResult<Node> {
    node("info", |i| {
        let (i, uri) = bracketed_uri(i)?;
        let (i, params) = params(i)?;
        Ok((i, once(uri).chain(params).collect()))
    })(input)
}

pub fn info_list(input: &str) -> ParseResult<Node> {
    node("info-list", separated_list1(comma, info))(input)
}

/// sent-protocol = protocol-name SLASH protocol-version SLASH transport
fn sent_protocol(input: &str) -> ParseResult<Node> {
    node("sent-protocol", |i| {
        let (i, name) = leaf("protocol-name", token)(i)?;
        let (i, _) = slash(i)?;
        let (i, version) = leaf("protocol-version", token)(i)?;
        let (i, _) = slash(i)?;
        let (i, transport) = leaf("transport", token)(i)?;
        Ok((i, vec![name, version, transport]))
    })(input)
}

/// sent-by = host [ COLON port ]
fn sent_by(input: &str) -> ParseResult<Node> {
    node("sent-by", |i| {
        let (i, host) = leaf("host", alt((ipv6_reference, take_while1(is_host_char))))(i)?;
        let (i, port) = opt(preceded(colon, leaf("port", digits)))(i)?;
        Ok((i, once(host).chain(port).collect()))
    })(input)
}

/// via-parm = sent-protocol LWS sent-by *( SEMI via-params )
pub fn via_parm(input: &str) -> ParseResult<Node> {
    node("via-parm", |i| {
        let (i, protocol) = sent_protocol(i)?;
        let (i, _) = lws(i)?;
        let (i, by) = sent_by(i)?;
        let (i, params) = params(i)?;
        Ok((i, [protocol, by].into_iter().chain(params).collect()))
    })(input)
}

/// Via = via-parm *( COMMA via-parm )
pub fn via(input: &str) -> ParseResult<Node> {
    node("via", separated_list1(comma, via_parm))(input)
}

/// media-range = ( m-type SLASH m-subtype ) *( SEMI m-parameter )
///
/// The subtype is optional here; a range without one parses and fails
/// validation instead.
pub fn media_range(input: &str) -> ParseResult<Node> {
    node("media-range", |i| {
        let (i, ty) = leaf("m-type", token)(i)?;
        let (i, sub) = opt(preceded(slash, leaf("m-subtype", token)))(i)?;
        let (i, params) = params(i)?;
        Ok((i, once(ty).chain(sub).chain(params).collect()))
    })(input)
}

pub fn accept(input: &str) -> ParseResult<Node> {
    node("accept", separated_list1(comma, media_range))(input)
}

/// encoding = codings *( SEMI accept-param )
pub fn encoding(input: &str) -> ParseResult<Node> {
    node("encoding", |i| {
        let (i, coding) = leaf("codings", token)(i)?;
        let (i, params) = params(i)?;
        Ok((i, once(coding).chain(params).collect()))
    })(input)
}

pub fn accept_encoding(input: &str) -> ParseResult<Node> {
    node("accept-encoding", separated_list1(comma, encoding))(input)
}

/// language = language-range *( SEMI accept-param )
pub fn language(input: &str) -> ParseResult<Node> {
    node("language", |i| {
        let (i, range) = leaf("language-range", token)(i)?;
        let (i, params) = params(i)?;
        Ok((i, once(range).chain(params).collect()))
    })(input)
}

pub fn accept_language(input: &str) -> ParseResult<Node> {
    node("accept-language", separated_list1(comma, language))(input)
}

/// auth-param = auth-param-name EQUAL ( token / quoted-string )
fn auth_param(input: &str) -> ParseResult<Node> {
    node("auth-param", |i| {
        let (i, name) = leaf("auth-param-name", token)(i)?;
        let (i, _) = equal(i)?;
        let (i, value) = leaf("auth-param-value", alt((quoted_string, take_while1(is_value_char))))(i)?;
        Ok((i, vec![name, value]))
    })(input)
}

/// credentials / challenge = auth-scheme [ LWS ( token68 / auth-param *( COMMA auth-param ) ) ]
///
/// A token68 is only recognised when it is the whole remainder.
pub fn auth(input: &str) -> ParseResult<Node> {
    node("auth", |i| {
        let (i, scheme) = leaf("auth-scheme", token)(i)?;
        let (i, rest) = opt(preceded(
            lws,
            alt((
                map(terminated(leaf("token68", token68), eof), |t| vec![t]),
                separated_list1(comma, auth_param),
            )),
        ))(i)?;
        Ok((i, once(scheme).chain(rest.into_iter().flatten()).collect()))
    })(input)
}

/// Authentication-Info = ainfo *( COMMA ainfo )
pub fn authentication_info(input: &str) -> ParseResult<Node> {
    node("authentication-info", separated_list1(comma, auth_param))(input)
}

/// warning-value = warn-code SP warn-agent SP warn-text
pub fn warning_value(input: &str) -> ParseResult<Node> {
    node("warning-value", |i| {
        let (i, code) = leaf("warn-code", digits)(i)?;
        let (i, _) = lws(i)?;
        let (i, agent) = leaf("warn-agent", take_while1(|c: char| !c.is_whitespace() && c != ',' && c != '"'))(i)?;
        let (i, _) = lws(i)?;
        let (i, text) = leaf("warn-text", quoted_string)(i)?;
        Ok((i, vec![code, agent, text]))
    })(input)
}

pub fn warning(input: &str) -> ParseResult<Node> {
    node("warning", separated_list1(comma, warning_value))(input)
}

/// token *( COMMA token )
pub fn token_list(input: &str) -> ParseResult<Node> {
    node("token-list", separated_list1(comma, leaf("token", token)))(input)
}

/// callid = word [ "@" word ]
fn callid(input: &str) -> ParseResult<Node> {
    leaf("callid", recognize(pair(word, opt(pair(tag("@"), word)))))(input)
}

pub fn call_id(input: &str) -> ParseResult<Node> {
    node("call-id", map(callid, |id| vec![id]))(input)
}

pub fn call_id_list(input: &str) -> ParseResult<Node> {
    node("call-id-list", separated_list1(comma, callid))(input)
}

/// delta-seconds = 1*DIGIT
pub fn delta_seconds(input: &str) -> ParseResult<Node> {
    leaf("delta-seconds", digits)(input)
}

/// CSeq = 1*DIGIT LWS Method
pub fn cseq(input: &str) -> ParseResult<Node> {
    node("cseq", |i| {
        let (i, seq) = leaf("seq", digits)(i)?;
        let (i, _) = lws(i)?;
        let (i, method) = leaf("method", token)(i)?;
        Ok((i, vec![seq, method]))
    })(input)
}

/// MIME-Version = 1*DIGIT "." 1*DIGIT
pub fn mime_version(input: &str) -> ParseResult<Node> {
    node("mime-version", |i| {
        let (i, major) = leaf("major", digits)(i)?;
        let (i, _) = tag(".")(i)?;
        let (i, minor) = leaf("minor", digits)(i)?;
        Ok((i, vec![major, minor]))
    })(input)
}

// delay = *(DIGIT) [ "." *(DIGIT) ]
fn delay_value(input: &str) -> ParseResult<&str> {
    alt((
        recognize(tuple((take_while(is_digit), tag("."), take_while(is_digit)))),
        digits,
    ))(input)
}

/// Timestamp = 1*(DIGIT) [ "." *(DIGIT) ] [ LWS delay ]
pub fn timestamp(input: &str) -> ParseResult<Node> {
    node("timestamp", |i| {
        let (i, value) = leaf("value", recognize(pair(digits, opt(pair(tag("."), take_while(is_digit))))))(i)?;
        let (i, delay) = opt(preceded(lws, leaf("delay", delay_value)))(i)?;
        Ok((i, once(value).chain(delay).collect()))
    })(input)
}

/// comment = LPAREN *( ctext / quoted-pair / comment ) RPAREN
///
/// Returns the text including the outer parentheses.
fn comment(input: &str) -> ParseResult<&str> {
    let fail = || nom::Err::Error(NomError::new(input, ErrorKind::Char));
    if !input.starts_with('(') {
        return Err(fail());
    }
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], &input[..=i]));
                }
            }
            '\r' | '\n' => return Err(fail()),
            _ => {}
        }
    }
    Err(fail())
}

/// Retry-After = delta-seconds [ comment ] *( SEMI retry-param )
pub fn retry_after(input: &str) -> ParseResult<Node> {
    node("retry-after", |i| {
        let (i, delta) = leaf("delta-seconds", digits)(i)?;
        let (i, remark) = opt(preceded(sws, leaf("comment", comment)))(i)?;
        let (i, params) = params(i)?;
        Ok((i, once(delta).chain(remark).chain(params).collect()))
    })(input)
}

/// Content-Disposition = disp-type *( SEMI disp-param )
pub fn content_disposition(input: &str) -> ParseResult<Node> {
    node("content-disposition", |i| {
        let (i, disposition) = leaf("disp-type", token)(i)?;
        let (i, params) = params(i)?;
        Ok((i, once(disposition).chain(params).collect()))
    })(input)
}
