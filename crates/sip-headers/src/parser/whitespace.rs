use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{opt, recognize},
    multi::{many0, many1},
    sequence::{pair, tuple},
};

use super::ParseResult;

pub fn wsp(input: &str) -> ParseResult<&str> {
    recognize(alt((tag(" "), tag("\t"))))(input)
}

/// Parses CRLF (accepts \r\n or just \n)
pub fn crlf(input: &str) -> ParseResult<&str> {
    recognize(alt((tag("\r\n"), tag("\n"))))(input)
}

pub fn lws(input: &str) -> ParseResult<&str> {
    // LWS = [*WSP CRLF] 1*WSP
    recognize(pair(opt(tuple((many0(wsp), crlf))), many1(wsp)))(input)
}

pub fn sws(input: &str) -> ParseResult<&str> {
    // SWS = [LWS]
    recognize(opt(lws))(input)
}
