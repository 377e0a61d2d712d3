use nom::{
    bytes::complete::tag,
    combinator::recognize,
    multi::many0,
    sequence::{pair, tuple},
};

use super::whitespace::{sws, wsp};
use super::ParseResult;

pub fn hcolon(input: &str) -> ParseResult<&str> {
    // HCOLON = *( SP / HTAB ) ":" SWS
    recognize(tuple((many0(wsp), tag(":"), sws)))(input)
}

pub fn star(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, tag("*"), sws)))(input)
}

pub fn slash(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, tag("/"), sws)))(input)
}

pub fn equal(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, tag("="), sws)))(input)
}

pub fn comma(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, tag(","), sws)))(input)
}

pub fn semi(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, tag(";"), sws)))(input)
}

pub fn colon(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, tag(":"), sws)))(input)
}

pub fn laquot(input: &str) -> ParseResult<&str> {
    // LAQUOT = SWS "<"
    recognize(pair(sws, tag("<")))(input)
}

pub fn raquot(input: &str) -> ParseResult<&str> {
    // RAQUOT = ">" SWS
    recognize(pair(tag(">"), sws))(input)
}
