// Common test utilities for sip-headers
#![allow(dead_code)]

use std::fmt::{Debug, Display};
use std::str::FromStr;

use rvoip_sip_headers::types::address::NameAddr;
use rvoip_sip_headers::{
    parse_header_line, parse_header_value, Error as HeaderError, Header, RenderOptions, TypedHeader, Uri,
};

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("rvoip_sip_headers=trace")
        .with_test_writer()
        .try_init();
}

// --- Type Construction Helpers ---

/// Parses a string into a Uri, panicking on failure.
pub fn uri(uri_str: &str) -> Uri {
    Uri::parse(uri_str).unwrap_or_else(|e| panic!("Failed to parse test URI '{}': {:?}", uri_str, e))
}

/// Builds a NameAddr from parts.
pub fn addr(display_name: Option<&str>, uri_str: &str, params: &[(&str, &str)]) -> NameAddr {
    NameAddr {
        display_name: display_name.map(String::from),
        uri: Some(uri(uri_str)),
        params: params.iter().copied().collect(),
    }
}

// --- Parser/FromStr Test Helpers ---

/// Asserts that parsing the input string with T::from_str results in the expected value.
pub fn assert_parses_ok<T>(input: &str, expected: T)
where
    T: FromStr<Err = HeaderError> + PartialEq + Debug,
{
    match T::from_str(input) {
        Ok(parsed) => assert_eq!(parsed, expected, "Input: '{}'", input),
        Err(e) => panic!("Expected Ok({:?}), got Err({:?}) for input: '{}'", expected, e, input),
    }
}

/// Asserts that parsing the input string with T::from_str results in an Err.
pub fn assert_parse_fails<T>(input: &str)
where
    T: FromStr<Err = HeaderError> + Debug,
{
    if let Ok(parsed) = T::from_str(input) {
        panic!("Expected Err, got Ok({:?}) for input: '{}'", parsed, input);
    }
}

/// Asserts that item.to_string() can be parsed back into an equivalent item.
pub fn assert_display_parses_back<T>(item: &T)
where
    T: Display + FromStr<Err = HeaderError> + PartialEq + Debug,
{
    let displayed = item.to_string();
    match T::from_str(&displayed) {
        Ok(parsed_back) => assert_eq!(
            item, &parsed_back,
            "\nDisplay->FromStr round trip failed!\n  Original: {:?}\n  Displayed: '{}'\n",
            item, displayed
        ),
        Err(e) => panic!("Failed to parse back displayed string '{}': {:?}", displayed, e),
    }
}

// --- Header Dispatch Helpers ---

/// Parses `value` as header `name`, panicking on failure.
pub fn header(name: &str, value: &str) -> TypedHeader {
    parse_header_value(name, value.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to parse {}: '{}': {:?}", name, value, e))
}

/// parse(render(parse(wire))) == parse(wire), through both the value
/// and the full-line entry points.
pub fn assert_wire_round_trip(name: &str, wire: &str) -> TypedHeader {
    let parsed = header(name, wire);

    let value = parsed.to_string();
    let reparsed = header(name, &value);
    assert_eq!(parsed, reparsed, "value round trip of {}: '{}' rendered as '{}'", name, wire, value);

    for opts in [RenderOptions::default(), RenderOptions::compact()] {
        let line = parsed.to_header_string(&opts);
        let from_line = parse_header_line(&line)
            .unwrap_or_else(|e| panic!("Failed to parse rendered line '{}': {:?}", line, e));
        assert_eq!(parsed, from_line, "line round trip of '{}'", line);
    }
    parsed
}
