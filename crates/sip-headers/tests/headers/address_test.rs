// Tests for address records (From, To, Contact, Route, Record-Route) and
// the Info family

use crate::common::{addr, assert_display_parses_back, assert_parse_fails, assert_parses_ok, uri};
use rvoip_sip_headers::prelude::*;
use rvoip_sip_headers::types::address::From;
use rvoip_sip_headers::types::{CallInfo, InfoAddr};

#[test]
fn test_address_display_parse_roundtrip() {
    let from = From(addr(Some("Alice"), "sip:alice@atlanta.com", &[("tag", "1928301774")]));
    assert_display_parses_back(&from);
    assert_eq!(from.to_string(), "\"Alice\" <sip:alice@atlanta.com>;tag=1928301774");

    let contact = Contact(vec![
        addr(None, "sip:alice@pc33.atlanta.com", &[("expires", "3600"), ("q", "0.7")]),
        addr(Some("Alice mobile"), "tel:+1-212-555-1234", &[]),
    ]);
    assert_display_parses_back(&contact);
    assert_eq!(
        contact.to_string(),
        "<sip:alice@pc33.atlanta.com>;q=0.7;expires=3600, \"Alice mobile\" <tel:+1-212-555-1234>"
    );
}

#[test]
fn test_special_parameter_symmetry() {
    let base = addr(None, "sip:bob@biloxi.com", &[]);
    let tagged = addr(None, "sip:bob@biloxi.com", &[("tag", "a6c85cf")]);
    let foreign = addr(None, "sip:bob@biloxi.com", &[("x-info", "1")]);

    assert_ne!(To(base.clone()), To(tagged.clone()));
    assert_ne!(To(tagged), To(base.clone()));
    assert_eq!(To(base.clone()), To(foreign.clone()));
    assert_eq!(To(foreign), To(base));
}

#[test]
fn test_display_name_ignored_by_equality() {
    assert_parses_ok::<To>(
        "\"Someone Else\" <sip:bob@biloxi.com>;tag=8321234356",
        To(addr(Some("Bob"), "sip:bob@biloxi.com", &[("tag", "8321234356")])),
    );
}

#[test]
fn test_tag_accessors() {
    let mut to: To = "<sip:bob@biloxi.com>".parse().unwrap();
    assert_eq!(to.tag(), None);
    to.set_tag("314159");
    assert_eq!(to.to_string(), "<sip:bob@biloxi.com>;tag=314159");
    assert_eq!(to.with_tag("abc").tag(), Some("abc"));
}

#[test]
fn test_uri_params_versus_header_params() {
    let route: Route = "<sip:p1.example.com;lr>;foo=bar".parse().unwrap();
    let uri = route[0].uri.as_ref().and_then(Uri::as_sip).unwrap();
    assert!(uri.params.has("lr"));
    assert_eq!(route[0].params.last("foo"), Some("bar"));

    let bare: To = "sip:bob@biloxi.com;tag=1".parse().unwrap();
    assert_eq!(bare.tag(), Some("1"));
}

#[test]
fn test_route_order_and_param_order() {
    let a: Route = "<sip:p1.example.com;lr>;a=1;b=2, <sip:p2.example.com;lr>".parse().unwrap();
    let reordered_params: Route = "<sip:p1.example.com;lr>;b=2;a=1, <sip:p2.example.com;lr>".parse().unwrap();
    let reversed: Route = "<sip:p2.example.com;lr>, <sip:p1.example.com;lr>;a=1;b=2".parse().unwrap();

    assert_eq!(a, reordered_params);
    assert_ne!(a, reversed);
    assert_eq!(a.to_string(), "<sip:p1.example.com;lr>;a=1;b=2, <sip:p2.example.com;lr>");
}

#[test]
fn test_contact_wildcard() {
    let star: Contact = "*".parse().unwrap();
    assert!(star.is_wildcard());
    assert_eq!(star.to_string(), "*");
    assert_eq!(star, Contact::wildcard());

    let one: Contact = "<sip:alice@pc33.atlanta.com>".parse().unwrap();
    assert!(!one.is_wildcard());
    assert_ne!(star, one);
}

#[test]
fn test_contact_expires_and_q() {
    let contact: Contact = "<sip:alice@pc33.atlanta.com>;expires=3600;q=0.5".parse().unwrap();
    assert_eq!(contact[0].expires(), Some(3600));
    assert_eq!(contact[0].q(), Some(0.5));

    let other: Contact = "<sip:alice@pc33.atlanta.com>;q=0.5".parse().unwrap();
    assert_ne!(contact, other);
}

#[test]
fn test_empty_lists() {
    let route: Route = "".parse().unwrap();
    assert!(route.is_empty());
    assert_eq!(route.to_header_string(&RenderOptions::default()), "Route: ");

    let record_route: RecordRoute = "  ".parse().unwrap();
    assert!(record_route.is_empty());

    assert_parse_fails::<Contact>("");
    assert_parse_fails::<From>("");
}

#[test]
fn test_malformed_addresses() {
    assert_parse_fails::<To>("<sip:bob@biloxi.com");
    assert_parse_fails::<To>("Bob <>");
    assert_parse_fails::<Route>("<sip:a.example.com>,");
}

#[test]
fn test_name_addr_zero_value() {
    let empty: NameAddr = "".parse().unwrap();
    assert!(empty.is_empty());
    assert!(!empty.is_valid());
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_validation_is_separate_from_parsing() {
    let control = To(addr(Some("bell\u{7}"), "sip:bob@biloxi.com", &[]));
    assert!(!control.is_valid());

    let bad_param = To(addr(None, "sip:bob@biloxi.com", &[("tag", "\"open")]));
    assert!(!bad_param.is_valid());

    assert!(To(addr(None, "sip:bob@biloxi.com", &[])).is_valid());
    assert!(!Route::new(Vec::new()).validate());
}

#[test]
fn test_call_info_purpose_is_special() {
    let a: CallInfo = "<http://www.example.com/alice/photo.jpg>;purpose=icon".parse().unwrap();
    let b: CallInfo = "<http://www.example.com/alice/photo.jpg>;PURPOSE=ICON;x=1".parse().unwrap();
    let c: CallInfo = "<http://www.example.com/alice/photo.jpg>".parse().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a[0].purpose(), Some("icon"));

    let info = InfoAddr::new(uri("http://www.example.com/alice/")).with_param("purpose", "info");
    assert_display_parses_back(&info);
}
