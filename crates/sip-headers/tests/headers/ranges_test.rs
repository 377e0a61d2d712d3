// Tests for Accept, Accept-Encoding, Accept-Language and Content-Type

use crate::common::{assert_display_parses_back, assert_parse_fails};
use rvoip_sip_headers::prelude::*;
use rvoip_sip_headers::types::{EncodingRange, LanguageRange, MimeRange};

#[test]
fn test_accept_renders_q_first() {
    let accept: Accept = "text/plain;q=0.9;a=123, text/csv".parse().unwrap();
    assert_eq!(accept.to_string(), "text/plain;q=0.9;a=123, text/csv");

    let shuffled: Accept = "text/plain;a=123;q=0.9, text/csv".parse().unwrap();
    assert_eq!(shuffled.to_string(), "text/plain;q=0.9;a=123, text/csv");
    assert_eq!(accept, shuffled);
}

#[test]
fn test_accept_by_preference() {
    let accept: Accept = "text/html;q=0.5, application/sdp, */*;q=0.1".parse().unwrap();
    let preferred: Vec<String> = accept.by_preference().iter().map(|r| r.to_string()).collect();
    assert_eq!(preferred, vec!["application/sdp", "text/html;q=0.5", "*/*;q=0.1"]);
    assert!(accept[2].matches("image", "png"));
    assert!(!accept[0].matches("text", "plain"));
}

#[test]
fn test_missing_quality_means_one() {
    let implicit: Accept = "application/sdp".parse().unwrap();
    let explicit: Accept = "application/sdp;q=1".parse().unwrap();
    let lower: Accept = "application/sdp;q=0.8".parse().unwrap();
    assert_eq!(implicit, explicit);
    assert_eq!(explicit, implicit);
    assert_ne!(implicit, lower);
    assert_ne!(lower, implicit);
}

#[test]
fn test_accept_language_equality() {
    let base: AcceptLanguage = "ru;q=0.7;foo=bar".parse().unwrap();
    assert_eq!(base, "ru;q=0.7;foo=BAR".parse::<AcceptLanguage>().unwrap());
    assert_eq!(base, "RU;q=0.7".parse::<AcceptLanguage>().unwrap());
    assert_ne!(base, "ru;q=0.9".parse::<AcceptLanguage>().unwrap());
    assert_ne!(base, "en;q=0.7".parse::<AcceptLanguage>().unwrap());

    let two: AcceptLanguage = "da, en;q=0.7".parse().unwrap();
    let swapped: AcceptLanguage = "en;q=0.7, da".parse().unwrap();
    assert_ne!(two, swapped);
}

#[test]
fn test_accept_encoding() {
    let enc: AcceptEncoding = "gzip;q=1.0, identity; q=0.5, *;q=0".parse().unwrap();
    assert_eq!(enc.len(), 3);
    assert_eq!(enc[1].quality().into_inner(), 0.5);
    assert_eq!(enc.to_string(), "gzip;q=1.0, identity;q=0.5, *;q=0");
    assert!(enc.validate());
    assert_display_parses_back(&enc);

    let bad_q = AcceptEncoding::new(vec![EncodingRange {
        coding: "gzip".into(),
        params: Values::new().with("q", "1.5"),
    }]);
    assert!(!bad_q.validate());
}

#[test]
fn test_empty_accept_family_is_valid() {
    let accept: Accept = "".parse().unwrap();
    assert!(accept.is_empty());
    assert!(accept.validate());
    assert_eq!(accept.to_header_string(&RenderOptions::default()), "Accept: ");

    let lang: AcceptLanguage = " ".parse().unwrap();
    assert!(lang.is_empty());
}

#[test]
fn test_zero_value_ranges() {
    assert!("".parse::<MimeRange>().unwrap().is_empty());
    assert!("".parse::<LanguageRange>().unwrap().is_empty());
    assert!("".parse::<EncodingRange>().unwrap().is_empty());
    assert!(!LanguageRange::default().is_valid());
}

#[test]
fn test_malformed_ranges() {
    assert_parse_fails::<Accept>("text/html,");
    assert_parse_fails::<Accept>("text/html;");
    assert_parse_fails::<AcceptLanguage>("en, , de");
    assert!("en_GB".parse::<AcceptLanguage>().map_or(true, |l| !l.validate()));
}

#[test]
fn test_content_type_params_are_strict() {
    let a: ContentType = "text/plain;charset=UTF-8".parse().unwrap();
    let b: ContentType = "TEXT/Plain;CHARSET=utf-8".parse().unwrap();
    let c: ContentType = "text/plain".parse().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(c, a);
    assert_eq!(a.charset(), Some("UTF-8"));

    assert_parse_fails::<ContentType>("");
    assert_parse_fails::<ContentType>("text");
    assert_eq!(ContentType::new(MimeType::sdp()).to_string(), "application/sdp");
}

#[test]
fn test_quoted_param_values() {
    let ct: ContentType = "multipart/mixed;boundary=\"unique boundary\"".parse().unwrap();
    assert_eq!(ct.params.last("boundary"), Some("\"unique boundary\""));
    assert_display_parses_back(&ct);

    let other: ContentType = "multipart/mixed;boundary=\"Unique Boundary\"".parse().unwrap();
    assert_ne!(ct, other);
}
