// Tests for token lists, numeric and single-value headers

use crate::common::{assert_display_parses_back, assert_parse_fails, assert_parses_ok, header};
use rvoip_sip_headers::prelude::*;
use rvoip_sip_headers::types::WarningEntry;

#[test]
fn test_token_lists_are_ordered() {
    let a: Supported = "100rel, timer, path".parse().unwrap();
    let b: Supported = "100REL,TIMER , Path".parse().unwrap();
    let c: Supported = "timer, 100rel, path".parse().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.contains("TIMER"));
    assert_eq!(b.to_string(), "100REL, TIMER, Path");
}

#[test]
fn test_minimum_entries_are_a_validation_concern() {
    let empty_require: Require = "".parse().unwrap();
    assert!(empty_require.is_empty());
    assert!(!empty_require.validate());

    let empty_supported: Supported = "".parse().unwrap();
    assert!(empty_supported.validate());
    assert_eq!(empty_supported.to_header_string(&RenderOptions::compact()), "k: ");

    let mut proxy_require = ProxyRequire::default();
    assert!(!proxy_require.validate());
    proxy_require.push("sec-agree");
    assert!(proxy_require.validate());
}

#[test]
fn test_allow_methods() {
    let allow: Allow = "INVITE, ack,OPTIONS, FOO".parse().unwrap();
    assert!(allow.allows(&Method::Ack));
    assert!(allow.allows(&Method::Extension("foo".into())));
    assert!(!allow.allows(&Method::Bye));
    assert_eq!(allow.to_string(), "INVITE, ACK, OPTIONS, FOO");
    assert_display_parses_back(&allow);
    assert_parse_fails::<Allow>("INVITE,");
}

#[test]
fn test_content_language_and_encoding() {
    let lang: ContentLanguage = "fr, en-GB".parse().unwrap();
    assert!(lang.validate());
    assert_eq!(lang, "FR, en-gb".parse::<ContentLanguage>().unwrap());
    assert!(!ContentLanguage::new(["*"]).validate());

    let enc: ContentEncoding = "gzip".parse().unwrap();
    assert_eq!(header("e", "gzip"), TypedHeader::ContentEncoding(enc));
}

#[test]
fn test_call_ids() {
    assert_parses_ok::<CallId>(" f81d4fae-7dec@foo.bar.com ", CallId::new("f81d4fae-7dec@foo.bar.com"));
    assert_ne!(CallId::new("abc@host"), CallId::new("ABC@host"));
    assert_parse_fails::<CallId>("");
    assert_parse_fails::<CallId>("two words");

    let random = CallId::random(Some("pc33.atlanta.com"));
    assert!(random.is_valid());
    assert!(random.value().ends_with("@pc33.atlanta.com"));
    assert_ne!(CallId::random(None), CallId::random(None));

    let replies: InReplyTo = "70710@saturn.bell-tel.com, 17320@saturn.bell-tel.com".parse().unwrap();
    assert_eq!(replies.len(), 2);
    assert!(replies.validate());
    assert_ne!(replies, "70710@SATURN.bell-tel.com, 17320@saturn.bell-tel.com".parse::<InReplyTo>().unwrap());
}

#[test]
fn test_cseq_and_numbers() {
    assert_parses_ok::<CSeq>("4711   invite", CSeq::new(4711, Method::Invite));
    assert_parse_fails::<CSeq>("INVITE 4711");
    assert_parse_fails::<CSeq>("99999999999 INVITE");

    assert_parses_ok::<MaxForwards>("70", MaxForwards::new(70));
    assert_eq!(MaxForwards::new(1).decrement(), Some(MaxForwards::new(0)));
    assert!(!MaxForwards::new(300).validate());

    assert_parse_fails::<ContentLength>("-1");
    assert_parse_fails::<Expires>("3600s");
    assert_eq!(header("Min-Expires", "60"), TypedHeader::MinExpires(MinExpires::new(60)));
}

#[test]
fn test_warning() {
    let warning: Warning = "307 isi.edu \"Session parameter 'foo' not understood\", 301 [2001:db8::1]:5060 \"x\""
        .parse()
        .unwrap();
    assert_eq!(warning.len(), 2);
    assert_eq!(warning[0], WarningEntry::new(307, "ISI.edu", "Session parameter 'foo' not understood"));
    assert_ne!(warning[0], WarningEntry::new(307, "isi.edu", "session parameter 'foo' not understood"));
    assert!(warning.validate());
    assert_display_parses_back(&warning);

    assert!(!Warning::new(vec![WarningEntry::new(42, "isi.edu", "x")]).validate());
    assert_parse_fails::<Warning>("307 isi.edu");
}

#[test]
fn test_retry_after() {
    let ra: RetryAfter = "18000 (Back at five) ;duration=3600".parse().unwrap();
    assert_eq!(ra.delay, 18000);
    assert_eq!(ra.comment.as_deref(), Some("Back at five"));
    assert_eq!(ra.to_string(), "18000 (Back at five);duration=3600");
    assert_eq!(ra, RetryAfter::new(18000).with_duration(3600));
    assert_ne!(ra, RetryAfter::new(18000));
    assert_parse_fails::<RetryAfter>("(soon)");
}

#[test]
fn test_content_disposition() {
    let cd: ContentDisposition = "SESSION;handling=optional".parse().unwrap();
    assert_eq!(cd, ContentDisposition::new("session").with_param("handling", "OPTIONAL"));
    assert_ne!(cd, ContentDisposition::new("session"));
    assert_eq!(ContentDisposition::new("render").handling(), "required");
}

#[test]
fn test_misc_single_values() {
    assert_parses_ok::<Timestamp>("54.3 0.25", Timestamp::new(54.3, Some(0.25)));
    assert_parses_ok::<MimeVersion>("1.0", MimeVersion::new(1, 0));
    assert_parses_ok::<Priority>("URGENT", Priority::Urgent);
    assert_eq!("x-custom".parse::<Priority>().unwrap(), Priority::Other("X-Custom".into()));
    assert!(Priority::Emergency.rank() < Priority::NonUrgent.rank());

    let date: Date = "Sat, 13 Nov 2010 23:29:00 GMT".parse().unwrap();
    assert_eq!(date.timestamp(), 1289690940);
    assert_parse_fails::<Date>("yesterday");
}

#[test]
fn test_text_headers_unfold() {
    let subject = header("Subject", "Need more\r\n   boxes");
    assert_eq!(subject, TypedHeader::Subject(Subject::new("Need more boxes")));

    let ua: UserAgent = "  Softphone Beta1.5  ".parse().unwrap();
    assert_eq!(ua.as_str(), "Softphone Beta1.5");
    assert!(ua.validate());
    assert!(!Organization::new("bad\u{0}text").validate());
    assert_ne!(Server::new("HomeServer"), Server::new("homeserver"));
}
