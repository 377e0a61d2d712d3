// parse(render(parse(wire))) == parse(wire) for every built-in header kind

use crate::common::{assert_wire_round_trip, init_tracing};
use rvoip_sip_headers::prelude::*;

const WIRE: &[(&str, &str)] = &[
    ("Accept", "application/sdp;level=1, text/html;q=0.5"),
    ("Accept-Encoding", "gzip;q=1.0, identity; q=0.5"),
    ("Accept-Language", "da, en-gb;q=0.8, en;q=0.7"),
    ("Alert-Info", "<http://www.example.com/sounds/moo.wav>"),
    ("Allow", "INVITE, ACK, OPTIONS, CANCEL, BYE"),
    ("Authentication-Info", "nextnonce=\"47364c23432d2e131a5fb210812c\", qop=auth, rspauth=\"a1b2\", cnonce=\"0a4f113b\", nc=00000001"),
    (
        "Authorization",
        "Digest username=\"bob\", realm=\"biloxi.com\", nonce=\"dcd98b7102dd2f0e8b11d0f600bfb0c093\", \
         uri=\"sip:bob@biloxi.com\", qop=auth, nc=00000001, cnonce=\"0a4f113b\", \
         response=\"6629fae49393a05397450978507c4ef1\", opaque=\"5ccc069c403ebaf9f0171e9517f40e41\"",
    ),
    ("Call-ID", "f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com"),
    ("Call-Info", "<http://wwww.example.com/alice/photo.jpg>;purpose=icon, <http://www.example.com/alice/>;purpose=info"),
    ("Contact", "\"Mr. Watson\" <sip:watson@worcester.bell-telephone.com>;q=0.7;expires=3600, <mailto:watson@bell-telephone.com>;q=0.1"),
    ("Contact", "*"),
    ("Content-Disposition", "session;handling=optional"),
    ("Content-Encoding", "gzip"),
    ("Content-Language", "fr, en-GB"),
    ("Content-Length", "349"),
    ("Content-Type", "multipart/mixed;boundary=\"unique boundary\""),
    ("CSeq", "4711 INVITE"),
    ("Date", "Sat, 13 Nov 2010 23:29:00 GMT"),
    ("Error-Info", "<sip:not-in-service-recording@atlanta.com>"),
    ("Expires", "5"),
    ("From", "\"A. G. Bell\" <sip:agb@bell-telephone.com>;tag=a48s"),
    ("In-Reply-To", "70710@saturn.bell-tel.com, 17320@saturn.bell-tel.com"),
    ("Max-Forwards", "70"),
    ("MIME-Version", "1.0"),
    ("Min-Expires", "60"),
    ("Organization", "Boxes by Bob"),
    ("Priority", "emergency"),
    (
        "Proxy-Authenticate",
        "Digest realm=\"atlanta.com\", domain=\"sip:ss1.carrier.com\", qop=\"auth\", \
         nonce=\"f84f1cec41e6cbe5aea9c8e88d359\", opaque=\"\", stale=FALSE, algorithm=MD5",
    ),
    ("Proxy-Authorization", "Digest username=\"alice\", realm=\"atlanta.com\", nonce=\"c60f3082ee1212b402a21831ae\", response=\"245f23415f11432b3434341c022\""),
    ("Proxy-Require", "foo"),
    ("Record-Route", "<sip:server10.biloxi.com;lr>, <sip:bigbox3.site3.atlanta.com;lr>"),
    ("Reply-To", "Bob <sip:bob@biloxi.com>"),
    ("Require", "100rel"),
    ("Retry-After", "18000;duration=3600"),
    ("Route", "<sip:bigbox3.site3.atlanta.com;lr>"),
    ("Server", "HomeServer v2"),
    ("Subject", "Need more boxes"),
    ("Supported", "100rel, timer"),
    ("Timestamp", "54.3 0.25"),
    ("To", "The Operator <sip:operator@cs.columbia.edu>;tag=287447"),
    ("Unsupported", "foo"),
    ("User-Agent", "Softphone Beta1.5"),
    ("Via", "SIP/2.0/UDP erlang.bell-telephone.com:5060;branch=z9hG4bK87asdks7, SIP/2.0/UDP first.example.com:4000;ttl=16;maddr=224.2.0.1;branch=z9hG4bKa7c6a8dlze.1"),
    ("Warning", "307 isi.edu \"Session parameter 'foo' not understood\""),
    ("WWW-Authenticate", "Bearer realm=\"atlanta.com\", scope=\"abc\", authz_server=\"https://as.example.com/token\""),
];

#[test]
fn test_every_builtin_kind_round_trips() {
    init_tracing();
    for (name, wire) in WIRE {
        let parsed = assert_wire_round_trip(name, wire);
        assert_eq!(parsed.name(), HeaderName::from_canonical(name), "dispatch of {}", name);
        assert!(!matches!(parsed, TypedHeader::Any(_)), "{} fell back to a generic header", name);
    }
}

#[test]
fn test_compact_names_dispatch_like_canonical() {
    for (compact, wire) in [
        ("i", "a84b4c76e66710"),
        ("m", "<sip:bob@192.0.2.4>"),
        ("e", "gzip"),
        ("l", "0"),
        ("c", "application/sdp"),
        ("f", "<sip:alice@atlanta.com>;tag=1"),
        ("s", "lunch"),
        ("k", "100rel"),
        ("t", "<sip:bob@biloxi.com>"),
        ("v", "SIP/2.0/TCP 192.0.2.1"),
    ] {
        let parsed = assert_wire_round_trip(compact, wire);
        assert_eq!(parsed.compact_name(), Some(compact));
    }
}

#[test]
fn test_unknown_names_round_trip_as_generic() {
    let parsed = assert_wire_round_trip("X-Custom-Header", "some;opaque=value, really");
    assert!(matches!(parsed, TypedHeader::Any(_)));
    assert_eq!(parsed.to_header_string(&RenderOptions::default()), "X-Custom-Header: some;opaque=value, really");
}
