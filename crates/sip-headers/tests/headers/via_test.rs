// Tests for Via header hops and lists

use crate::common::{assert_display_parses_back, assert_parse_fails, init_tracing};
use rvoip_sip_headers::prelude::*;

fn hop(s: &str) -> ViaHop {
    s.parse().unwrap_or_else(|e| panic!("bad hop '{}': {:?}", s, e))
}

#[test]
fn test_build_and_render_hop() {
    let mut via_hop = ViaHop::new(Transport::Tls, Host::domain("proxy.example.com"), Some(5061));
    via_hop.set_branch("z9hG4bK-524287-1");
    via_hop.set_received("192.0.2.10");
    via_hop.set_rport(Some(40123));
    assert_eq!(
        via_hop.to_string(),
        "SIP/2.0/TLS proxy.example.com:5061;branch=z9hG4bK-524287-1;received=192.0.2.10;rport=40123"
    );
    assert!(via_hop.is_valid());
    assert!(via_hop.has_rfc3261_branch());
    assert_display_parses_back(&Via::new(vec![via_hop]));
}

#[test]
fn test_generated_branches_are_unique() {
    let a = ViaHop::new(Transport::Udp, Host::domain("a.example.com"), None).with_new_branch();
    let b = ViaHop::new(Transport::Udp, Host::domain("a.example.com"), None).with_new_branch();
    assert!(a.has_rfc3261_branch());
    assert_ne!(a.branch(), b.branch());
    assert_ne!(a, b);
}

#[test]
fn test_case_insensitive_protocol_and_host() {
    init_tracing();
    assert_eq!(
        hop("sip/2.0/udp PC33.Atlanta.COM;branch=z9hG4bK776asdhds"),
        hop("SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds")
    );
    assert_ne!(
        hop("SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds"),
        hop("SIP/2.0/TCP pc33.atlanta.com;branch=z9hG4bK776asdhds")
    );
    assert_ne!(
        hop("SIP/2.0/UDP pc33.atlanta.com:5060;branch=z9hG4bK776asdhds"),
        hop("SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds")
    );
}

#[test]
fn test_transaction_params_are_special() {
    let plain = hop("SIP/2.0/UDP host.example.com;branch=z9hG4bK1");
    for extra in ["received=192.0.2.1", "rport", "ttl=16", "maddr=224.2.0.1"] {
        let with = hop(&format!("SIP/2.0/UDP host.example.com;branch=z9hG4bK1;{}", extra));
        assert_ne!(plain, with, "{} must be on both sides", extra);
        assert_ne!(with, plain, "{} must be on both sides", extra);
    }
    let foreign = hop("SIP/2.0/UDP host.example.com;branch=z9hG4bK1;x-note=hi");
    assert_eq!(plain, foreign);
    assert_eq!(foreign, plain);
}

#[test]
fn test_hop_order_matters() {
    let forward: Via = "SIP/2.0/UDP a.example.com;branch=z9hG4bK1, SIP/2.0/UDP b.example.com;branch=z9hG4bK2"
        .parse()
        .unwrap();
    let reversed: Via = "SIP/2.0/UDP b.example.com;branch=z9hG4bK2, SIP/2.0/UDP a.example.com;branch=z9hG4bK1"
        .parse()
        .unwrap();
    assert_ne!(forward, reversed);
    assert_eq!(forward.branch(), Some("z9hG4bK1"));
    assert_eq!(forward.top().and_then(|h| h.sent_by_host.clone()), Some(Host::domain("a.example.com")));
}

#[test]
fn test_ipv6_and_extension_transport() {
    let via: Via = "SIP/2.0/WSS [2001:db8::9]:443;branch=z9hG4bKws, SIP/3.0/QUIC relay.example.com".parse().unwrap();
    assert_eq!(via.len(), 2);
    assert_eq!(via[0].sent_protocol.transport, Transport::Wss);
    assert_eq!(via[0].sent_by_port, Some(443));
    assert_eq!(via[1].sent_protocol.transport, Transport::Other("QUIC".into()));
    assert_eq!(via[1].sent_protocol.version, "3.0");
    assert_eq!(
        via.to_string(),
        "SIP/2.0/WSS [2001:db8::9]:443;branch=z9hG4bKws, SIP/3.0/QUIC relay.example.com"
    );
}

#[test]
fn test_empty_and_malformed() {
    let empty: Via = "".parse().unwrap();
    assert!(empty.is_empty());
    assert!(!empty.validate());

    let zero: ViaHop = "".parse().unwrap();
    assert!(zero.is_empty());
    assert!(!zero.is_valid());

    assert_parse_fails::<Via>("SIP/2.0 host.example.com");
    assert_parse_fails::<Via>("SIP/2.0/UDP");
    assert_parse_fails::<Via>("SIP/2.0/UDP a.example.com,");
}

#[test]
fn test_out_of_range_port_reported_by_validate() {
    let via: Via = "SIP/2.0/UDP host.example.com:70000;branch=z9hG4bK1".parse().unwrap();
    assert_eq!(via[0].sent_by_port, Some(70000));
    assert_eq!(via.to_string(), "SIP/2.0/UDP host.example.com:70000;branch=z9hG4bK1");
    assert!(!via.validate());
    assert_display_parses_back(&via);

    let via: Via = "SIP/2.0/UDP host.example.com:65535;branch=z9hG4bK1".parse().unwrap();
    assert!(via.validate());
}

#[test]
fn test_invalid_ttl_reported_by_validate() {
    let via: Via = "SIP/2.0/UDP a.example.com;branch=z9hG4bK1;ttl=999".parse().unwrap();
    assert!(!via.validate());
    let via: Via = "SIP/2.0/UDP a.example.com;branch=z9hG4bK1;ttl=16".parse().unwrap();
    assert!(via.validate());
    assert_eq!(via[0].ttl(), Some(16));
}
