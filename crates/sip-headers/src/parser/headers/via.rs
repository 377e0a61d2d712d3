// Via      =  ( "Via" / "v" ) HCOLON via-parm *(COMMA via-parm)
// via-parm =  sent-protocol LWS sent-by *( SEMI via-params )
// sent-by  =  host [ COLON port ]

use super::{parse_list, values_from};
use crate::error::{Error, Result};
use crate::parser::grammar::{self, parse_all};
use crate::parser::node::ParseNode;
use crate::types::uri::Host;
use crate::types::via::{SentProtocol, Transport, ViaHop};

pub fn parse_via_hop(s: &str) -> Result<ViaHop> {
    let tree = parse_all(grammar::via_parm, s)?;
    hop_from(&tree)
}

/// Empty input yields no hops.
pub fn parse_via(s: &str) -> Result<Vec<ViaHop>> {
    parse_list(s, grammar::via, "via-parm", |hop| hop_from(hop))
}

fn hop_from<N: ParseNode>(node: &N) -> Result<ViaHop> {
    let sent_protocol = SentProtocol {
        name: node.require("protocol-name")?.text().to_string(),
        version: node.require("protocol-version")?.text().to_string(),
        transport: node.require("transport")?.text().parse::<Transport>()?,
    };
    let host = node.require("host")?.text().parse::<Host>()?;
    let port = node
        .text_of("port")
        .map(|p| {
            p.parse::<u32>()
                .map_err(|_| Error::ParseError(format!("Invalid Via port: {}", p)))
        })
        .transpose()?;

    Ok(ViaHop {
        sent_protocol,
        sent_by_host: Some(host),
        sent_by_port: port,
        params: values_from(node),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_hop() {
        let hop = parse_via_hop("SIP / 2.0 / tcp client.biloxi.example.com:5060 ;branch=z9hG4bKnashds7;rport").unwrap();
        assert_eq!(hop.sent_protocol.transport, Transport::Tcp);
        assert_eq!(hop.sent_by_host, Some(Host::domain("client.biloxi.example.com")));
        assert_eq!(hop.sent_by_port, Some(5060));
        assert_eq!(hop.branch(), Some("z9hG4bKnashds7"));
        assert_eq!(hop.rport(), Some(None));
    }

    #[test]
    fn test_extension_transport_kept_verbatim() {
        let hop = parse_via_hop("SIP/2.0/QUIC relay.example.net").unwrap();
        assert_eq!(hop.sent_protocol.transport, Transport::Other("QUIC".to_string()));
        assert_eq!(hop.to_string(), "SIP/2.0/QUIC relay.example.net");
    }

    #[test]
    fn test_hop_list() {
        let hops = parse_via("SIP/2.0/UDP a.example.com;branch=z9hG4bK1,SIP/2.0/UDP 192.0.2.4:5061").unwrap();
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[1].sent_by_port, Some(5061));
        assert!(hops[1].params.is_empty());
        assert!(parse_via("").unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_port_is_kept() {
        let hop = parse_via_hop("SIP/2.0/UDP host.example.com:99999;branch=z9hG4bK1").unwrap();
        assert_eq!(hop.sent_by_port, Some(99999));
        assert_eq!(hop.to_string(), "SIP/2.0/UDP host.example.com:99999;branch=z9hG4bK1");
        assert!(!hop.is_valid());
    }

    #[test]
    fn test_malformed() {
        assert!(parse_via_hop("SIP/2.0 pc33.atlanta.com").is_err());
        assert!(parse_via_hop("SIP/2.0/UDP host:99999999999").is_err());
        assert!(parse_via("SIP/2.0/UDP a.example.com,").is_err());
    }
}
