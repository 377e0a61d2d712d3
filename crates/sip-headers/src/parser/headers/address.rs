// Address adapters: From, To, Reply-To, Contact, Route, Record-Route and
// the Info family.
//
// name-addr      =  [ display-name ] LAQUOT addr-spec RAQUOT
// contact-param  =  (name-addr / addr-spec) *(SEMI contact-params)
// info           =  LAQUOT absoluteURI RAQUOT *( SEMI info-param)
//
// Without angle brackets every `;param` after the URI belongs to the
// header, not to the URI.

use tracing::trace;

use super::{parse_list, values_from};
use crate::error::{Error, Result};
use crate::parser::grammar::{self, parse_all};
use crate::parser::node::ParseNode;
use crate::parser::token::unquote;
use crate::types::address::{Contact, NameAddr};
use crate::types::info::InfoAddr;
use crate::types::uri::Uri;
use crate::types::values::Values;

pub fn parse_name_addr(s: &str) -> Result<NameAddr> {
    let tree = parse_all(grammar::address, s)?;
    name_addr_from(&tree)
}

/// A single mandatory address (From, To, Reply-To).
pub fn parse_single_address(s: &str) -> Result<NameAddr> {
    if s.trim().is_empty() {
        return Err(Error::ParseError("empty address".to_string()));
    }
    parse_name_addr(s)
}

/// `*` yields the wildcard Contact.
pub fn parse_contact(s: &str) -> Result<Contact> {
    let tree = parse_all(grammar::contact, s)?;
    if tree.rule() == "contact-star" {
        return Ok(Contact::wildcard());
    }
    tree.all("address")
        .into_iter()
        .map(|addr| name_addr_from(addr))
        .collect::<Result<Vec<_>>>()
        .map(Contact)
}

pub fn parse_address_list(s: &str) -> Result<Vec<NameAddr>> {
    parse_list(s, grammar::address_list, "address", |addr| name_addr_from(addr))
}

pub fn parse_info_addr(s: &str) -> Result<InfoAddr> {
    let tree = parse_all(grammar::info, s)?;
    info_from(&tree)
}

pub fn parse_info_list(s: &str) -> Result<Vec<InfoAddr>> {
    parse_list(s, grammar::info_list, "info", |info| info_from(info))
}

fn name_addr_from<N: ParseNode>(node: &N) -> Result<NameAddr> {
    let spec = node.require("addr-spec")?.text();
    let display_name = node.text_of("display-name").map(|name| unquote(name.trim()));

    let mut params = Values::new();
    let uri = if node.first("name-addr").is_some() {
        Uri::parse(spec)?
    } else {
        bare_uri(spec, &mut params)?
    };
    for (name, value) in &values_from(node) {
        params.append(name, value);
    }

    Ok(NameAddr { display_name, uri: Some(uri), params })
}

/// An addr-spec written without angle brackets. URI headers (`?a=b&c=d`)
/// are moved into the header parameters.
#[cfg(feature = "legacy_addr_params")]
fn bare_uri(spec: &str, params: &mut Values) -> Result<Uri> {
    let Some((uri, headers)) = spec.split_once('?') else {
        return Uri::parse(spec);
    };
    trace!(addr = %spec, "promoting URI headers of bare address");
    for header in headers.split('&').filter(|h| !h.is_empty()) {
        let (name, value) = header.split_once('=').unwrap_or((header, ""));
        params.append(name, value);
    }
    Uri::parse(uri)
}

#[cfg(not(feature = "legacy_addr_params"))]
fn bare_uri(spec: &str, _params: &mut Values) -> Result<Uri> {
    trace!(addr = %spec, "bare address");
    Uri::parse(spec)
}

fn info_from<N: ParseNode>(node: &N) -> Result<InfoAddr> {
    let uri = Uri::parse(node.require("addr-spec")?.text())?;
    Ok(InfoAddr { uri: Some(uri), params: values_from(node) })
}
