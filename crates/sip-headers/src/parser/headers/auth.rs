// credentials       =  ("Digest" LWS digest-response) / other-response
// challenge         =  ("Digest" LWS digest-cln *(COMMA digest-cln)) / other-challenge
// other-response    =  auth-scheme LWS auth-param *(COMMA auth-param)
// Authentication-Info = "Authentication-Info" HCOLON ainfo *(COMMA ainfo)
//
// Bearer credentials are a single token68 (RFC 8898). Schemes without a
// structured variant keep their parameters verbatim.

use tracing::trace;

use crate::error::{Error, Result};
use crate::parser::grammar::{self, parse_all};
use crate::parser::node::ParseNode;
use crate::parser::token::unquote;
use crate::types::auth::{
    parse_nonce_count, AuthChallenge, AuthCredentials, AuthenticationInfo, BearerChallenge, BearerCredentials,
    DigestChallenge, DigestCredentials, DomainEntry, GenericAuth, Qop,
};
use crate::types::uri::Uri;
use crate::types::values::Values;

/// `(name, raw value)` pairs below `node`, in input order.
fn auth_params<N: ParseNode>(node: &N) -> Vec<(&str, &str)> {
    node.all("auth-param")
        .into_iter()
        .map(|param| {
            (
                param.text_of("auth-param-name").unwrap_or_default(),
                param.text_of("auth-param-value").unwrap_or_default(),
            )
        })
        .collect()
}

fn nonce_count(value: &str) -> Result<u32> {
    parse_nonce_count(value).ok_or_else(|| Error::ParseError(format!("Invalid nonce count: {}", value)))
}

fn is_true(value: &str) -> bool {
    unquote(value).eq_ignore_ascii_case("true")
}

fn generic<N: ParseNode>(scheme: &str, node: &N) -> GenericAuth {
    GenericAuth {
        scheme: scheme.to_string(),
        token: node.text_of("token68").map(str::to_string),
        params: auth_params(node).into_iter().collect(),
    }
}

pub fn parse_credentials(s: &str) -> Result<AuthCredentials> {
    let tree = parse_all(grammar::auth, s)?;
    let scheme = tree.require("auth-scheme")?.text();
    let token = tree.text_of("token68");

    if scheme.eq_ignore_ascii_case("Digest") && token.is_none() {
        return digest_credentials(&tree).map(AuthCredentials::Digest);
    }
    if let Some(token) = token.filter(|_| scheme.eq_ignore_ascii_case("Bearer")) {
        return Ok(AuthCredentials::Bearer(BearerCredentials::new(token)));
    }
    trace!(scheme, "generic credentials");
    Ok(AuthCredentials::Any(generic(scheme, &tree)))
}

fn digest_credentials<N: ParseNode>(node: &N) -> Result<DigestCredentials> {
    let mut creds = DigestCredentials::default();
    for (name, value) in auth_params(node) {
        match name.to_ascii_lowercase().as_str() {
            "username" => creds.username = unquote(value),
            "realm" => creds.realm = unquote(value),
            "nonce" => creds.nonce = unquote(value),
            "response" => creds.response = unquote(value),
            "uri" => match Uri::parse(&unquote(value)) {
                Ok(uri) => creds.uri = Some(uri),
                Err(e) => {
                    trace!(uri = value, error = %e, "keeping unparsable digest-uri verbatim");
                    creds.params.append(name, value);
                }
            },
            "algorithm" => creds.algorithm = Some(value.parse()?),
            "cnonce" => creds.cnonce = Some(unquote(value)),
            "opaque" => creds.opaque = Some(unquote(value)),
            "qop" => creds.qop = Some(value.parse()?),
            "nc" => creds.nonce_count = Some(nonce_count(value)?),
            "userhash" => creds.userhash = is_true(value),
            _ => {
                creds.params.append(name, value);
            }
        }
    }
    Ok(creds)
}

pub fn parse_challenge(s: &str) -> Result<AuthChallenge> {
    let tree = parse_all(grammar::auth, s)?;
    let scheme = tree.require("auth-scheme")?.text();
    let has_token = tree.first("token68").is_some();

    if scheme.eq_ignore_ascii_case("Digest") && !has_token {
        return digest_challenge(&tree).map(AuthChallenge::Digest);
    }
    if scheme.eq_ignore_ascii_case("Bearer") && !has_token {
        return Ok(AuthChallenge::Bearer(bearer_challenge(&tree)));
    }
    trace!(scheme, "generic challenge");
    Ok(AuthChallenge::Any(generic(scheme, &tree)))
}

fn digest_challenge<N: ParseNode>(node: &N) -> Result<DigestChallenge> {
    let mut challenge = DigestChallenge::default();
    for (name, value) in auth_params(node) {
        match name.to_ascii_lowercase().as_str() {
            "realm" => challenge.realm = unquote(value),
            "nonce" => challenge.nonce = unquote(value),
            "domain" => {
                challenge.domain = unquote(value)
                    .split_whitespace()
                    .map(str::parse::<DomainEntry>)
                    .collect::<Result<Vec<_>>>()?;
            }
            "opaque" => challenge.opaque = Some(unquote(value)),
            "stale" => challenge.stale = is_true(value),
            "algorithm" => challenge.algorithm = Some(value.parse()?),
            "qop" => {
                challenge.qop = unquote(value)
                    .split(',')
                    .map(str::trim)
                    .filter(|q| !q.is_empty())
                    .map(|q| q.parse::<Qop>())
                    .collect::<Result<Vec<_>>>()?;
            }
            "userhash" => challenge.userhash = is_true(value),
            _ => {
                challenge.params.append(name, value);
            }
        }
    }
    Ok(challenge)
}

fn bearer_challenge<N: ParseNode>(node: &N) -> BearerChallenge {
    let mut challenge = BearerChallenge::default();
    for (name, value) in auth_params(node) {
        match name.to_ascii_lowercase().as_str() {
            "realm" => challenge.realm = Some(unquote(value)),
            "scope" => challenge.scope = Some(unquote(value)),
            "error" => challenge.error = Some(unquote(value)),
            "authz_server" => challenge.authz_server = unquote(value),
            _ => {
                challenge.params.append(name, value);
            }
        }
    }
    challenge
}

/// Empty input yields an empty value.
pub fn parse_authentication_info(s: &str) -> Result<AuthenticationInfo> {
    if s.trim().is_empty() {
        return Ok(AuthenticationInfo::default());
    }
    let tree = parse_all(grammar::authentication_info, s)?;
    let mut info = AuthenticationInfo::default();
    let mut params = Values::new();
    for (name, value) in auth_params(&tree) {
        match name.to_ascii_lowercase().as_str() {
            "nextnonce" => info.nextnonce = Some(unquote(value)),
            "qop" => info.qop = Some(value.parse()?),
            "rspauth" => info.rspauth = Some(unquote(value)),
            "cnonce" => info.cnonce = Some(unquote(value)),
            "nc" => info.nonce_count = Some(nonce_count(value)?),
            _ => {
                params.append(name, value);
            }
        }
    }
    info.params = params;
    Ok(info)
}
