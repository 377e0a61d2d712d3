//! Header value model.
//!
//! One module per header family. Value records (`NameAddr`, `ViaHop`,
//! `MimeRange`, ...) pair a core datum with a [`Values`] parameter map;
//! header types wrap one record or a list of them and implement
//! [`headers::Header`].

pub mod accept;
pub mod accept_encoding;
pub mod accept_language;
pub mod address;
pub mod auth;
pub mod call_id;
pub mod content_disposition;
pub mod cseq;
pub mod date;
pub mod equality;
pub mod headers;
pub mod info;
pub mod media_type;
pub mod method;
pub mod mime_version;
pub mod numeric;
pub mod priority;
pub mod render;
pub mod retry_after;
pub mod text;
pub mod timestamp;
pub mod token_list;
pub mod uri;
pub mod values;
pub mod via;
pub mod warning;

pub use accept::{Accept, MimeRange};
pub use accept_encoding::{AcceptEncoding, EncodingRange};
pub use accept_language::{AcceptLanguage, LanguageRange};
pub use address::{Contact, NameAddr, RecordRoute, ReplyTo, Route, To};
pub use auth::{
    AuthChallenge, AuthCredentials, AuthenticationInfo, Authorization, ProxyAuthenticate, ProxyAuthorization,
    WwwAuthenticate,
};
pub use call_id::CallId;
pub use content_disposition::ContentDisposition;
pub use cseq::CSeq;
pub use date::Date;
pub use info::{AlertInfo, CallInfo, ErrorInfo, InfoAddr};
pub use media_type::{ContentType, MimeType};
pub use method::Method;
pub use mime_version::MimeVersion;
pub use numeric::{ContentLength, Expires, MaxForwards, MinExpires};
pub use priority::Priority;
pub use retry_after::RetryAfter;
pub use text::{Organization, Server, Subject, UserAgent};
pub use timestamp::Timestamp;
pub use token_list::{
    Allow, ContentEncoding, ContentLanguage, InReplyTo, ProxyRequire, Require, Supported, Unsupported,
};
pub use values::Values;
pub use via::{Via, ViaHop};
pub use warning::{Warning, WarningEntry};
