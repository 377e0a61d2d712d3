use std::any::Any;
use std::fmt;

use super::any_header::AnyHeader;
use super::header::Header;
use super::header_name::HeaderName;
use crate::error::Result;
use crate::types::address::{Contact, From as FromHeader, RecordRoute, ReplyTo, Route, To};
use crate::types::auth::{AuthenticationInfo, Authorization, ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate};
use crate::types::info::{AlertInfo, CallInfo, ErrorInfo};
use crate::types::token_list::{
    Allow, ContentEncoding, ContentLanguage, InReplyTo, ProxyRequire, Require, Supported, Unsupported,
};
use crate::types::{
    Accept, AcceptEncoding, AcceptLanguage, CSeq, CallId, ContentDisposition, ContentLength, ContentType, Date,
    Expires, MaxForwards, MimeVersion, MinExpires, Organization, Priority, RetryAfter, Server, Subject, Timestamp,
    UserAgent, Via, Warning,
};

macro_rules! typed_headers {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// A strongly-typed SIP header.
        ///
        /// One variant per header kind this crate models, plus [`AnyHeader`]
        /// for raw values and `Extension` for values produced by registered
        /// parsers. Every variant implements [`Header`], and so does the enum
        /// itself by delegation.
        ///
        /// ```
        /// use rvoip_sip_headers::prelude::*;
        ///
        /// let header = TypedHeader::from(CallId::new("f81d4fae-7dec-11d0-a765-00a0c91e6bf6@example.com"));
        /// assert_eq!(header.name(), HeaderName::CallId);
        /// assert_eq!(header.to_string(), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6@example.com");
        /// ```
        #[derive(Debug, Clone)]
        pub enum TypedHeader {
            $($variant($ty),)*
            Any(AnyHeader),
            Extension(Box<dyn Header>),
        }

        impl TypedHeader {
            /// The wrapped header as a trait object.
            pub fn as_header(&self) -> &dyn Header {
                match self {
                    $(TypedHeader::$variant(h) => h as &dyn Header,)*
                    TypedHeader::Any(h) => h,
                    TypedHeader::Extension(h) => h.as_ref(),
                }
            }

            /// Parses `value` as the built-in kind for `name`; `None` when
            /// `name` has no built-in kind.
            pub(crate) fn parse_builtin(name: &HeaderName, value: &str) -> Option<Result<TypedHeader>> {
                match name {
                    $(HeaderName::$variant => Some(value.parse::<$ty>().map(TypedHeader::$variant)),)*
                    _ => None,
                }
            }

            /// True when `name` has a built-in kind.
            pub fn is_builtin(name: &HeaderName) -> bool {
                match name {
                    $(HeaderName::$variant => true,)*
                    _ => false,
                }
            }
        }

        $(
            impl From<$ty> for TypedHeader {
                fn from(h: $ty) -> Self {
                    TypedHeader::$variant(h)
                }
            }
        )*
    };
}

typed_headers! {
    Accept(Accept),
    AcceptEncoding(AcceptEncoding),
    AcceptLanguage(AcceptLanguage),
    AlertInfo(AlertInfo),
    Allow(Allow),
    AuthenticationInfo(AuthenticationInfo),
    Authorization(Authorization),
    CallId(CallId),
    CallInfo(CallInfo),
    Contact(Contact),
    ContentDisposition(ContentDisposition),
    ContentEncoding(ContentEncoding),
    ContentLanguage(ContentLanguage),
    ContentLength(ContentLength),
    ContentType(ContentType),
    CSeq(CSeq),
    Date(Date),
    ErrorInfo(ErrorInfo),
    Expires(Expires),
    From(FromHeader),
    InReplyTo(InReplyTo),
    MaxForwards(MaxForwards),
    MimeVersion(MimeVersion),
    MinExpires(MinExpires),
    Organization(Organization),
    Priority(Priority),
    ProxyAuthenticate(ProxyAuthenticate),
    ProxyAuthorization(ProxyAuthorization),
    ProxyRequire(ProxyRequire),
    RecordRoute(RecordRoute),
    ReplyTo(ReplyTo),
    Require(Require),
    RetryAfter(RetryAfter),
    Route(Route),
    Server(Server),
    Subject(Subject),
    Supported(Supported),
    Timestamp(Timestamp),
    To(To),
    Unsupported(Unsupported),
    UserAgent(UserAgent),
    Via(Via),
    Warning(Warning),
    WwwAuthenticate(WwwAuthenticate),
}

impl TypedHeader {
    /// Sees through a `TypedHeader` to the header it wraps; any other
    /// header is returned as is.
    pub fn unwrap_dyn(header: &dyn Header) -> &dyn Header {
        match header.as_any().downcast_ref::<TypedHeader>() {
            Some(typed) => typed.as_header(),
            None => header,
        }
    }

    /// The wrapped header if it is a `T`.
    ///
    /// ```
    /// use rvoip_sip_headers::prelude::*;
    ///
    /// let h = TypedHeader::from(MaxForwards::new(70));
    /// assert_eq!(h.downcast_ref::<MaxForwards>(), Some(&MaxForwards::new(70)));
    /// assert!(h.downcast_ref::<CallId>().is_none());
    /// ```
    pub fn downcast_ref<T: Header>(&self) -> Option<&T> {
        self.as_header().as_any().downcast_ref::<T>()
    }

    pub fn is_valid(&self) -> bool {
        self.as_header().validate()
    }
}

impl From<AnyHeader> for TypedHeader {
    fn from(h: AnyHeader) -> Self {
        TypedHeader::Any(h)
    }
}

impl From<Box<dyn Header>> for TypedHeader {
    fn from(h: Box<dyn Header>) -> Self {
        match h.as_any().downcast_ref::<TypedHeader>() {
            Some(typed) => typed.clone(),
            None => TypedHeader::Extension(h),
        }
    }
}

impl fmt::Display for TypedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_header(), f)
    }
}

impl PartialEq for TypedHeader {
    fn eq(&self, other: &Self) -> bool {
        self.as_header().equal(other.as_header())
    }
}

impl Header for TypedHeader {
    fn name(&self) -> HeaderName {
        self.as_header().name()
    }

    fn compact_name(&self) -> Option<&'static str> {
        self.as_header().compact_name()
    }

    fn validate(&self) -> bool {
        self.as_header().validate()
    }

    fn equal(&self, other: &dyn Header) -> bool {
        self.as_header().equal(TypedHeader::unwrap_dyn(other))
    }

    fn clone_header(&self) -> Box<dyn Header> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
