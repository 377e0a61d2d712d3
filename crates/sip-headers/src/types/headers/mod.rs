//! The header contract and the machinery around it: canonical names, the
//! typed header enum, the generic fallback header and the extension
//! registry.

mod any_header;
mod header;
pub mod header_name;
pub mod registry;
mod typed_header;

pub use any_header::AnyHeader;
pub use header::{downcast_eq, Header, TypedHeaderTrait};
pub use header_name::{canonical_name, HeaderName};
pub use registry::{build_header, register_parser, resolve_parser, unregister_parser, HeaderParser};
pub use typed_header::TypedHeader;
