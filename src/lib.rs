//! Parser and canonical encoder for the RFC 7239 `Forwarded` HTTP header.
//!
//! ```
//! use forwarded_header::{parse, serialize};
//!
//! let elements = parse([r#"for="_gazonk", For="[2001:db8:cafe::17]:4711";proto=HTTP"#]).unwrap();
//! assert_eq!(elements.len(), 2);
//! assert_eq!(
//!     serialize(&elements),
//!     r#"for=_gazonk,for="[2001:db8:cafe::17]:4711";proto=http"#
//! );
//! ```

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
mod text;
pub mod types;

pub use crate::decode::{parse, parse_str};
pub use crate::encode::{
    serialize, to_string_with_options, to_vec, to_vec_with_options, to_writer,
    to_writer_with_options,
};
pub use crate::error::{Error, ErrorCategory, ErrorKind, Location};
pub use crate::options::{ElementSeparator, EncodeOptions, Quoting};
pub use crate::types::{ForwardedElement, Node, NodePort};

pub type Result<T> = std::result::Result<T, Error>;
