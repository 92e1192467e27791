//! Decode Type Language (TL) objects.
//!
//! # Overview
//!
//! TL is a binary format for schema-described, polymorphic payloads: every boxed object starts
//! with a 4-byte type code naming its shape, optional fields are announced by a 32-bit bitset,
//! and abstract fields may hold any shape whose code is known to the receiver.
//!
//! This crate decodes untrusted buffers into typed object graphs:
//! - Objects are declared with [object!] (or by implementing [Object] by hand).
//! - Shapes that may appear behind a polymorphic field are collected in a [Registry].
//! - [decode] fills a target in place; [decode_registered] returns whatever shape the buffer
//!   holds.
//!
//! # Supported Types
//!
//! - Primitives: `f64`, `i64`, `u32`, `i32`, `bool`
//! - Byte strings: `String`, [bytes::Bytes]. Raw byte fields must be declared as `Bytes`:
//!   `Vec<u8>` is a vector of `u8`, which has no wire form, so it fails with
//!   [Error::UnsupportedShape] before anything is read.
//! - Collections: `Vec<T>`
//! - Indirections: `Option<T>`, `Box<T>`
//! - Polymorphic fields: [AnyObject]
//!
//! # Example
//!
//! ```
//! use commonware_tl::{decode, object, AnyObject, Constructor, Registry};
//!
//! object! {
//!     pub struct PeerUser = 0x59511722 {
//!         pub user_id: i64,
//!     }
//! }
//!
//! object! {
//!     pub struct Message = 0x1e4a2f38 {
//!         #[flag(0)]
//!         pub edit_date: Option<i32>,
//!         #[bitflag(1)]
//!         pub silent: bool,
//!         pub peer: AnyObject,
//!         pub text: String,
//!     }
//! }
//!
//! let registry = Registry::builder().register::<PeerUser>().unwrap().build();
//!
//! let mut buf = Vec::new();
//! buf.extend_from_slice(&Message::TYPE_CODE.to_le_bytes());
//! buf.extend_from_slice(&0b10u32.to_le_bytes()); // silent, no edit_date
//! buf.extend_from_slice(&PeerUser::TYPE_CODE.to_le_bytes());
//! buf.extend_from_slice(&42i64.to_le_bytes());
//! buf.extend_from_slice(&[2, b'h', b'i', 0]);
//!
//! let mut message = Message::default();
//! decode(&registry, buf, &mut message).unwrap();
//! assert!(message.silent);
//! assert_eq!(message.edit_date, None);
//! assert_eq!(message.peer.downcast_ref::<PeerUser>().unwrap().user_id, 42);
//! assert_eq!(message.text, "hi");
//! ```

pub mod codec;
pub mod config;
pub mod decoder;
pub mod error;
pub mod kind;
mod macros;
pub mod reader;
pub mod registry;
pub mod types;

#[cfg(test)]
mod mocks;

pub use codec::{Constructor, CustomDecode, DecodeExt, Field, Flag, Header, Object, Value};
pub use config::{Config, RangeCfg};
pub use decoder::Decoder;
pub use error::Error;
pub use kind::Kind;
pub use reader::Reader;
pub use registry::{Registry, RegistryBuilder};
pub use types::AnyObject;

use bytes::Bytes;
use tracing::warn;

/// Decodes `buf` into `target` using the default [Config].
///
/// `target` is usually `&mut value` (`Some(&mut value)` when the value is itself an `Option`).
/// Passing `None` fails with [Error::InvalidTarget] without reading anything. On error, `target`
/// may be partially filled.
pub fn decode<'t, T: Value + 't>(
    registry: &Registry,
    buf: impl Into<Bytes>,
    target: impl Into<Option<&'t mut T>>,
) -> Result<(), Error> {
    decode_cfg(registry, &Config::default(), buf, target)
}

/// Decodes `buf` into `target` using `cfg`.
pub fn decode_cfg<'t, T: Value + 't>(
    registry: &Registry,
    cfg: &Config,
    buf: impl Into<Bytes>,
    target: impl Into<Option<&'t mut T>>,
) -> Result<(), Error> {
    let name = core::any::type_name::<T>();
    let Some(target) = target.into() else {
        return Err(Error::InvalidTarget(name));
    };

    let mut decoder = Decoder::new(registry, cfg, Reader::new(buf));
    decoder.decode_value(target).map_err(|err| {
        if let Error::UnsupportedShape(kind) = err.root() {
            warn!(ty = name, %kind, "target cannot be decoded");
        }
        err.context(format!("decode {name}"))
    })
}

/// Decodes whichever registered object `buf` holds, using the default [Config].
pub fn decode_registered(
    registry: &Registry,
    buf: impl Into<Bytes>,
) -> Result<Box<dyn Object>, Error> {
    decode_registered_cfg(registry, &Config::default(), buf)
}

/// Decodes whichever registered object `buf` holds, using `cfg`.
pub fn decode_registered_cfg(
    registry: &Registry,
    cfg: &Config,
    buf: impl Into<Bytes>,
) -> Result<Box<dyn Object>, Error> {
    let mut decoder = Decoder::new(registry, cfg, Reader::new(buf));
    decoder
        .decode_registered()
        .map_err(|err| err.context("decode registered object"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::*;

    #[test]
    fn test_absent_target() {
        let registry = registry();
        let buf = Wire::new().u32(Point::TYPE_CODE).i32(1).i32(2).finish();
        let err = decode(&registry, buf, None::<&mut Point>).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget(name) if name.ends_with("Point")));
    }

    #[test]
    fn test_error_names_target() {
        let registry = registry();
        let buf = Wire::new().u32(Flags::TYPE_CODE).i32(1).i32(2).finish();
        let mut point = Point::default();
        let err = decode(&registry, buf, &mut point).unwrap_err();
        assert!(matches!(
            err.root(),
            Error::CrcMismatch { got, want } if *got == Flags::TYPE_CODE && *want == Point::TYPE_CODE
        ));
        assert!(err.to_string().starts_with("decode "));
        assert!(err.to_string().contains("Point: invalid crc code"));
    }

    #[test]
    fn test_decode_into_target() {
        let registry = registry();
        let buf = Wire::new().u32(Point::TYPE_CODE).i32(-1).i32(9).finish();
        let mut point = Point::default();
        decode(&registry, buf, &mut point).unwrap();
        assert_eq!((point.x, point.y), (-1, 9));
    }

    #[test]
    fn test_decode_registered_entry() {
        let registry = registry();
        let buf = Wire::new().u32(Empty::TYPE_CODE).finish();
        assert!(decode_registered(&registry, buf).unwrap().is::<Empty>());

        let buf = Wire::new().u32(0xfeedface).u32(1).finish();
        let err = decode_registered(&registry, buf).unwrap_err();
        assert!(err.to_string().starts_with("decode registered object: "));
        let (code, remainder) = err.unknown_type().unwrap();
        assert_eq!(code, 0xfeedface);
        assert_eq!(&remainder[..], &[1, 0, 0, 0]);
    }

    #[test]
    fn test_decode_ext() {
        let registry = registry();
        let buf = Wire::new().vector(2).i32(4).i32(5).finish();
        let values = Vec::<i32>::decode_tl(&registry, buf).unwrap();
        assert_eq!(values, vec![4, 5]);
    }
}
