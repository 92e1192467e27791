//! Core decoding traits

use crate::{Config, Decoder, Error, Kind, Registry};
use bytes::Bytes;
use core::{any::Any, fmt::Debug};

/// A location that can be filled in place from the stream.
///
/// Decoding writes into an existing value rather than returning a new one so that already
/// allocated nested objects are reused.
pub trait Value {
    /// The declared shape of this location.
    fn kind(&self) -> Kind;

    /// Decodes one value from `decoder` into `self`.
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error>;

    /// Returns this location to its zero value.
    ///
    /// Called for an optional field whose bit is unset, so a reused target does not keep the
    /// value of an earlier decode.
    fn reset(&mut self);

    /// Fails with [Error::UnsupportedShape] if this location, or any value nested in it, can't
    /// be read from the wire. Nothing is read.
    fn check_shape(&self) -> Result<(), Error> {
        let kind = self.kind();
        if !kind.is_supported() {
            return Err(Error::UnsupportedShape(kind));
        }
        Ok(())
    }

    /// Sets the value of a bitflag-valued field whose bit is set.
    ///
    /// Only `bool` carries the "present" state; every other shape rejects it.
    fn set_flag(&mut self) -> Result<(), Error> {
        Err(Error::UnsupportedShape(self.kind()))
    }
}

/// Position of an optional field in the bitset that precedes an object's fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flag {
    /// Bit of the bitset that marks the field as present.
    pub bit: u8,
    /// The field has no bytes of its own: it is `true` when the bit is set.
    pub bitflag_valued: bool,
}

/// Static description of one field of an [Object].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub flag: Option<Flag>,
}

impl Field {
    /// A field that is always present on the wire.
    pub const fn required(name: &'static str) -> Self {
        Self { name, flag: None }
    }

    /// A field that is only present on the wire when `bit` is set.
    pub const fn optional(name: &'static str, bit: u8) -> Self {
        assert!(bit < 32, "flag bit must be in 0..32");
        Self {
            name,
            flag: Some(Flag {
                bit,
                bitflag_valued: false,
            }),
        }
    }

    /// A `bool` field whose value is whether `bit` is set.
    pub const fn bitflag(name: &'static str, bit: u8) -> Self {
        assert!(bit < 32, "flag bit must be in 0..32");
        Self {
            name,
            flag: Some(Flag {
                bit,
                bitflag_valued: true,
            }),
        }
    }
}

/// Position of the type code when custom decoding starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Header {
    /// The type code is the next thing in the stream.
    Unread,
    /// The type code was consumed (and matched) by the registered type lookup.
    Consumed(u32),
}

/// Hand-written decoding that replaces field traversal for an [Object].
pub trait CustomDecode {
    fn decode_custom(&mut self, decoder: &mut Decoder<'_>, header: Header) -> Result<(), Error>;
}

/// An object identified on the wire by a constant 4-byte type code.
///
/// Implementations are usually generated with [crate::object!].
pub trait Object: Value + Debug + Send + Sync + 'static {
    /// The type code of this object's shape.
    fn type_code(&self) -> u32;

    /// The name of this object's shape, used in error context.
    fn type_name(&self) -> &'static str;

    /// Fields in wire order.
    fn fields(&self) -> &'static [Field] {
        &[]
    }

    /// Returns the field described by `self.fields()[index]`.
    fn field_mut(&mut self, _index: usize) -> Option<&mut dyn Value> {
        None
    }

    /// Returns the custom decoder of this object, if it has one.
    fn as_custom(&mut self) -> Option<&mut dyn CustomDecode> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// An [Object] that can be instantiated from its type code.
pub trait Constructor: Object + Default {
    const TYPE_CODE: u32;
}

impl dyn Object {
    /// Returns true if the object is a `T`.
    pub fn is<T: Object>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Converts the boxed object into a `T`, returning the box unchanged if it is not one.
    pub fn downcast<T: Object>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if self.is::<T>() {
            // The check above guarantees the conversion.
            Ok(self.into_any().downcast().unwrap_or_else(|_| unreachable!()))
        } else {
            Err(self)
        }
    }
}

/// Extension trait providing an ergonomic decode method for types with a zero value.
pub trait DecodeExt: Value + Default {
    /// Decodes a new value from `buf` using the default [Config].
    fn decode_tl(registry: &Registry, buf: impl Into<Bytes>) -> Result<Self, Error> {
        Self::decode_tl_cfg(registry, &Config::default(), buf)
    }

    /// Decodes a new value from `buf` using `cfg`.
    fn decode_tl_cfg(
        registry: &Registry,
        cfg: &Config,
        buf: impl Into<Bytes>,
    ) -> Result<Self, Error> {
        let mut value = Self::default();
        crate::decode_cfg(registry, cfg, buf, &mut value)?;
        Ok(value)
    }
}

impl<T: Value + Default> DecodeExt for T {}
