//! Shapes with no wire representation.
//!
//! These exist so that a schema using them fails with the offending [Kind] instead of a
//! confusing compile error deep inside generated code.

use crate::{Decoder, Error, Kind, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

macro_rules! impl_unsupported {
    ($kind:ident => $($type:ty),+ $(,)?) => {
        $(
            impl Value for $type {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn decode(&mut self, _: &mut Decoder<'_>) -> Result<(), Error> {
                    Err(Error::UnsupportedShape(Kind::$kind))
                }

                fn reset(&mut self) {
                    *self = <$type>::default();
                }
            }
        )+
    };
}

impl_unsupported!(Uint8 => u8);
impl_unsupported!(Uint16 => u16);
impl_unsupported!(Uint64 => u64);
impl_unsupported!(Int8 => i8);
impl_unsupported!(Int16 => i16);
impl_unsupported!(Usize => usize);
impl_unsupported!(Isize => isize);
impl_unsupported!(Float => f32);
impl_unsupported!(Char => char);

impl<T, const N: usize> Value for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn decode(&mut self, _: &mut Decoder<'_>) -> Result<(), Error> {
        Err(Error::UnsupportedShape(Kind::Array))
    }

    fn reset(&mut self) {}
}

impl<K, V, S> Value for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn decode(&mut self, _: &mut Decoder<'_>) -> Result<(), Error> {
        Err(Error::UnsupportedShape(Kind::Map))
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<K, V> Value for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn decode(&mut self, _: &mut Decoder<'_>) -> Result<(), Error> {
        Err(Error::UnsupportedShape(Kind::Map))
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T, S> Value for HashSet<T, S> {
    fn kind(&self) -> Kind {
        Kind::Set
    }

    fn decode(&mut self, _: &mut Decoder<'_>) -> Result<(), Error> {
        Err(Error::UnsupportedShape(Kind::Set))
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T> Value for BTreeSet<T> {
    fn kind(&self) -> Kind {
        Kind::Set
    }

    fn decode(&mut self, _: &mut Decoder<'_>) -> Result<(), Error> {
        Err(Error::UnsupportedShape(Kind::Set))
    }

    fn reset(&mut self) {
        self.clear();
    }
}
