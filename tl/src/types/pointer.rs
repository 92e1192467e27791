//! Owned indirections.
//!
//! An absent `Option<T>` is filled with `T::default()` before decoding, and a present one is
//! decoded in place. `Option<Box<T>>` therefore allocates a nested object exactly once and
//! reuses that allocation on every later decode. A flagged field whose bit is unset is never
//! touched, so it stays `None`.

use crate::{Decoder, Error, Kind, Value};

impl<T: Value + Default> Value for Option<T> {
    #[inline]
    fn kind(&self) -> Kind {
        match self {
            Some(value) => value.kind(),
            None => T::default().kind(),
        }
    }

    #[inline]
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        let value = self.get_or_insert_with(T::default);
        decoder.decode_value(value)
    }

    #[inline]
    fn reset(&mut self) {
        *self = None;
    }

    fn check_shape(&self) -> Result<(), Error> {
        match self {
            Some(value) => value.check_shape(),
            None => T::default().check_shape(),
        }
    }

    fn set_flag(&mut self) -> Result<(), Error> {
        self.get_or_insert_with(T::default).set_flag()
    }
}

impl<T: Value + ?Sized> Value for Box<T> {
    #[inline]
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    #[inline]
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        (**self).decode(decoder)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    fn check_shape(&self) -> Result<(), Error> {
        (**self).check_shape()
    }

    fn set_flag(&mut self) -> Result<(), Error> {
        (**self).set_flag()
    }
}
