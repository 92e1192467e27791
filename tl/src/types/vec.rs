//! Homogeneous vectors.

use crate::{Decoder, Error, Kind, Value};

impl<T: Value + Default> Value for Vec<T> {
    #[inline]
    fn kind(&self) -> Kind {
        Kind::Vector
    }

    #[inline]
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        decoder.decode_vector(self)
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }

    fn check_shape(&self) -> Result<(), Error> {
        T::default().check_shape()
    }
}
