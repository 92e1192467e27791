//! Fixed-width primitives.
//!
//! `i32` is read as a `u32` and reinterpreted, so enum-like integer codes and signed
//! values share one wire read.

use crate::{Decoder, Error, Kind, Value};

macro_rules! impl_primitive {
    ($type:ty, $kind:ident, $read_method:ident) => {
        impl Value for $type {
            #[inline]
            fn kind(&self) -> Kind {
                Kind::$kind
            }

            #[inline]
            fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
                *self = decoder.reader().$read_method()?;
                Ok(())
            }

            #[inline]
            fn reset(&mut self) {
                *self = <$type>::default();
            }
        }
    };
}

impl_primitive!(f64, Double, read_f64);
impl_primitive!(i64, Long, read_i64);
impl_primitive!(u32, Uint, read_u32);
impl_primitive!(i32, Int, read_i32);

impl Value for bool {
    #[inline]
    fn kind(&self) -> Kind {
        Kind::Bool
    }

    #[inline]
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        *self = decoder.reader().read_bool()?;
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        *self = false;
    }

    #[inline]
    fn set_flag(&mut self) -> Result<(), Error> {
        *self = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mocks::Wire, Config, Reader, Registry};

    fn decode<T: Value + Default>(wire: Wire) -> Result<T, Error> {
        let registry = Registry::builder().build();
        let cfg = Config::default();
        let mut decoder = Decoder::new(&registry, &cfg, Reader::new(wire.finish()));
        let mut value = T::default();
        decoder.decode_value(&mut value)?;
        Ok(value)
    }

    #[test]
    fn test_numeric() {
        assert_eq!(decode::<f64>(Wire::new().f64(-0.25)).unwrap(), -0.25);
        assert_eq!(decode::<i64>(Wire::new().i64(i64::MIN)).unwrap(), i64::MIN);
        assert_eq!(decode::<u32>(Wire::new().u32(u32::MAX)).unwrap(), u32::MAX);
        assert_eq!(decode::<i32>(Wire::new().u32(u32::MAX)).unwrap(), -1);
    }

    #[test]
    fn test_bool() {
        assert!(decode::<bool>(Wire::new().bool(true)).unwrap());
        assert!(!decode::<bool>(Wire::new().bool(false)).unwrap());
        assert!(matches!(
            decode::<bool>(Wire::new().u32(0)),
            Err(Error::InvalidBool(0))
        ));
    }

    #[test]
    fn test_set_flag() {
        let mut flag = false;
        flag.set_flag().unwrap();
        assert!(flag);
        flag.reset();
        assert!(!flag);

        let mut count = 0u32;
        assert!(matches!(
            count.set_flag(),
            Err(Error::UnsupportedShape(Kind::Uint))
        ));
    }

    #[test]
    fn test_truncated() {
        assert!(matches!(
            decode::<i64>(Wire::new().u32(1)),
            Err(Error::EndOfBuffer)
        ));
    }
}
