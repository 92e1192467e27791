//! Byte strings.
//!
//! Lengths are bounded by [crate::Config::bytes_len].

use crate::{Decoder, Error, Kind, Value};
use bytes::Bytes;

impl Value for Bytes {
    #[inline]
    fn kind(&self) -> Kind {
        Kind::Bytes
    }

    #[inline]
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        let range = &decoder.config().bytes_len;
        *self = decoder.reader().read_message(range)?;
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }
}

impl Value for String {
    #[inline]
    fn kind(&self) -> Kind {
        Kind::String
    }

    #[inline]
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        let range = &decoder.config().bytes_len;
        *self = decoder.reader().read_string(range)?;
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mocks::Wire, Config, RangeCfg, Reader, Registry};

    #[test]
    fn test_bytes_and_string() {
        let registry = Registry::builder().build();
        let cfg = Config::default();
        let wire = Wire::new().bytes(&[0, 1, 2]).string("héllo");
        let mut decoder = Decoder::new(&registry, &cfg, Reader::new(wire.finish()));

        let mut data = Bytes::new();
        decoder.decode_value(&mut data).unwrap();
        assert_eq!(&data[..], &[0, 1, 2]);

        let mut text = String::new();
        decoder.decode_value(&mut text).unwrap();
        assert_eq!(text, "héllo");
        assert_eq!(decoder.reader().remaining(), 0);
    }

    #[test]
    fn test_length_limit() {
        let registry = Registry::builder().build();
        let cfg = Config {
            bytes_len: RangeCfg::from(..4),
            ..Config::default()
        };
        let wire = Wire::new().string("long");
        let mut decoder = Decoder::new(&registry, &cfg, Reader::new(wire.finish()));
        let mut text = String::new();
        assert!(matches!(
            decoder.decode_value(&mut text),
            Err(Error::InvalidLength(4))
        ));
    }
}
