//! Primitive reads over a TL byte stream.
//!
//! # Format
//!
//! All fixed-width values are little-endian and every value occupies a multiple of 4 bytes:
//!
//! ```text
//! u32, i32             4 bytes
//! i64, f64             8 bytes
//! bool                 boolTrue#997275b5 or boolFalse#bc799737
//! bytes (len <= 253)   | len (1) | data (len) | padding to 4 |
//! bytes (len >  253)   | 0xfe (1) | len (3) | data (len) | padding to 4 |
//! vector               | vector#1cb5c415 (4) | count (4) | elements ... |
//! ```

use crate::{Error, RangeCfg};
use bytes::{Buf, Bytes};

/// Type code of the `boolTrue` constructor.
pub const BOOL_TRUE: u32 = 0x997275b5;

/// Type code of the `boolFalse` constructor.
pub const BOOL_FALSE: u32 = 0xbc799737;

/// Type code of the `vector` constructor prefixed to every sequence.
pub const VECTOR: u32 = 0x1cb5c415;

/// Prefix byte announcing a 3-byte length.
const LONG_LEN_PREFIX: u8 = 0xfe;

/// Longest length encoded in the single prefix byte.
const SHORT_LEN_MAX: usize = 253;

const WORD_LEN: usize = 4;

/// Cursor over an immutable input buffer.
pub struct Reader {
    buf: Bytes,
    len: usize,
}

impl Reader {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        let buf = buf.into();
        let len = buf.len();
        Self { buf, len }
    }

    /// Number of bytes not consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.len - self.buf.remaining()
    }

    #[inline]
    fn at_least(&self, len: usize) -> Result<(), Error> {
        if self.buf.remaining() < len {
            return Err(Error::EndOfBuffer);
        }
        Ok(())
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.at_least(4)?;
        Ok(self.buf.get_u32_le())
    }

    /// Reads a `u32` and reinterprets its bits as signed.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(self.read_u32()? as i32)
    }

    #[inline]
    pub fn read_i64(&mut self) -> Result<i64, Error> {
        self.at_least(8)?;
        Ok(self.buf.get_i64_le())
    }

    #[inline]
    pub fn read_f64(&mut self) -> Result<f64, Error> {
        self.at_least(8)?;
        Ok(self.buf.get_f64_le())
    }

    /// Reads the 4-byte type code prefixed to objects.
    #[inline]
    pub fn read_type_code(&mut self) -> Result<u32, Error> {
        self.read_u32()
    }

    pub fn read_bool(&mut self) -> Result<bool, Error> {
        match self.read_type_code()? {
            BOOL_TRUE => Ok(true),
            BOOL_FALSE => Ok(false),
            code => Err(Error::InvalidBool(code)),
        }
    }

    /// Reads a length-prefixed, padded byte string.
    pub fn read_message(&mut self, range: &RangeCfg<usize>) -> Result<Bytes, Error> {
        self.at_least(1)?;
        let (header, len) = match self.buf.get_u8() {
            LONG_LEN_PREFIX => {
                self.at_least(3)?;
                let mut len = [0u8; 4];
                self.buf.copy_to_slice(&mut len[..3]);
                (4, u32::from_le_bytes(len) as usize)
            }
            len if len as usize <= SHORT_LEN_MAX => (1, len as usize),
            prefix => return Err(Error::InvalidMessagePrefix(prefix)),
        };
        if !range.contains(&len) {
            return Err(Error::InvalidLength(len));
        }
        let padding = (WORD_LEN - (header + len) % WORD_LEN) % WORD_LEN;
        self.at_least(len + padding)?;
        let data = self.buf.copy_to_bytes(len);
        self.buf.advance(padding);
        Ok(data)
    }

    /// Reads a byte string and interprets it as UTF-8.
    pub fn read_string(&mut self, range: &RangeCfg<usize>) -> Result<String, Error> {
        let data = self.read_message(range)?;
        String::from_utf8(data.into()).map_err(|_| Error::InvalidUtf8)
    }

    /// Reads the `vector` constructor and the element count that follows it.
    pub fn read_vector_len(&mut self, range: &RangeCfg<usize>) -> Result<usize, Error> {
        let code = self.read_type_code()?;
        if code != VECTOR {
            return Err(Error::CrcMismatch {
                got: code,
                want: VECTOR,
            });
        }
        let len = self.read_u32()? as usize;
        if !range.contains(&len) {
            return Err(Error::InvalidLength(len));
        }
        Ok(len)
    }

    /// Returns the unread bytes without consuming them.
    pub fn peek_remaining(&self) -> Bytes {
        self.buf.clone()
    }
}
