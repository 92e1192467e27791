//! Objects and wire helpers shared by unit tests.

use crate::{
    reader::{BOOL_FALSE, BOOL_TRUE, VECTOR},
    CustomDecode, Decoder, Error, Header, Object, Registry, Value,
};
use bytes::{BufMut, Bytes, BytesMut};
use core::any::Any;

pub use crate::Constructor;

/// Builds TL-encoded input.
#[derive(Default)]
pub struct Wire(BytesMut);

impl Wire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.0.put_u32_le(value);
        self
    }

    pub fn i32(self, value: i32) -> Self {
        self.u32(value as u32)
    }

    pub fn i64(mut self, value: i64) -> Self {
        self.0.put_i64_le(value);
        self
    }

    pub fn f64(mut self, value: f64) -> Self {
        self.0.put_f64_le(value);
        self
    }

    pub fn bool(self, value: bool) -> Self {
        self.u32(if value { BOOL_TRUE } else { BOOL_FALSE })
    }

    pub fn bytes(mut self, data: &[u8]) -> Self {
        let header = if data.len() <= 253 {
            self.0.put_u8(data.len() as u8);
            1
        } else {
            self.0.put_u8(0xfe);
            self.0.put_slice(&(data.len() as u32).to_le_bytes()[..3]);
            4
        };
        self.0.put_slice(data);
        let padding = (4 - (header + data.len()) % 4) % 4;
        self.0.put_bytes(0, padding);
        self
    }

    pub fn string(self, value: &str) -> Self {
        self.bytes(value.as_bytes())
    }

    pub fn vector(self, len: u32) -> Self {
        self.u32(VECTOR).u32(len)
    }

    pub fn raw(mut self, data: &[u8]) -> Self {
        self.0.put_slice(data);
        self
    }

    pub fn finish(self) -> Bytes {
        self.0.freeze()
    }
}

crate::object! {
    pub struct Point = 0x2b8a5c1e {
        pub x: i32,
        pub y: i32,
    }
}

crate::object! {
    pub struct Flags = 0x6e1d4f27 {
        #[flag(0)]
        pub reply_to: Option<i32>,
        #[bitflag(2)]
        pub silent: bool,
        pub id: i32,
    }
}

crate::object! {
    pub struct Empty = 0x7f3b18ea {}
}

/// Object with hand-written decoding: a string, after its type code.
#[derive(Debug, Default)]
pub struct Tagged {
    pub label: String,
    pub header: Option<Header>,
}

impl Constructor for Tagged {
    const TYPE_CODE: u32 = 0x4d5c9b10;
}

impl CustomDecode for Tagged {
    fn decode_custom(&mut self, decoder: &mut Decoder<'_>, header: Header) -> Result<(), Error> {
        if header == Header::Unread {
            let code = decoder.reader().read_type_code()?;
            if code != Self::TYPE_CODE {
                return Err(Error::CrcMismatch {
                    got: code,
                    want: Self::TYPE_CODE,
                });
            }
        }
        self.header = Some(header);
        decoder.decode_value(&mut self.label)
    }
}

impl Object for Tagged {
    fn type_code(&self) -> u32 {
        Self::TYPE_CODE
    }

    fn type_name(&self) -> &'static str {
        "Tagged"
    }

    fn as_custom(&mut self) -> Option<&mut dyn CustomDecode> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Value for Tagged {
    fn kind(&self) -> crate::Kind {
        crate::Kind::Custom
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        decoder.decode_object(self, true)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn registry() -> Registry {
    Registry::builder()
        .register::<Point>()
        .and_then(|b| b.register::<Flags>())
        .and_then(|b| b.register::<Tagged>())
        .and_then(|b| b.register_enum::<Empty>())
        .expect("mock registry")
        .build()
}
