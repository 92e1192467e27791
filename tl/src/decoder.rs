//! Generic decoding of values, objects and registered types.
//!
//! A [Decoder] owns the [Reader] for one decode call and walks the target shape:
//!
//! - [Decoder::decode_value] fills any [Value] (primitives, vectors, nested objects).
//! - [Decoder::decode_object] validates an object's type code, reads its optional-field bitset
//!   and fills its fields in order.
//! - [Decoder::decode_registered] reads a type code first and instantiates the matching shape
//!   from the [Registry].
//!
//! Every step returns as soon as anything fails, so no byte is consumed after the first error.
//! Errors pick up the field and object names they pass through on the way out.

use crate::{CustomDecode, Config, Error, Header, Object, Reader, Registry, Value};
use tracing::{debug, trace};

/// Smallest number of bytes any encoded value occupies.
const MIN_VALUE_LEN: usize = 4;

#[inline]
fn is_set(bitset: u32, bit: u8) -> bool {
    bitset.checked_shr(bit.into()).unwrap_or(0) & 1 == 1
}

/// State of a single decode call.
pub struct Decoder<'a> {
    reader: Reader,
    registry: &'a Registry,
    cfg: &'a Config,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(registry: &'a Registry, cfg: &'a Config, reader: Reader) -> Self {
        Self {
            reader,
            registry,
            cfg,
            depth: 0,
        }
    }

    /// The primitive reader, for [Value] and [CustomDecode] implementations.
    #[inline]
    pub fn reader(&mut self) -> &mut Reader {
        &mut self.reader
    }

    #[inline]
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    #[inline]
    pub fn config(&self) -> &'a Config {
        self.cfg
    }

    /// Current nesting of objects and vectors.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the decoder, returning the reader positioned after the decoded values.
    pub fn into_reader(self) -> Reader {
        self.reader
    }

    /// Decodes one value into `target`.
    #[inline]
    pub fn decode_value(&mut self, target: &mut dyn Value) -> Result<(), Error> {
        target.decode(self)
    }

    /// Decodes a vector, reusing `target`'s allocation.
    ///
    /// The element shape, including any vectors or options nested in it, is checked before
    /// anything is read.
    pub fn decode_vector<T: Value + Default>(&mut self, target: &mut Vec<T>) -> Result<(), Error> {
        T::default().check_shape()?;
        let len = self.reader.read_vector_len(&self.cfg.vector_len)?;
        self.nested(|d| {
            target.clear();
            target.reserve(len.min(d.reader.remaining() / MIN_VALUE_LEN));
            for _ in 0..len {
                let mut item = T::default();
                d.decode_value(&mut item)?;
                target.push(item);
            }
            Ok(())
        })
    }

    /// Decodes the fields of `target`.
    ///
    /// If `validate_code` is set, the type code is read first and must match
    /// [Object::type_code]. Registered types have already consumed their code and skip it.
    pub fn decode_object(
        &mut self,
        target: &mut dyn Object,
        validate_code: bool,
    ) -> Result<(), Error> {
        let header = if validate_code {
            Header::Unread
        } else {
            Header::Consumed(target.type_code())
        };
        if let Some(custom) = target.as_custom() {
            return custom.decode_custom(self, header);
        }

        if validate_code {
            let code = self
                .reader
                .read_type_code()
                .map_err(|err| Error::CrcRead(Box::new(err)))?;
            let want = target.type_code();
            if code != want {
                return Err(Error::CrcMismatch { got: code, want });
            }
        }

        self.nested(|d| d.decode_fields(target))
    }

    fn decode_fields(&mut self, target: &mut dyn Object) -> Result<(), Error> {
        let fields = target.fields();
        let bitset = if fields.iter().any(|field| field.flag.is_some()) {
            self.reader
                .read_u32()
                .map_err(|err| Error::BitsetRead(Box::new(err)))?
        } else {
            0
        };

        for (index, field) in fields.iter().enumerate() {
            let object = target.type_name();
            let slot = target
                .field_mut(index)
                .ok_or(Error::MissingField { object, index })?;
            let result = match field.flag {
                Some(flag) if !is_set(bitset, flag.bit) => {
                    slot.reset();
                    continue;
                }
                Some(flag) if flag.bitflag_valued => slot.set_flag(),
                _ => self.decode_value(slot),
            };
            result.map_err(|err| err.context(format!("decode field '{}'", field.name)))?;
        }
        Ok(())
    }

    /// Reads a type code and decodes the registered object it identifies.
    pub fn decode_registered(&mut self) -> Result<Box<dyn Object>, Error> {
        self.decode_registered_with(false)
    }

    /// Like [Decoder::decode_registered], but with `skip_known_check` an unknown type code is
    /// reported without capturing the unread bytes.
    pub fn decode_registered_with(
        &mut self,
        skip_known_check: bool,
    ) -> Result<Box<dyn Object>, Error> {
        let code = self
            .reader
            .read_type_code()
            .map_err(|err| Error::CrcRead(Box::new(err)))?;

        let Some(mut object) = self.registry.instantiate(code) else {
            debug!(
                code,
                remaining = self.reader.remaining(),
                "unknown type code"
            );
            let remainder = if skip_known_check {
                Default::default()
            } else {
                self.reader.peek_remaining()
            };
            return Err(Error::UnknownType { code, remainder });
        };
        trace!(
            code,
            name = object.type_name(),
            "decoding registered object"
        );

        if let Some(custom) = object.as_custom() {
            custom.decode_custom(self, Header::Consumed(code))?;
            return Ok(object);
        }

        if self.registry.is_enum(code) {
            return Ok(object);
        }

        let name = object.type_name();
        self.decode_object(object.as_mut(), false)
            .map_err(|err| err.context(format!("decode registered object {name}")))?;
        Ok(object)
    }

    fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> Result<R, Error>) -> Result<R, Error> {
        if self.depth >= self.cfg.max_depth {
            debug!(max_depth = self.cfg.max_depth, "max depth exceeded");
            return Err(Error::DepthExceeded(self.cfg.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
