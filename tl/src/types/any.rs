//! Polymorphic fields.

use crate::{Decoder, Error, Kind, Object, Value};

/// A field that holds any registered object.
///
/// The concrete type is chosen by the type code found in the stream and looked up in the
/// [crate::Registry]. Decoding always replaces the held object.
#[derive(Debug, Default)]
pub struct AnyObject(Option<Box<dyn Object>>);

impl AnyObject {
    pub fn new(object: Box<dyn Object>) -> Self {
        Self(Some(object))
    }

    pub fn get(&self) -> Option<&(dyn Object + 'static)> {
        self.0.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut (dyn Object + 'static)> {
        self.0.as_deref_mut()
    }

    /// The type code of the held object.
    pub fn type_code(&self) -> Option<u32> {
        self.get().map(|object| object.type_code())
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.get()?.downcast_ref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn into_inner(self) -> Option<Box<dyn Object>> {
        self.0
    }
}

impl From<Box<dyn Object>> for AnyObject {
    fn from(object: Box<dyn Object>) -> Self {
        Self::new(object)
    }
}

impl Value for AnyObject {
    #[inline]
    fn kind(&self) -> Kind {
        Kind::Polymorphic
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        let object = decoder
            .decode_registered()
            .map_err(|err| err.context("decode interface"))?;
        self.0 = Some(object);
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        self.0 = None;
    }
}
