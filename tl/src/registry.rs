//! Mapping from type codes to the shapes they identify.
//!
//! A [Registry] is assembled once with a [RegistryBuilder] and is immutable afterwards. It is
//! `Send + Sync`, so a single instance can back concurrent decodes on any number of threads.
//!
//! # Example
//!
//! ```
//! use commonware_tl::{object, Registry};
//!
//! object! {
//!     pub struct PeerUser = 0x59511722 {
//!         pub user_id: i64,
//!     }
//! }
//!
//! object! {
//!     pub struct PeerEmpty = 0x7f3b18ea {}
//! }
//!
//! let registry = Registry::builder()
//!     .register::<PeerUser>()
//!     .unwrap()
//!     .register_enum::<PeerEmpty>()
//!     .unwrap()
//!     .build();
//! assert!(registry.contains(0x59511722));
//! assert!(registry.is_enum(0x7f3b18ea));
//! ```

use crate::{Constructor, Error, Object};
use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
};

/// Registered shape.
#[derive(Clone, Copy)]
struct Entry {
    name: &'static str,
    type_id: TypeId,
    make: fn() -> Box<dyn Object>,
}

fn make<T: Constructor>() -> Box<dyn Object> {
    Box::<T>::default()
}

/// Read-only table of registered shapes.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<u32, Entry>,
    enums: HashSet<u32>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns true if `code` identifies a registered shape.
    pub fn contains(&self, code: u32) -> bool {
        self.entries.contains_key(&code)
    }

    /// Returns true if `code` identifies a shape fully described by its type code.
    pub fn is_enum(&self, code: u32) -> bool {
        self.enums.contains(&code)
    }

    /// Name of the shape registered for `code`.
    pub fn name(&self, code: u32) -> Option<&'static str> {
        self.entries.get(&code).map(|entry| entry.name)
    }

    /// Creates the zero value of the shape registered for `code`.
    pub fn instantiate(&self, code: u32) -> Option<Box<dyn Object>> {
        self.entries.get(&code).map(|entry| (entry.make)())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects shapes for a [Registry].
#[derive(Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Registers `T` under [Constructor::TYPE_CODE].
    ///
    /// Fails if another shape already uses the same code. Registering `T` twice is allowed.
    pub fn register<T: Constructor>(mut self) -> Result<Self, Error> {
        self.insert::<T>()?;
        Ok(self)
    }

    /// Registers `T` as an enum-like variant: decoding its type code yields `T::default()`
    /// without reading any fields.
    pub fn register_enum<T: Constructor>(mut self) -> Result<Self, Error> {
        self.insert::<T>()?;
        self.registry.enums.insert(T::TYPE_CODE);
        Ok(self)
    }

    fn insert<T: Constructor>(&mut self) -> Result<(), Error> {
        let duplicate = T::default().type_name();
        let entry = Entry {
            name: duplicate,
            type_id: TypeId::of::<T>(),
            make: make::<T>,
        };
        if let Some(existing) = self.registry.entries.get(&T::TYPE_CODE) {
            if existing.type_id == entry.type_id {
                return Ok(());
            }
            return Err(Error::DuplicateTypeCode {
                code: T::TYPE_CODE,
                existing: existing.name,
                duplicate,
            });
        }
        self.registry.entries.insert(T::TYPE_CODE, entry);
        Ok(())
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::*;

    crate::object! {
        struct Impostor = 0x2b8a5c1e {
            value: i32,
        }
    }

    #[test]
    fn test_instantiate() {
        let registry = registry();
        let object = registry.instantiate(Point::TYPE_CODE).unwrap();
        assert!(object.is::<Point>());
        assert_eq!(registry.name(Point::TYPE_CODE), Some("Point"));
        assert!(registry.instantiate(0).is_none());
        assert!(registry.is_enum(Empty::TYPE_CODE));
        assert!(!registry.is_enum(Point::TYPE_CODE));
    }

    #[test]
    fn test_duplicate_code() {
        assert_eq!(Impostor::TYPE_CODE, Point::TYPE_CODE);
        let result = Registry::builder()
            .register::<Point>()
            .unwrap()
            .register::<Impostor>();
        assert!(matches!(
            result,
            Err(Error::DuplicateTypeCode {
                existing: "Point",
                duplicate: "Impostor",
                ..
            })
        ));
    }

    #[test]
    fn test_register_twice() {
        let registry = Registry::builder()
            .register::<Point>()
            .unwrap()
            .register::<Point>()
            .unwrap()
            .build();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
