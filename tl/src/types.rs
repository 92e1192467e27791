//! [crate::Value] implementations for Rust types.
//!
//! | Rust type                       | Wire shape                              |
//! |---------------------------------|-----------------------------------------|
//! | `f64`, `i64`, `u32`, `i32`      | fixed-width little-endian               |
//! | `bool`                          | `boolTrue` / `boolFalse` constructor    |
//! | `String`, `Bytes`               | padded byte string                      |
//! | `Vec<T>`                        | `vector` constructor, count, elements   |
//! | `Option<T>`, `Box<T>`           | the inner value (allocated on demand)   |
//! | [AnyObject]                     | any registered object                   |
//!
//! Every other primitive and std collection decodes to [crate::Error::UnsupportedShape].

pub mod any;
pub mod bytes;
pub mod pointer;
pub mod primitives;
pub mod unsupported;
pub mod vec;

pub use any::AnyObject;
