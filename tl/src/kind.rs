//! The closed set of shapes a decode target can declare.

use core::fmt;

/// Shape of a decode target, as reported by [crate::Value::kind].
///
/// Only the first group of variants can be read from the wire. The rest exist so that a schema
/// mistake (a `u16` field, a map, ...) is reported by name instead of silently misreading bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Double,
    Long,
    Uint,
    Int,
    Bool,
    String,
    Bytes,
    Vector,
    /// A nested object owned by its parent.
    Object,
    /// An object whose concrete type is taken from the type code in the stream.
    Polymorphic,
    /// A value with its own hand-written decoding.
    Custom,

    Uint8,
    Uint16,
    Uint64,
    Int8,
    Int16,
    Usize,
    Isize,
    Float,
    Char,
    Array,
    Map,
    Set,
}

impl Kind {
    /// Returns true if values of this kind can be decoded.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            Kind::Double
                | Kind::Long
                | Kind::Uint
                | Kind::Int
                | Kind::Bool
                | Kind::String
                | Kind::Bytes
                | Kind::Vector
                | Kind::Object
                | Kind::Polymorphic
                | Kind::Custom
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Double => f.write_str("f64"),
            Kind::Long => f.write_str("i64"),
            Kind::Uint => f.write_str("u32"),
            Kind::Int => f.write_str("i32"),
            Kind::Bool => f.write_str("bool"),
            Kind::String => f.write_str("string"),
            Kind::Bytes => f.write_str("bytes"),
            Kind::Vector => f.write_str("vector"),
            Kind::Object => f.write_str("object"),
            Kind::Polymorphic => f.write_str("polymorphic object"),
            Kind::Custom => f.write_str("custom"),
            Kind::Uint8 => f.write_str("u8 (use Bytes for byte strings, or convert to u32)"),
            Kind::Uint16 | Kind::Uint64 | Kind::Int8 | Kind::Int16 | Kind::Usize | Kind::Isize => {
                let name = match self {
                    Kind::Uint16 => "u16",
                    Kind::Uint64 => "u64",
                    Kind::Int8 => "i8",
                    Kind::Int16 => "i16",
                    Kind::Usize => "usize",
                    _ => "isize",
                };
                write!(f, "int kind {name} (must be converted to i32, i64 or u32 explicitly)")
            }
            Kind::Float => f.write_str("float kind f32 (must be converted to f64 explicitly)"),
            Kind::Char => f.write_str("char (use String)"),
            Kind::Array => f.write_str("array (must be Vec)"),
            Kind::Map => f.write_str("map (not an ordered object, declare an object instead)"),
            Kind::Set => f.write_str("set (not an ordered object, use Vec)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_kinds() {
        assert!(Kind::Vector.is_supported());
        assert!(Kind::Polymorphic.is_supported());
        assert!(!Kind::Uint16.is_supported());
        assert!(!Kind::Map.is_supported());
    }

    #[test]
    fn test_display_names_kind() {
        assert_eq!(
            Kind::Int16.to_string(),
            "int kind i16 (must be converted to i32, i64 or u32 explicitly)"
        );
        assert_eq!(Kind::Uint.to_string(), "u32");
    }
}
