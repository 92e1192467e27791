//! Declaration of schema objects.

/// Declares a struct as a TL object.
///
/// Generates the struct (deriving `Debug` and `Default`) along with its [crate::Object],
/// [crate::Constructor] and [crate::Value] implementations. Fields are decoded in declaration
/// order. A field marked `#[flag(N)]` is only read when bit `N` of the object's bitset is set,
/// and a `bool` field marked `#[bitflag(N)]` is `true` exactly when bit `N` is set.
///
/// ```
/// use commonware_tl::{object, Object};
///
/// object! {
///     #[derive(Clone, PartialEq)]
///     pub struct MessageEntity = 0x76a6d327 {
///         #[bitflag(1)]
///         pub bold: bool,
///         #[flag(0)]
///         pub url: Option<String>,
///         pub offset: i32,
///         pub length: i32,
///     }
/// }
///
/// let entity = MessageEntity::default();
/// assert_eq!(entity.type_name(), "MessageEntity");
/// assert_eq!(entity.fields()[1].name, "url");
/// ```
#[macro_export]
macro_rules! object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $code:literal {
            $(
                $(#[$flag:ident($bit:literal)])?
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        $vis struct $name {
            $($field_vis $field: $ty,)*
        }

        impl $crate::Constructor for $name {
            const TYPE_CODE: u32 = $code;
        }

        impl $crate::Object for $name {
            fn type_code(&self) -> u32 {
                <Self as $crate::Constructor>::TYPE_CODE
            }

            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn fields(&self) -> &'static [$crate::Field] {
                const FIELDS: &[$crate::Field] = &[
                    $($crate::__field!(stringify!($field) $(, $flag, $bit)?),)*
                ];
                FIELDS
            }

            #[allow(clippy::match_single_binding)]
            fn field_mut(&mut self, index: usize) -> Option<&mut dyn $crate::Value> {
                #[allow(dead_code, non_camel_case_types)]
                enum Index {
                    $($field,)*
                }
                match index {
                    $(i if i == Index::$field as usize => Some(&mut self.$field),)*
                    _ => None,
                }
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::core::any::Any> {
                self
            }
        }

        impl $crate::Value for $name {
            fn kind(&self) -> $crate::Kind {
                $crate::Kind::Object
            }

            fn decode(&mut self, decoder: &mut $crate::Decoder<'_>) -> Result<(), $crate::Error> {
                decoder.decode_object(self, true)
            }

            fn reset(&mut self) {
                *self = Self::default();
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field {
    ($name:expr) => {
        $crate::Field::required($name)
    };
    ($name:expr, flag, $bit:literal) => {
        $crate::Field::optional($name, $bit)
    };
    ($name:expr, bitflag, $bit:literal) => {
        $crate::Field::bitflag($name, $bit)
    };
}
