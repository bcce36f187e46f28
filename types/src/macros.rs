/*++

Licensed under the Apache-2.0 license.

File Name:

    macros.rs

Abstract:

    Macros used by the project

--*/

/// Declares a C-like enum with an explicit catch-all variant, plus lossless
/// conversions to and from its backing integer type and a `Display` impl
/// printing the variant name.
#[macro_export]
macro_rules! gbafe_enum {
    (
        $(#[$($enum_attrs:tt)*])*
        $vis:vis $enum_name:ident;
        $type:ty;
        {
            $(
                $(#[$($attrs:tt)*])*
                $name:ident = $value:literal,
            )*
        };
        $invalid:ident
    ) => {
        $(#[$($enum_attrs)*])*
        $vis enum $enum_name {
            $(
                $(#[$($attrs)*])*
                $name = $value,
            )*
            $invalid
        }

        impl $enum_name {
            /// All valid variants, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$name,)*];

            /// Backing value, or `None` for the catch-all variant.
            pub const fn value(self) -> Option<$type> {
                match self {
                    $($enum_name::$name => Some($value),)*
                    $enum_name::$invalid => None,
                }
            }
        }

        impl From<$type> for $enum_name {
            fn from(val: $type) -> $enum_name {
                match val {
                    $($value => $enum_name::$name,)*
                    _ => $enum_name::$invalid,
                }
            }
        }

        impl core::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self {
                    $($enum_name::$name => write!(f, stringify!($name)),)*
                    _ => write!(f, stringify!($invalid)),
                }
            }
        }
    };
}
