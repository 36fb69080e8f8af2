// 🧩 Declaration macros for enums and records
// One declaration per type; the struct, its serde mapping and its schema
// table are all generated from it so they cannot drift apart.

/// Declares a closed set of uppercase wire tokens.
///
/// Values outside the set decode into `Unrecognized(raw)` instead of failing;
/// schema validation is where they get rejected.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident = $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $variant, )+
            /// A value outside the documented set, kept verbatim
            Unrecognized(String),
        }

        impl $name {
            /// Every documented wire value, in declaration order
            pub const VALUES: &'static [&'static str] = &[$( $wire ),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $wire => $name::$variant, )+
                    _ => $name::Unrecognized(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                $name::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Unrecognized(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declares a typed record.
///
/// Each field line reads `"wire_key" => field: RustType = FieldKind`. Fields
/// listed under `required { .. }` are plain values taken by `new`; all other
/// fields are `Nullable` and default to omitted.
macro_rules! typed_record {
    (@schema $name:ident;
        $( $rwire:literal => $rkind:expr, )*;
        $( $wire:literal => $kind:expr, )*
    ) => {
        impl $name {
            pub fn schema() -> &'static $crate::fields::RecordSchema {
                static SCHEMA: $crate::fields::RecordSchema = $crate::fields::RecordSchema {
                    name: stringify!($name),
                    fields: &[
                        $( $crate::fields::FieldDef { name: $rwire, kind: $rkind, required: true }, )*
                        $( $crate::fields::FieldDef { name: $wire, kind: $kind, required: false }, )*
                    ],
                };
                &SCHEMA
            }
        }

        impl $crate::record::TypedRecord for $name {
            fn schema() -> &'static $crate::fields::RecordSchema {
                $name::schema()
            }

            fn additional_properties(&self) -> &::serde_json::Map<String, ::serde_json::Value> {
                &self.additional_properties
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            required {
                $( $(#[$rmeta:meta])* $rwire:literal => $rfield:ident : $rty:ty = $rkind:expr, )+
            }
            $( $(#[$fmeta:meta])* $wire:literal => $field:ident : $ty:ty = $kind:expr, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$rmeta])*
                #[serde(rename = $rwire)]
                pub $rfield: $rty,
            )+
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "crate::nullable::Nullable::is_omitted")]
                pub $field: $crate::nullable::Nullable<$ty>,
            )*
            /// Keys the API sent that this record does not model
            #[serde(flatten)]
            pub additional_properties: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl $name {
            pub fn new($( $rfield: $rty ),+) -> Self {
                $name {
                    $( $rfield, )+
                    $( $field: $crate::nullable::Nullable::Omitted, )*
                    additional_properties: ::serde_json::Map::new(),
                }
            }
        }

        typed_record!(@schema $name; $( $rwire => $rkind, )+; $( $wire => $kind, )*);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $wire:literal => $field:ident : $ty:ty = $kind:expr, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "crate::nullable::Nullable::is_omitted")]
                pub $field: $crate::nullable::Nullable<$ty>,
            )*
            /// Keys the API sent that this record does not model
            #[serde(flatten)]
            pub additional_properties: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        typed_record!(@schema $name; ; $( $wire => $kind, )*);
    };
}
