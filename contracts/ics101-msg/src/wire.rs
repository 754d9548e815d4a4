//! Declaration macros shared by every message record.
//!
//! Records are declared through [`wire_record!`], enums through [`wire_enum!`]
//! and tagged unions through [`wire_union!`]. Both serde halves are derived;
//! the macros add the wire-name tables and the [`CheckExtra`] walk that keeps
//! an open record from writing a declared key twice.

use std::collections::BTreeMap;

use cosmwasm_std::Binary;
use serde_json::Value;

use crate::error::CodecError;

/// Keys present on the wire that the schema does not declare.
pub type Extra = BTreeMap<String, Value>;

/// `path.key`, or `key` at the root.
pub(crate) fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Rejects records whose `extra` map repeats one of their declared wire
/// names, anywhere inside a message.
pub trait CheckExtra {
    fn check_extra(&self, path: &str) -> Result<(), CodecError>;
}

macro_rules! closed_leaf {
    ($($ty:ty),*) => {
        $(
            impl CheckExtra for $ty {
                fn check_extra(&self, _path: &str) -> Result<(), CodecError> {
                    Ok(())
                }
            }
        )*
    };
}

closed_leaf!(String, u32, u64, Binary);

impl<T: CheckExtra> CheckExtra for Vec<T> {
    fn check_extra(&self, path: &str) -> Result<(), CodecError> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.check_extra(&format!("{path}[{i}]")))
    }
}

impl<T: CheckExtra> CheckExtra for Option<T> {
    fn check_extra(&self, path: &str) -> Result<(), CodecError> {
        match self {
            Some(inner) => inner.check_extra(path),
            None => Ok(()),
        }
    }
}

pub(crate) fn check_record_extra(
    extra: &Extra,
    fields: &[&str],
    path: &str,
) -> Result<(), CodecError> {
    match extra.keys().find(|key| fields.contains(&key.as_str())) {
        Some(key) => Err(CodecError::violation(
            child(path, key),
            "undeclared-field map repeats a declared field",
        )),
        None => Ok(()),
    }
}

/// Declares an open record: the listed fields under their wire names plus an
/// `extra` map for undeclared keys.
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $wire:literal => $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
            Clone,
            Debug,
            PartialEq,
        )]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire)]
                pub $field: $ty,
            )*
            /// Undeclared keys, kept on decode and written back on encode.
            #[serde(flatten)]
            pub extra: $crate::wire::Extra,
        }

        impl $name {
            /// Wire names of the declared fields.
            pub const FIELDS: &'static [&'static str] = &[$($wire),*];
        }

        impl $crate::wire::CheckExtra for $name {
            fn check_extra(&self, path: &str) -> Result<(), $crate::error::CodecError> {
                $crate::wire::check_record_extra(&self.extra, Self::FIELDS, path)?;
                $(
                    $crate::wire::CheckExtra::check_extra(
                        &self.$field,
                        &$crate::wire::child(path, $wire),
                    )?;
                )*
                Ok(())
            }
        }
    };
}

/// Declares a closed string enum with explicit wire spellings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[::cosmwasm_schema::cw_serde]
        #[derive(Copy, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $name {
            pub const MEMBERS: &'static [&'static str] = &[$($wire),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::wire::CheckExtra for $name {
            fn check_extra(&self, _path: &str) -> Result<(), $crate::error::CodecError> {
                Ok(())
            }
        }
    };
}

/// Declares an externally tagged union: one payload record per tag.
macro_rules! wire_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $tag:ident($payload:ty),
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
            Clone,
            Debug,
            PartialEq,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $tag($payload),
            )*
        }

        impl $name {
            pub const TAGS: &'static [&'static str] = &[$(stringify!($tag)),*];

            pub fn tag(&self) -> &'static str {
                match self {
                    $( $name::$tag(_) => stringify!($tag), )*
                }
            }
        }

        impl $crate::wire::CheckExtra for $name {
            fn check_extra(&self, path: &str) -> Result<(), $crate::error::CodecError> {
                match self {
                    $(
                        $name::$tag(payload) => $crate::wire::CheckExtra::check_extra(
                            payload,
                            &$crate::wire::child(path, stringify!($tag)),
                        ),
                    )*
                }
            }
        }
    };
}

pub(crate) use wire_enum;
pub(crate) use wire_record;
pub(crate) use wire_union;
