//! Immutable representations of admin API resources
//!
//! A representation is a value object with a fixed schema of named
//! properties. Only properties that were explicitly assigned are stored,
//! read back, and serialized, which keeps update payloads partial. An
//! assigned `null` is distinct from an unassigned property: it reads back
//! as `None` and is serialized as `null`, so a payload can clear a field.
//!
//! # Module Structure
//!
//! - [`collection`] - ordered collections of one representation kind
//! - [`realm`] - realm representation
//! - [`keys`] - realm keys metadata
//!
//! Concrete representations are declared with the [`representation!`]
//! macro, which generates typed getters, `with_*` mutators, the schema table
//! and the serde glue.
//!
//! # Example
//!
//! ```ignore
//! use kcadmin::representation::{Realm, Representation};
//!
//! let realm = Realm::new().with_realm("demo").with_enabled(true);
//! let renamed = realm.with_display_name("Demo");
//! assert!(realm.display_name().is_err());
//! assert_eq!(renamed.to_json(), r#"{"displayName":"Demo","enabled":true,"realm":"demo"}"#);
//!
//! let cleared = renamed.with("displayName", serde_json::Value::Null)?;
//! assert_eq!(cleared.display_name()?, None);
//! assert_eq!(cleared.to_json(), r#"{"displayName":null,"enabled":true,"realm":"demo"}"#);
//! ```

pub mod collection;
pub mod keys;
pub mod realm;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::Debug;

pub use collection::Collection;
pub use keys::{KeyMetadata, KeysMetadata};
pub use realm::Realm;

/// Semantic type of a declared property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Integer,
    Boolean,
    StringList,
    StringMap,
    /// Untyped JSON
    Json,
    /// Nested representation of the named kind
    Representation(&'static str),
    /// Collection of the named representation kind
    Collection(&'static str),
}

/// One entry of a representation's schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: &'static str,
    pub kind: PropertyType,
}

/// A Rust type that can back a representation property
pub trait PropertyValue: Sized + Clone + PartialEq + Debug {
    const TYPE: PropertyType;

    /// Encode as JSON
    fn to_value(&self) -> Value;

    /// Decode from JSON, failing if the value has the wrong shape
    fn from_value(value: Value) -> Result<Self>;
}

/// Describe a JSON value's shape for error messages
#[doc(hidden)]
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn mismatch(expected: &str, found: &Value) -> Error {
    Error::decode(format!("expected {}, found {}", expected, describe(found)))
}

impl PropertyValue for String {
    const TYPE: PropertyType = PropertyType::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("a string", &other)),
        }
    }
}

impl PropertyValue for i64 {
    const TYPE: PropertyType = PropertyType::Integer;

    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.as_i64().ok_or_else(|| mismatch("an integer", &value))
    }
}

impl PropertyValue for bool {
    const TYPE: PropertyType = PropertyType::Boolean;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("a boolean", &value))
    }
}

impl PropertyValue for Vec<String> {
    const TYPE: PropertyType = PropertyType::StringList;

    fn to_value(&self) -> Value {
        Value::Array(self.iter().cloned().map(Value::String).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(String::from_value).collect(),
            other => Err(mismatch("an array of strings", &other)),
        }
    }
}

impl PropertyValue for BTreeMap<String, String> {
    const TYPE: PropertyType = PropertyType::StringMap;

    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| String::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(mismatch("an object of strings", &other)),
        }
    }
}

impl PropertyValue for Value {
    const TYPE: PropertyType = PropertyType::Json;

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

/// Decode `value` for `property` of `kind`
///
/// `None` is an assigned `null`, for every property type.
#[doc(hidden)]
pub fn assign<T: PropertyValue>(kind: &'static str, property: &str, value: Value) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }

    T::from_value(value).map(Some).map_err(|err| match err {
        Error::Decode(message) => Error::decode(format!("{}.{}: {}", kind, property, message)),
        other => other,
    })
}

/// JSON of an assigned property, `null` included
#[doc(hidden)]
pub fn nullable_value<T: PropertyValue>(value: Option<&T>) -> Value {
    value.map_or(Value::Null, PropertyValue::to_value)
}

/// An immutable, schema-validated property bag
pub trait Representation:
    PropertyValue + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Kind name used in errors and schemas
    const KIND: &'static str;

    /// The declared properties, in declaration order
    fn schema() -> &'static [PropertyDef];

    /// Read a property as JSON
    fn get(&self, property: &str) -> Result<Value>;

    /// Copy of `self` with `property` set to `value`
    fn with(&self, property: &str, value: Value) -> Result<Self>;

    /// Names of assigned properties, in schema order
    fn assigned(&self) -> Vec<&'static str>;

    /// Assigned properties as a JSON object
    fn to_properties(&self) -> Map<String, Value>;

    /// Whether `property` is part of the schema
    fn declares(property: &str) -> bool {
        Self::schema().iter().any(|def| def.name == property)
    }

    /// Build from a name-to-value mapping, validating each entry in turn
    fn from_properties<I>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        properties
            .into_iter()
            .try_fold(Self::default(), |representation, (property, value)| {
                representation.with(&property, value)
            })
    }

    /// Build from a JSON object document
    fn from_json(json: &str) -> Result<Self> {
        let properties: Map<String, Value> = serde_json::from_str(json)?;
        Self::from_properties(properties)
    }

    /// Compact JSON of the assigned properties
    fn to_json(&self) -> String {
        Value::Object(self.to_properties()).to_string()
    }
}

/// Declare a representation struct
///
/// Each property line reads `getter / mutator: Type => "jsonName"`.
#[macro_export]
macro_rules! representation {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident / $with:ident : $ty:ty => $property:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $field: ::std::option::Option<::std::option::Option<$ty>>, )*
        }

        impl $name {
            /// Empty representation, nothing assigned
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$field_meta])*
                #[doc = concat!("`", $property, "`; `None` when assigned `null`")]
                pub fn $field(&self) -> $crate::error::Result<::std::option::Option<&$ty>> {
                    self.$field
                        .as_ref()
                        .map(::std::option::Option::as_ref)
                        .ok_or_else(|| $crate::error::Error::PropertyNotAssigned {
                            representation: stringify!($name),
                            property: $property.to_string(),
                        })
                }

                #[doc = concat!("Copy with `", $property, "` set")]
                pub fn $with(&self, value: impl ::std::convert::Into<$ty>) -> Self {
                    let mut next = self.clone();
                    next.$field = ::std::option::Option::Some(::std::option::Option::Some(value.into()));
                    next
                }
            )*
        }

        impl $crate::representation::Representation for $name {
            const KIND: &'static str = stringify!($name);

            fn schema() -> &'static [$crate::representation::PropertyDef] {
                const SCHEMA: &[$crate::representation::PropertyDef] = &[
                    $(
                        $crate::representation::PropertyDef {
                            name: $property,
                            kind: <$ty as $crate::representation::PropertyValue>::TYPE,
                        },
                    )*
                ];
                SCHEMA
            }

            fn get(&self, property: &str) -> $crate::error::Result<::serde_json::Value> {
                match property {
                    $(
                        $property => self
                            .$field()
                            .map($crate::representation::nullable_value::<$ty>),
                    )*
                    _ => ::std::result::Result::Err($crate::error::Error::PropertyDoesNotExist {
                        representation: stringify!($name),
                        property: property.to_string(),
                    }),
                }
            }

            fn with(
                &self,
                property: &str,
                value: ::serde_json::Value,
            ) -> $crate::error::Result<Self> {
                let mut next = self.clone();
                match property {
                    $(
                        $property => {
                            next.$field = ::std::option::Option::Some(
                                $crate::representation::assign::<$ty>(
                                    stringify!($name),
                                    property,
                                    value,
                                )?,
                            );
                        }
                    )*
                    _ => {
                        return ::std::result::Result::Err(
                            $crate::error::Error::PropertyDoesNotExist {
                                representation: stringify!($name),
                                property: property.to_string(),
                            },
                        );
                    }
                }
                ::std::result::Result::Ok(next)
            }

            fn assigned(&self) -> ::std::vec::Vec<&'static str> {
                let mut names = ::std::vec::Vec::new();
                $(
                    if self.$field.is_some() {
                        names.push($property);
                    }
                )*
                names
            }

            fn to_properties(&self) -> ::serde_json::Map<::std::string::String, ::serde_json::Value> {
                let mut properties = ::serde_json::Map::new();
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        properties.insert(
                            $property.to_string(),
                            $crate::representation::nullable_value(value.as_ref()),
                        );
                    }
                )*
                properties
            }
        }

        impl $crate::representation::PropertyValue for $name {
            const TYPE: $crate::representation::PropertyType =
                $crate::representation::PropertyType::Representation(stringify!($name));

            fn to_value(&self) -> ::serde_json::Value {
                ::serde_json::Value::Object(
                    <Self as $crate::representation::Representation>::to_properties(self),
                )
            }

            fn from_value(value: ::serde_json::Value) -> $crate::error::Result<Self> {
                match value {
                    ::serde_json::Value::Object(properties) => {
                        <Self as $crate::representation::Representation>::from_properties(properties)
                    }
                    other => ::std::result::Result::Err($crate::error::Error::Decode(format!(
                        "expected {} object, found {}",
                        stringify!($name),
                        $crate::representation::describe(&other),
                    ))),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                let properties = <Self as $crate::representation::Representation>::to_properties(self);
                ::serde::Serialize::serialize(&properties, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let properties = <::serde_json::Map<::std::string::String, ::serde_json::Value>
                    as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::representation::Representation>::from_properties(properties)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
