//! Ordered collections of representations

use super::{describe, PropertyType, PropertyValue, Representation};
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An ordered sequence of one representation kind
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R> {
    items: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: Representation> Collection<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self { items }
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&R> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<R> {
        self.items
    }

    /// Decode a JSON array, each element on its own
    pub fn from_array(items: Vec<Value>) -> Result<Self> {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                R::from_value(item).map_err(|err| match err {
                    Error::Decode(message) => {
                        Error::decode(format!("{}[{}]: {}", R::KIND, index, message))
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl<R: Representation> PropertyValue for Collection<R> {
    const TYPE: PropertyType = PropertyType::Collection(R::KIND);

    fn to_value(&self) -> Value {
        Value::Array(self.items.iter().map(PropertyValue::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Self::from_array(items),
            other => Err(Error::decode(format!(
                "expected an array of {}, found {}",
                R::KIND,
                describe(&other)
            ))),
        }
    }
}

impl<R: Representation> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for Collection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<R: Representation> Serialize for Collection<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, R: Representation> Deserialize<'de> for Collection<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<R>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::Realm;
    use serde_json::json;

    #[test]
    fn test_from_array_decodes_each_element() {
        let realms: Collection<Realm> =
            Collection::from_value(json!([{"realm": "master"}, {"realm": "test", "enabled": true}]))
                .unwrap();

        assert_eq!(realms.count(), 2);
        assert_eq!(realms.get(1).unwrap().realm().unwrap().unwrap(), "test");
        assert_eq!(
            realms.iter().map(|r| r.realm().unwrap().unwrap().as_str()).collect::<Vec<_>>(),
            vec!["master", "test"]
        );
    }

    #[test]
    fn test_from_value_reports_bad_element_index() {
        let err = Collection::<Realm>::from_value(json!([{"realm": "a"}, {"enabled": "no"}]))
            .unwrap_err();
        assert!(err.to_string().contains("Realm[1]"), "{}", err);
    }

    #[test]
    fn test_unknown_property_in_element_keeps_schema_error() {
        let err = Collection::<Realm>::from_value(json!([{"bogus": 1}])).unwrap_err();
        assert!(matches!(err, Error::PropertyDoesNotExist { .. }));
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = Collection::<Realm>::from_value(json!({"realm": "a"})).unwrap_err();
        assert!(err.is_decode());
    }
}
