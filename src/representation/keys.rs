//! Realm keys metadata, as returned by `/admin/realms/{realm}/keys`

use super::Collection;
use std::collections::BTreeMap;

crate::representation! {
    /// One key of a realm's key providers
    pub struct KeyMetadata {
        provider_id / with_provider_id: String => "providerId",
        provider_priority / with_provider_priority: i64 => "providerPriority",
        kid / with_kid: String => "kid",
        /// `ACTIVE`, `PASSIVE` or `DISABLED`
        status / with_status: String => "status",
        /// Key type, e.g. `RSA`, `OCT`
        key_type / with_key_type: String => "type",
        algorithm / with_algorithm: String => "algorithm",
        public_key / with_public_key: String => "publicKey",
        certificate / with_certificate: String => "certificate",
        /// `SIG` or `ENC`
        key_use / with_key_use: String => "use",
        valid_to / with_valid_to: i64 => "validTo",
    }
}

crate::representation! {
    /// Keys of a realm plus the active key id per algorithm
    pub struct KeysMetadata {
        active / with_active: BTreeMap<String, String> => "active",
        keys / with_keys: Collection<KeyMetadata> => "keys",
    }
}

impl KeysMetadata {
    /// Metadata of the active key for `algorithm`, if any
    pub fn active_key(&self, algorithm: &str) -> Option<&KeyMetadata> {
        let kid = self.active.as_ref().and_then(Option::as_ref)?.get(algorithm)?;
        self.keys
            .as_ref()
            .and_then(Option::as_ref)?
            .iter()
            .find(|key| matches!(key.kid(), Ok(Some(k)) if k == kid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::{PropertyType, Representation};
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "active": {"RS256": "kid-rsa", "HS512": "kid-hmac"},
            "keys": [
                {"providerId": "p1", "providerPriority": 100, "kid": "kid-rsa", "status": "ACTIVE",
                 "type": "RSA", "algorithm": "RS256", "publicKey": "MIIB", "use": "SIG"},
                {"providerId": "p2", "providerPriority": 100, "kid": "kid-hmac", "status": "ACTIVE",
                 "type": "OCT", "algorithm": "HS512", "use": "SIG"}
            ]
        })
    }

    #[test]
    fn test_nested_collection_decodes() {
        let keys: KeysMetadata = serde_json::from_value(sample()).unwrap();

        assert_eq!(keys.keys().unwrap().unwrap().count(), 2);
        assert_eq!(keys.active().unwrap().unwrap().get("RS256").unwrap(), "kid-rsa");
        assert_eq!(
            keys.active_key("HS512").unwrap().key_type().unwrap().unwrap(),
            "OCT"
        );
        assert!(keys.active_key("ES256").is_none());
    }

    #[test]
    fn test_round_trip_keeps_nested_partial_properties() {
        let keys: KeysMetadata = serde_json::from_value(sample()).unwrap();
        let encoded = serde_json::to_string(&keys).unwrap();

        assert_eq!(KeysMetadata::from_json(&encoded).unwrap(), keys);
        // certificate was never assigned on either key
        assert!(!encoded.contains("certificate"));
    }

    #[test]
    fn test_schema_types_for_nested_values() {
        let kinds: Vec<_> = KeysMetadata::schema().iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PropertyType::StringMap,
                PropertyType::Collection("KeyMetadata")
            ]
        );
    }
}
