//! Cache Key Derivation Module
//!
//! Builds deterministic cache keys from a base name and an optional set of
//! request parameters.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

// == Generate Key ==
/// Derives a deterministic cache key from `base` and optional parameters.
///
/// Parameter names are canonicalized by sorting lexicographically before
/// serialization, so two calls with the same parameters in different
/// insertion order always produce the same key. Without parameters the key
/// is exactly `base`.
pub fn generate_key(base: &str, params: Option<&Map<String, Value>>) -> String {
    match params {
        None => base.to_string(),
        Some(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            let serialized = serde_json::to_string(&sorted)
                .expect("JSON values always serialize");
            format!("{}:{}", base, serialized)
        }
    }
}
