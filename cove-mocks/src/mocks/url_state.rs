//! URL state persistence for mock pages
//!
//! Control state travels in the query string as base64url-encoded JSON, which
//! keeps URLs opaque and avoids clashing with router parameters.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::warn;

/// Decode a state string from a URL query parameter into key-value pairs.
/// Malformed input yields no pairs.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let json_bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(b) => b,
        Err(e) => {
            warn!("Ignoring undecodable mock state: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_slice::<BTreeMap<String, String>>(&json_bytes) {
        Ok(map) => map.into_iter().collect(),
        Err(e) => {
            warn!("Ignoring malformed mock state: {e}");
            Vec::new()
        }
    }
}

/// Encode key-value pairs into a base64 state string for the URL.
pub fn encode_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects non-default control values and produces an encoded state string
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// `None` when every control is at its default, keeping the URL clean
    pub fn build(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(encode_state(&self.pairs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_produce_no_state() {
        let mut builder = StateBuilder::new();
        builder.set_bool("disabled", false, false);
        builder.set_string("size", "md", "md");
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn test_changed_values_survive_the_url() {
        let mut builder = StateBuilder::new();
        builder.set_bool("disabled", true, false);
        builder.set_string("color", "teal", "blue");
        let encoded = builder.build().unwrap();

        assert!(!encoded.contains('='));
        assert_eq!(
            parse_state(&encoded),
            vec![
                ("color".to_string(), "teal".to_string()),
                ("disabled".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_garbage_state_is_ignored() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("!!not-base64!!").is_empty());
        assert!(parse_state(&URL_SAFE_NO_PAD.encode(b"[1, 2]")).is_empty());
    }
}
