use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field key → human-readable message. An absent key or an empty message
/// both mean the field has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<String, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(key, message);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn has_error(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes one entry, leaving every other field untouched.
    pub fn clear_field(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(String::is_empty)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Entries that carry a message, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }

    /// Builds a map from the `errors` object of a server response. String
    /// messages are kept verbatim; any other JSON value keeps its JSON text.
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let entries = object
            .iter()
            .map(|(key, value)| {
                let message = match value {
                    serde_json::Value::String(text) => text.clone(),
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), message)
            })
            .collect();
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, message)| (key.into(), message.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorMap;

    #[test]
    fn empty_message_counts_as_no_error() {
        let map = ErrorMap::new().with("name", "");
        assert!(map.is_empty());
        assert_eq!(map.get("name"), None);
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn clear_field_keeps_other_entries() {
        let mut map = ErrorMap::new()
            .with("name", "Name is required")
            .with("email", "Valid email is required");

        assert!(map.clear_field("name"));
        assert!(!map.clear_field("name"));
        assert_eq!(map.get("email"), Some("Valid email is required"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn from_json_object_keeps_unknown_keys_verbatim() {
        let body = serde_json::json!({
            "email": "taken",
            "date_of_birth": "Invalid date format. Use YYYY-MM-DD",
            "count": 3,
        });
        let map = ErrorMap::from_json_object(body.as_object().expect("object"));

        assert_eq!(map.get("email"), Some("taken"));
        assert_eq!(map.get("date_of_birth"), Some("Invalid date format. Use YYYY-MM-DD"));
        assert_eq!(map.get("count"), Some("3"));
    }
}
