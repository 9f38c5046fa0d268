use std::collections::HashMap;

/// Nested key-value structure delivered by the host platform when the game
/// is started through a deep link.
///
/// Mirrors the platform's intent/bundle shape: each entry holds either a flat
/// string or another nested container. A missing key at any level is the
/// normal "nothing delivered" state, so the accessors return `Option` rather
/// than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchEvent {
    entries: HashMap<String, LaunchEventValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LaunchEventValue {
    String(String),
    Nested(LaunchEvent),
}

impl LaunchEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_string(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), LaunchEventValue::String(value.to_string()));
    }

    pub fn insert_nested(&mut self, key: &str, value: LaunchEvent) {
        self.entries
            .insert(key.to_string(), LaunchEventValue::Nested(value));
    }

    /// The string stored under `key`, or `None` if the key is absent or holds
    /// a nested container.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(LaunchEventValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// The nested container stored under `key`, or `None` if the key is
    /// absent or holds a flat string.
    pub fn get_nested(&self, key: &str) -> Option<&LaunchEvent> {
        match self.entries.get(key) {
            Some(LaunchEventValue::Nested(value)) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_resolve_to_none() {
        let event = LaunchEvent::new();
        assert_eq!(event.get_string("payload"), None);
        assert!(event.get_nested("extras").is_none());
    }

    #[test]
    fn type_mismatches_resolve_to_none() {
        let mut event = LaunchEvent::new();
        event.insert_string("payload", "p1");
        event.insert_nested("extras", LaunchEvent::new());

        assert_eq!(event.get_nested("payload"), None);
        assert_eq!(event.get_string("extras"), None);
    }

    #[test]
    fn nested_lookup_returns_inner_container() {
        let mut inner = LaunchEvent::new();
        inner.insert_string("payload", "p1");
        let mut event = LaunchEvent::new();
        event.insert_nested("al_applink_data", inner);

        let nested = event.get_nested("al_applink_data").unwrap();
        assert_eq!(nested.get_string("payload"), Some("p1"));
    }
}
