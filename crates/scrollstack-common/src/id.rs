use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifies one stack controller instance in logs and events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackId(String);

impl StackId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight hex digits, enough to tell instances apart in a log line.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl Default for StackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn stack_id_short_is_hex_prefix() {
        let sid = StackId::new();
        assert_eq!(sid.short().len(), 8);
        assert!(sid.short().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(sid.as_str().starts_with(sid.short()));
    }

    #[test]
    fn stack_id_display() {
        let sid = StackId::new();
        assert_eq!(sid.to_string(), sid.as_str());
    }

    #[test]
    fn stack_id_equality() {
        let sid = StackId::default();
        assert_eq!(sid, sid.clone());
        assert_ne!(sid, StackId::new());
    }

    #[test]
    fn stack_id_serialization() {
        let sid = StackId::new();
        let json = serde_json::to_string(&sid).unwrap();
        let deserialized: StackId = serde_json::from_str(&json).unwrap();
        assert_eq!(sid, deserialized);
    }
}
