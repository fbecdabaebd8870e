use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::normalize::normalize_key;

/// Normalized comparison key for a skill (collapsed whitespace, lowercase).
///
/// Two skills are the same entry iff their keys are equal. The key is never
/// shown to users; display always uses the canonical catalog spelling.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillKey(pub String);

impl SkillKey {
    pub fn of(skill: &str) -> Self {
        SkillKey(normalize_key(skill))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SkillKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_normalized() {
        assert_eq!(SkillKey::of("  Data   Analysis "), SkillKey("data analysis".into()));
        assert!(SkillKey::of(" \t ").is_empty());
    }

    #[test]
    fn key_serializes_as_plain_string() {
        let key = SkillKey::of("Word Problems");
        let serialized = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized, "\"word problems\"");
        let parsed: SkillKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, key);
    }
}
