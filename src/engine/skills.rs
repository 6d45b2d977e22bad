//! Normalized skill set representation

use crate::error::{ReadinessError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An ordered collection of normalized skill names.
///
/// Every entry is trimmed, lowercased, and non-empty; entries are unique and
/// keep their first-seen order so downstream iteration is deterministic.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    /// Build a skill set from raw skill names.
    ///
    /// Trims whitespace, case-folds, drops empty strings, and deduplicates
    /// while preserving first-seen order.
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for entry in raw {
            let normalized = entry.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            if seen.insert(normalized.clone()) {
                skills.push(normalized);
            }
        }

        Self { skills }
    }

    /// Build a skill set from an untyped JSON value.
    ///
    /// This is the boundary check against malformed upstream data: the value
    /// must be an array of strings.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let array = value.as_array().ok_or_else(|| {
            ReadinessError::Validation(format!("expected an array of skill names, got {}", value))
        })?;

        let mut raw = Vec::with_capacity(array.len());
        for item in array {
            let skill = item.as_str().ok_or_else(|| {
                ReadinessError::Validation(format!("skill entries must be strings, got {}", item))
            })?;
            raw.push(skill);
        }

        Ok(Self::normalize(raw))
    }

    /// Parse a comma-separated skill list, e.g. from manual CLI entry.
    pub fn from_comma_separated(list: &str) -> Self {
        Self::normalize(list.split(','))
    }

    pub fn contains(&self, skill: &str) -> bool {
        let normalized = skill.trim().to_lowercase();
        self.skills.iter().any(|s| *s == normalized)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills present in both sets, in `self`'s order.
    pub fn intersection(&self, other: &SkillSet) -> Vec<String> {
        self.skills
            .iter()
            .filter(|s| other.contains(s))
            .cloned()
            .collect()
    }

    /// Skills in `self` absent from `other`, in `self`'s order.
    pub fn difference(&self, other: &SkillSet) -> Vec<String> {
        self.skills
            .iter()
            .filter(|s| !other.contains(s))
            .cloned()
            .collect()
    }
}

// Deserialized sets are re-normalized so the invariant holds even for
// hand-edited role or catalog files.
impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(SkillSet::normalize(raw))
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.skills.join(", "))
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::normalize(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalization_trims_and_folds_case() {
        let set = SkillSet::normalize(["  Python ", "SQL", "docker"]);
        assert_eq!(set.as_slice(), &["python", "sql", "docker"]);
    }

    #[test]
    fn test_deduplication_preserves_first_seen_order() {
        let set = SkillSet::normalize(["React", "python", "react", "PYTHON", "go"]);
        assert_eq!(set.as_slice(), &["react", "python", "go"]);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let set = SkillSet::normalize(["", "  ", "rust"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("rust"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = SkillSet::normalize([" Python", "SQL ", "sql", "Docker"]);
        let twice = SkillSet::normalize(once.iter());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_from_json_accepts_string_arrays() {
        let set = SkillSet::from_json(&json!(["Python", "SQL"])).unwrap();
        assert_eq!(set.as_slice(), &["python", "sql"]);
    }

    #[test]
    fn test_from_json_rejects_non_arrays() {
        let err = SkillSet::from_json(&json!("python")).unwrap_err();
        assert!(matches!(err, ReadinessError::Validation(_)));
    }

    #[test]
    fn test_from_json_rejects_non_string_entries() {
        let err = SkillSet::from_json(&json!(["python", 42])).unwrap_err();
        assert!(matches!(err, ReadinessError::Validation(_)));
    }

    #[test]
    fn test_comma_separated_parsing() {
        let set = SkillSet::from_comma_separated("Python, SQL , docker,,");
        assert_eq!(set.as_slice(), &["python", "sql", "docker"]);
    }

    #[test]
    fn test_deserialize_renormalizes() {
        let set: SkillSet = serde_json::from_str(r#"["  Rust ", "rust", "Go"]"#).unwrap();
        assert_eq!(set.as_slice(), &["rust", "go"]);
    }

    #[test]
    fn test_intersection_and_difference_keep_self_order() {
        let required = SkillSet::normalize(["python", "sql", "docker"]);
        let user = SkillSet::normalize(["docker", "python"]);
        assert_eq!(required.intersection(&user), vec!["python", "docker"]);
        assert_eq!(required.difference(&user), vec!["sql"]);
    }
}
