//! Pluggable skill extraction from resume text
//!
//! Replaces the placeholder "assume the user has 60% of the required
//! skills" simulation with a real keyword scan of the supplied text.

use crate::engine::role::RoleProfile;
use crate::engine::skills::SkillSet;
use crate::error::{ReadinessError, Result};
use aho_corasick::AhoCorasick;
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

/// A collaborator that turns free text into a skill set.
pub trait SkillExtractor {
    fn extract(&self, text: &str) -> Result<SkillSet>;
}

/// Keyword-based extractor: exact (word-bounded, case-insensitive) matches
/// against a skill vocabulary, plus a fuzzy pass for near-miss spellings.
pub struct KeywordExtractor {
    matcher: AhoCorasick,
    vocabulary: Vec<String>,
    fuzzy_threshold: f64,
}

impl KeywordExtractor {
    /// Build an extractor over the default vocabulary.
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(Vec::new())
    }

    /// Build an extractor over the default vocabulary plus extra skills.
    pub fn with_vocabulary(additional_skills: Vec<String>) -> Result<Self> {
        let mut vocabulary = Self::default_vocabulary();
        vocabulary.extend(
            additional_skills
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        vocabulary.sort();
        vocabulary.dedup();

        // Longest-first so multi-word skills win over their prefixes.
        vocabulary.sort_by(|a, b| b.len().cmp(&a.len()));

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&vocabulary)
            .map_err(|e| {
                ReadinessError::Validation(format!("failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            matcher,
            vocabulary,
            fuzzy_threshold: 0.92,
        })
    }

    /// Build an extractor whose vocabulary includes a role's required and
    /// preferred skills, so role-specific terms are always recognizable.
    pub fn for_role(role: &RoleProfile) -> Result<Self> {
        let mut extra: Vec<String> = role
            .required_skills
            .iter()
            .map(|s| s.to_string())
            .collect();
        extra.extend(role.preferred_skills.iter().map(|s| s.to_string()));
        Self::with_vocabulary(extra)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn exact_matches(&self, text: &str) -> Vec<String> {
        let bytes = text.as_bytes();
        let mut found = Vec::new();

        for mat in self.matcher.find_iter(text) {
            // A hit inside a larger word is not a skill mention ("java" in
            // "javascript").
            if !Self::word_bounded(bytes, mat.start(), mat.end()) {
                continue;
            }
            found.push(self.vocabulary[mat.pattern().as_usize()].clone());
        }

        found
    }

    fn word_bounded(bytes: &[u8], start: usize, end: usize) -> bool {
        let before_ok = start == 0 || !Self::is_word_byte(bytes[start - 1]);
        let after_ok = end >= bytes.len() || !Self::is_word_byte(bytes[end]);
        before_ok && after_ok
    }

    fn is_word_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'+' || b == b'#'
    }

    /// Catch close misspellings ("pyton", "dokcer") of single-word skills.
    ///
    /// Unicode word segmentation strips surrounding punctuation, so
    /// "Dokcer," compares as "dokcer".
    fn fuzzy_matches(&self, text: &str, already_found: &SkillSet) -> Vec<String> {
        let mut found = Vec::new();

        for word in text.unicode_words() {
            let normalized = word.to_lowercase();
            if normalized.len() < 4 {
                continue;
            }

            for skill in &self.vocabulary {
                if skill.contains(' ') || already_found.contains(skill) {
                    continue;
                }
                if normalized == *skill {
                    continue;
                }
                if jaro_winkler(&normalized, skill) >= self.fuzzy_threshold {
                    found.push(skill.clone());
                    break;
                }
            }
        }

        found
    }

    /// Common technical skill names recognized out of the box.
    fn default_vocabulary() -> Vec<String> {
        [
            // Languages
            "rust", "python", "javascript", "typescript", "java", "c++", "c#", "go", "ruby",
            "php", "swift", "kotlin", "scala", "r", "bash",
            // Web
            "react", "vue", "angular", "svelte", "html", "css", "tailwind", "node.js",
            "express", "nextjs", "webpack", "rest", "graphql",
            // Infrastructure
            "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible", "linux",
            "cicd", "git", "nginx", "prometheus",
            // Data
            "sql", "postgresql", "mysql", "mongodb", "redis", "sqlite", "elasticsearch",
            "excel", "tableau", "statistics",
            // Data science / ML
            "machine learning", "deep learning", "tensorflow", "pytorch", "pandas", "numpy",
            "spark", "kafka", "jupyter",
            // Testing
            "jest", "pytest", "selenium", "cypress", "junit",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl SkillExtractor for KeywordExtractor {
    fn extract(&self, text: &str) -> Result<SkillSet> {
        let exact = self.exact_matches(text);
        let exact_set = SkillSet::normalize(&exact);
        let fuzzy = self.fuzzy_matches(text, &exact_set);

        Ok(SkillSet::normalize(exact.iter().chain(fuzzy.iter())))
    }
}

/// Manually declared skills, bypassing extraction entirely.
pub struct DeclaredSkills(pub String);

impl SkillExtractor for DeclaredSkills {
    fn extract(&self, _text: &str) -> Result<SkillSet> {
        let skills = SkillSet::from_comma_separated(&self.0);
        if skills.is_empty() {
            return Err(ReadinessError::Validation(
                "declared skill list is empty".to_string(),
            ));
        }
        Ok(skills)
    }
}
