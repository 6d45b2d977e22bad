//! Readiness scoring: partition required skills into matched/missing and
//! derive a 0-100 percentage

use crate::config::ScoringConfig;
use crate::engine::role::RoleProfile;
use crate::engine::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// Result of scoring a user's skills against a role's requirements.
///
/// `matched` and `missing` partition the required skill set exactly, both in
/// the required set's insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub readiness_score: u8,
    pub bonus_applied: bool,
}

/// Pure, side-effect-free scorer.
#[derive(Debug, Clone)]
pub struct Scorer {
    include_preferred_bonus: bool,
}

impl Scorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            include_preferred_bonus: config.include_preferred_bonus,
        }
    }

    /// Baseline score of user skills against a required set.
    ///
    /// An empty required set scores 100: with nothing required the candidate
    /// is vacuously ready, and the degenerate case must never fail the
    /// caller.
    pub fn score(&self, required: &SkillSet, user: &SkillSet) -> ScoreResult {
        let matched = required.intersection(user);
        let missing = required.difference(user);

        let readiness_score = if required.is_empty() {
            100
        } else {
            let ratio = 100.0 * matched.len() as f64 / required.len() as f64;
            ratio.round() as u8
        };

        ScoreResult {
            matched,
            missing,
            matched_preferred: Vec::new(),
            readiness_score,
            bonus_applied: false,
        }
    }

    /// Score against a full role profile.
    ///
    /// Matched preferred skills are always reported; they only affect the
    /// score (+1 point each, capped at 100) when the preferred bonus is
    /// explicitly enabled in configuration.
    pub fn score_role(&self, role: &RoleProfile, user: &SkillSet) -> ScoreResult {
        let mut result = self.score(&role.required_skills, user);
        result.matched_preferred = role.preferred_skills.intersection(user);

        if self.include_preferred_bonus && !result.matched_preferred.is_empty() {
            let bonus = result.matched_preferred.len().min(100) as u8;
            result.readiness_score = result.readiness_score.saturating_add(bonus).min(100);
            result.bonus_applied = true;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::role::ExperienceLevel;

    fn scorer(include_preferred_bonus: bool) -> Scorer {
        Scorer::new(&ScoringConfig {
            include_preferred_bonus,
        })
    }

    #[test]
    fn test_scenario_partial_match() {
        let required = SkillSet::normalize(["python", "sql", "docker"]);
        let user = SkillSet::normalize(["python", "sql"]);

        let result = scorer(false).score(&required, &user);
        assert_eq!(result.matched, vec!["python", "sql"]);
        assert_eq!(result.missing, vec!["docker"]);
        assert_eq!(result.readiness_score, 67);
    }

    #[test]
    fn test_scenario_no_match() {
        let required = SkillSet::normalize(["react"]);
        let user = SkillSet::default();

        let result = scorer(false).score(&required, &user);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["react"]);
        assert_eq!(result.readiness_score, 0);
    }

    #[test]
    fn test_empty_required_is_vacuously_ready() {
        let required = SkillSet::default();
        let user = SkillSet::normalize(["go"]);

        let result = scorer(false).score(&required, &user);
        assert_eq!(result.readiness_score, 100);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let required = SkillSet::normalize(["a", "b", "c", "d", "e"]);
        let user = SkillSet::normalize(["b", "d", "z"]);

        let result = scorer(false).score(&required, &user);
        assert_eq!(result.matched.len() + result.missing.len(), required.len());
        for skill in &result.matched {
            assert!(!result.missing.contains(skill));
        }

        // Union equals required in order.
        let mut union: Vec<String> = required
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut combined = result.matched.clone();
        combined.extend(result.missing.clone());
        combined.sort();
        union.sort();
        assert_eq!(combined, union);
    }

    #[test]
    fn test_score_is_within_bounds() {
        let required = SkillSet::normalize(["a", "b", "c"]);
        for user_skills in [vec![], vec!["a"], vec!["a", "b"], vec!["a", "b", "c"]] {
            let user = SkillSet::normalize(user_skills);
            let score = scorer(false).score(&required, &user).readiness_score;
            assert!(score <= 100);
        }
    }

    fn sample_role() -> RoleProfile {
        RoleProfile::new(
            "backend",
            "Backend Developer",
            "server side",
            SkillSet::normalize(["python", "sql"]),
            SkillSet::normalize(["docker", "redis"]),
            ExperienceLevel::Mid,
        )
        .unwrap()
    }

    #[test]
    fn test_preferred_bonus_is_off_by_default() {
        let role = sample_role();
        let user = SkillSet::normalize(["python", "sql", "docker", "redis"]);

        let result = scorer(false).score_role(&role, &user);
        assert_eq!(result.readiness_score, 100);
        assert_eq!(result.matched_preferred, vec!["docker", "redis"]);
        assert!(!result.bonus_applied);
    }

    #[test]
    fn test_preferred_bonus_adds_one_point_per_skill() {
        let role = sample_role();
        let user = SkillSet::normalize(["python", "docker", "redis"]);

        // Base: 1/2 required = 50, +2 preferred = 52.
        let result = scorer(true).score_role(&role, &user);
        assert_eq!(result.readiness_score, 52);
        assert!(result.bonus_applied);
    }

    #[test]
    fn test_preferred_bonus_is_capped_at_100() {
        let role = sample_role();
        let user = SkillSet::normalize(["python", "sql", "docker", "redis"]);

        let result = scorer(true).score_role(&role, &user);
        assert_eq!(result.readiness_score, 100);
    }
}
