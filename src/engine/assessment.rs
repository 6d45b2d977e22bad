//! Immutable assessment records

use crate::engine::scorer::ScoreResult;
use crate::engine::skills::SkillSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The result of one readiness assessment for a (user, role) pair at a
/// point in time. Immutable after creation; callers may accumulate them as
/// a history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub role_id: String,
    pub user_skills: SkillSet,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub readiness_score: u8,
    pub created_at: DateTime<Utc>,
}

/// Assemble an assessment from a score result.
///
/// Pure construction: the timestamp comes from the caller so repeated calls
/// with the same inputs are reproducible.
pub fn assemble(
    role_id: &str,
    user_skills: SkillSet,
    score: &ScoreResult,
    now: DateTime<Utc>,
) -> Assessment {
    Assessment {
        role_id: role_id.to_string(),
        user_skills,
        matched_skills: score.matched.clone(),
        missing_skills: score.missing.clone(),
        readiness_score: score.readiness_score,
        created_at: now,
    }
}

impl Assessment {
    /// Human-readable label for the score, using the dashboard cut-offs.
    pub fn readiness_label(&self) -> &'static str {
        match self.readiness_score {
            80..=100 => "Excellent",
            60..=79 => "Good",
            40..=59 => "Fair",
            _ => "Needs Improvement",
        }
    }
}
