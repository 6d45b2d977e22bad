//! Readiness engine coordinating scoring, recommendations and assembly

use crate::config::Config;
use crate::engine::assessment::{assemble, Assessment};
use crate::engine::recommender::{Recommendation, Recommender, ResourceCatalog};
use crate::engine::role::RoleProfile;
use crate::engine::scorer::Scorer;
use crate::engine::skills::SkillSet;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Coordinates the scorer and recommender into a single report.
///
/// Every call is a self-contained, synchronous computation over its inputs;
/// the engine holds no mutable state and performs no I/O.
pub struct ReadinessEngine {
    scorer: Scorer,
    recommender: Recommender,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub role_title: String,
    pub experience_level: String,
    pub assessment: Assessment,
    pub matched_preferred: Vec<String>,
    pub preferred_bonus_applied: bool,
    pub recommendations: Vec<Recommendation>,
    pub verdict: String,
    pub processing_time_ms: u64,
}

impl ReadinessEngine {
    pub fn new(config: &Config, catalog: ResourceCatalog) -> Self {
        Self {
            scorer: Scorer::new(&config.scoring),
            recommender: Recommender::new(catalog, &config.recommender),
        }
    }

    /// Assess a user's readiness for a role, stamping the current time.
    pub fn assess(&self, role: &RoleProfile, user_skills: &SkillSet) -> Result<ReadinessReport> {
        self.assess_at(role, user_skills, Utc::now())
    }

    /// Deterministic variant with an injected timestamp.
    pub fn assess_at(
        &self,
        role: &RoleProfile,
        user_skills: &SkillSet,
        now: DateTime<Utc>,
    ) -> Result<ReadinessReport> {
        let start = Instant::now();

        role.validate()?;

        let score = self.scorer.score_role(role, user_skills);
        let recommendations = self.recommender.recommend(&score.missing);
        let assessment = assemble(&role.id, user_skills.clone(), &score, now);
        let verdict = Self::verdict(assessment.readiness_score);

        Ok(ReadinessReport {
            role_title: role.title.clone(),
            experience_level: role.experience_level.to_string(),
            assessment,
            matched_preferred: score.matched_preferred,
            preferred_bonus_applied: score.bonus_applied,
            recommendations,
            verdict,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn verdict(score: u8) -> String {
        match score {
            90..=100 => "Excellent match - you are ready to apply for this role".to_string(),
            80..=89 => "Very good match - a little polish and you are there".to_string(),
            60..=79 => "Good match - close the remaining gaps to stand out".to_string(),
            40..=59 => "Fair match - focus on the missing core skills first".to_string(),
            _ => "Early days - work through the recommended resources below".to_string(),
        }
    }
}
