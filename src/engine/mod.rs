//! Skill-readiness scoring engine

pub mod analyzer;
pub mod assessment;
pub mod extractor;
pub mod recommender;
pub mod role;
pub mod scorer;
pub mod skills;
