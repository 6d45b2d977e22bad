//! Role requirement profiles and the built-in role library

use crate::engine::skills::SkillSet;
use crate::error::{ReadinessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A role's declared skill requirements.
///
/// Read-only to the scorer. Required and preferred skills must be disjoint;
/// profiles violating that are rejected at construction or load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_skills: SkillSet,
    pub preferred_skills: SkillSet,
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::Entry => write!(f, "entry"),
            ExperienceLevel::Mid => write!(f, "mid"),
            ExperienceLevel::Senior => write!(f, "senior"),
        }
    }
}

impl RoleProfile {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        required_skills: SkillSet,
        preferred_skills: SkillSet,
        experience_level: ExperienceLevel,
    ) -> Result<Self> {
        let profile = Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            required_skills,
            preferred_skills,
            experience_level,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the profile invariants: non-empty id/title and disjoint
    /// required/preferred skill sets.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ReadinessError::Validation("role id must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(ReadinessError::Validation(format!(
                "role '{}' has an empty title",
                self.id
            )));
        }

        let overlap: Vec<String> = self.required_skills.intersection(&self.preferred_skills);
        if !overlap.is_empty() {
            return Err(ReadinessError::Validation(format!(
                "role '{}' lists skills as both required and preferred: {}",
                self.id,
                overlap.join(", ")
            )));
        }

        Ok(())
    }
}

/// Collection of role profiles, listed in title order.
#[derive(Debug, Clone)]
pub struct RoleLibrary {
    roles: Vec<RoleProfile>,
}

impl RoleLibrary {
    pub fn new(mut roles: Vec<RoleProfile>) -> Result<Self> {
        for role in &roles {
            role.validate()?;
        }
        roles.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(Self { roles })
    }

    /// Load a role library from a JSON file containing an array of profiles.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let roles: Vec<RoleProfile> = serde_json::from_str(json)
            .map_err(|e| ReadinessError::Validation(format!("failed to parse role profiles: {}", e)))?;
        Self::new(roles)
    }

    /// Find a role by id, or by title (case-insensitive) as a convenience
    /// for CLI usage.
    pub fn get(&self, id_or_title: &str) -> Result<&RoleProfile> {
        let needle = id_or_title.trim().to_lowercase();
        self.roles
            .iter()
            .find(|r| r.id.to_lowercase() == needle || r.title.to_lowercase() == needle)
            .ok_or_else(|| ReadinessError::RoleNotFound(id_or_title.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleProfile> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Built-in role profiles covering common placement targets.
    pub fn builtin() -> Self {
        let roles = vec![
            RoleProfile {
                id: "frontend-developer".to_string(),
                title: "Frontend Developer".to_string(),
                description: "Builds responsive user interfaces and browser applications".to_string(),
                required_skills: SkillSet::normalize([
                    "html", "css", "javascript", "react", "git",
                ]),
                preferred_skills: SkillSet::normalize([
                    "typescript", "tailwind", "webpack", "jest",
                ]),
                experience_level: ExperienceLevel::Entry,
            },
            RoleProfile {
                id: "backend-developer".to_string(),
                title: "Backend Developer".to_string(),
                description: "Designs and implements server-side services and APIs".to_string(),
                required_skills: SkillSet::normalize([
                    "python", "sql", "rest", "git", "docker",
                ]),
                preferred_skills: SkillSet::normalize([
                    "postgresql", "redis", "kubernetes", "graphql",
                ]),
                experience_level: ExperienceLevel::Mid,
            },
            RoleProfile {
                id: "fullstack-developer".to_string(),
                title: "Full Stack Developer".to_string(),
                description: "Works across the stack from UI to database".to_string(),
                required_skills: SkillSet::normalize([
                    "javascript", "react", "node.js", "sql", "git", "rest",
                ]),
                preferred_skills: SkillSet::normalize([
                    "typescript", "docker", "aws", "mongodb",
                ]),
                experience_level: ExperienceLevel::Mid,
            },
            RoleProfile {
                id: "data-analyst".to_string(),
                title: "Data Analyst".to_string(),
                description: "Turns raw data into reports, dashboards and insights".to_string(),
                required_skills: SkillSet::normalize([
                    "sql", "python", "excel", "pandas",
                ]),
                preferred_skills: SkillSet::normalize([
                    "tableau", "r", "statistics", "numpy",
                ]),
                experience_level: ExperienceLevel::Entry,
            },
            RoleProfile {
                id: "devops-engineer".to_string(),
                title: "DevOps Engineer".to_string(),
                description: "Automates build, deployment and infrastructure operations".to_string(),
                required_skills: SkillSet::normalize([
                    "linux", "docker", "kubernetes", "cicd", "bash", "git",
                ]),
                preferred_skills: SkillSet::normalize([
                    "terraform", "ansible", "aws", "prometheus",
                ]),
                experience_level: ExperienceLevel::Senior,
            },
            RoleProfile {
                id: "ml-engineer".to_string(),
                title: "Machine Learning Engineer".to_string(),
                description: "Builds, trains and ships machine learning models".to_string(),
                required_skills: SkillSet::normalize([
                    "python", "machine learning", "pandas", "numpy", "sql",
                ]),
                preferred_skills: SkillSet::normalize([
                    "tensorflow", "pytorch", "docker", "spark",
                ]),
                experience_level: ExperienceLevel::Mid,
            },
        ];

        // Built-ins are constructed disjoint; new() re-checks and sorts.
        Self::new(roles).expect("built-in role profiles are valid")
    }
}
