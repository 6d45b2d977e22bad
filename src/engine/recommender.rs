//! Learning-resource recommendations for missing skills

use crate::config::RecommenderConfig;
use crate::error::{ReadinessError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Video,
    Practice,
    Article,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Course => write!(f, "course"),
            ResourceType::Video => write!(f, "video"),
            ResourceType::Practice => write!(f, "practice"),
            ResourceType::Article => write!(f, "article"),
        }
    }
}

/// A single learning resource suggested for a missing skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill_name: String,
    pub resource_type: ResourceType,
    pub title: String,
    pub url: String,
    pub provider: String,
}

/// Lookup table from normalized skill name to candidate resources.
///
/// Either built in, or loaded once from a JSON file by the caller; the
/// recommender itself never performs I/O or network calls.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    entries: HashMap<String, Vec<Recommendation>>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: &str, recommendations: Vec<Recommendation>) {
        let key = skill.trim().to_lowercase();
        self.entries.entry(key).or_default().extend(recommendations);
    }

    pub fn get(&self, skill: &str) -> Option<&[Recommendation]> {
        self.entries
            .get(&skill.trim().to_lowercase())
            .map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| ReadinessError::Catalog(format!("failed to parse catalog JSON: {}", e)))?;
        Self::from_json(&value)
    }

    /// Build a catalog from an untyped JSON value.
    ///
    /// The value must be an object mapping skill names to arrays of
    /// recommendation objects; anything else is a structural catalog error.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ReadinessError::Catalog("catalog must be a mapping from skill name to resources".to_string())
        })?;

        let mut catalog = Self::new();
        for (skill, resources) in object {
            let array = resources.as_array().ok_or_else(|| {
                ReadinessError::Catalog(format!(
                    "catalog entry for '{}' must be an array of resources",
                    skill
                ))
            })?;

            let mut recommendations = Vec::with_capacity(array.len());
            for resource in array {
                let rec: Recommendation = serde_json::from_value(resource.clone()).map_err(|e| {
                    ReadinessError::Catalog(format!("invalid resource for '{}': {}", skill, e))
                })?;
                recommendations.push(rec);
            }
            catalog.insert(skill, recommendations);
        }

        Ok(catalog)
    }

    /// Curated entries for a handful of common skills.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "react",
            vec![Recommendation {
                skill_name: "react".to_string(),
                resource_type: ResourceType::Course,
                title: "React - The Complete Guide".to_string(),
                url: "https://www.udemy.com/course/react-the-complete-guide-incl-redux/".to_string(),
                provider: "Udemy".to_string(),
            }],
        );
        catalog.insert(
            "python",
            vec![Recommendation {
                skill_name: "python".to_string(),
                resource_type: ResourceType::Course,
                title: "Python for Everybody".to_string(),
                url: "https://www.coursera.org/specializations/python".to_string(),
                provider: "Coursera".to_string(),
            }],
        );
        catalog.insert(
            "sql",
            vec![Recommendation {
                skill_name: "sql".to_string(),
                resource_type: ResourceType::Practice,
                title: "SQL Practice Exercises".to_string(),
                url: "https://www.hackerrank.com/domains/sql".to_string(),
                provider: "HackerRank".to_string(),
            }],
        );
        catalog.insert(
            "docker",
            vec![Recommendation {
                skill_name: "docker".to_string(),
                resource_type: ResourceType::Article,
                title: "Docker Getting Started Guide".to_string(),
                url: "https://docs.docker.com/get-started/".to_string(),
                provider: "Docker Docs".to_string(),
            }],
        );
        catalog
    }
}

/// Maps missing skills to learning resources.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: ResourceCatalog,
    max_resources_per_skill: usize,
}

impl Recommender {
    pub fn new(catalog: ResourceCatalog, config: &RecommenderConfig) -> Self {
        Self {
            catalog,
            max_resources_per_skill: config.max_resources_per_skill,
        }
    }

    /// Suggest resources for each missing skill, in the missing list's
    /// order. Skills absent from the catalog get synthesized fallback
    /// entries so every gap yields at least one recommendation.
    pub fn recommend(&self, missing_skills: &[String]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for skill in missing_skills {
            match self.catalog.get(skill) {
                Some(entries) if !entries.is_empty() => {
                    recommendations.extend(
                        entries
                            .iter()
                            .take(self.max_resources_per_skill)
                            .cloned(),
                    );
                }
                _ => {
                    recommendations.extend(
                        self.fallback_resources(skill)
                            .into_iter()
                            .take(self.max_resources_per_skill),
                    );
                }
            }
        }

        recommendations
    }

    /// Generic search-query resources for a skill with no catalog entry,
    /// one per fallback resource type.
    fn fallback_resources(&self, skill: &str) -> Vec<Recommendation> {
        let encoded = urlencoding::encode(skill).into_owned();
        vec![
            Recommendation {
                skill_name: skill.to_string(),
                resource_type: ResourceType::Course,
                title: format!("Master {} - Complete Course", skill),
                url: format!("https://www.coursera.org/search?query={}", encoded),
                provider: "Coursera".to_string(),
            },
            Recommendation {
                skill_name: skill.to_string(),
                resource_type: ResourceType::Video,
                title: format!("{} Tutorial for Beginners", skill),
                url: format!(
                    "https://www.youtube.com/results?search_query={}+tutorial",
                    encoded
                ),
                provider: "YouTube".to_string(),
            },
            Recommendation {
                skill_name: skill.to_string(),
                resource_type: ResourceType::Practice,
                title: format!("{} Practice Problems", skill),
                url: format!("https://leetcode.com/problemset/?search={}", encoded),
                provider: "LeetCode".to_string(),
            },
        ]
    }

    pub fn max_resources_per_skill(&self) -> usize {
        self.max_resources_per_skill
    }
}
