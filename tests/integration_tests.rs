//! Integration tests for the readiness analyzer

use readiness_analyzer::config::Config;
use readiness_analyzer::engine::analyzer::ReadinessEngine;
use readiness_analyzer::engine::extractor::{KeywordExtractor, SkillExtractor};
use readiness_analyzer::engine::recommender::ResourceCatalog;
use readiness_analyzer::engine::role::RoleLibrary;
use readiness_analyzer::engine::skills::SkillSet;
use readiness_analyzer::input::loader::ResumeLoader;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut loader = ResumeLoader::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = loader.load(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut loader = ResumeLoader::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = loader.load(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Docker"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut loader = ResumeLoader::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = loader.load(path).await.unwrap();
    assert_eq!(loader.cache_size(), 1);

    let text2 = loader.load(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(loader.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut loader = ResumeLoader::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = loader.load(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut loader = ResumeLoader::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = loader.load(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_resume_assessment() {
    let mut loader = ResumeLoader::new();
    let text = loader
        .load(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let library = RoleLibrary::builtin();
    let role = library.get("backend-developer").unwrap();

    let extractor = KeywordExtractor::for_role(role).unwrap();
    let skills = extractor.extract(&text).unwrap();
    assert!(skills.contains("python"));
    assert!(skills.contains("sql"));
    assert!(skills.contains("rest"));
    assert!(skills.contains("git"));

    let engine = ReadinessEngine::new(&Config::default(), ResourceCatalog::builtin());
    let report = engine.assess(role, &skills).unwrap();

    // Required: python, sql, rest, git, docker. The fixture covers all but
    // docker, so the score is 4/5.
    assert_eq!(report.assessment.readiness_score, 80);
    assert_eq!(report.assessment.missing_skills, vec!["docker"]);
    assert!(report
        .recommendations
        .iter()
        .all(|r| r.skill_name == "docker" && !r.url.is_empty()));
}

#[tokio::test]
async fn test_custom_roles_and_catalog_files() {
    let library = RoleLibrary::from_json_file(Path::new("tests/fixtures/roles.json")).unwrap();
    let role = library.get("platform-engineer").unwrap();

    let catalog = ResourceCatalog::from_json_file(Path::new("tests/fixtures/catalog.json")).unwrap();

    let mut loader = ResumeLoader::new();
    let text = loader
        .load(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();
    let skills = KeywordExtractor::for_role(role).unwrap().extract(&text).unwrap();

    let engine = ReadinessEngine::new(&Config::default(), catalog);
    let report = engine.assess(role, &skills).unwrap();

    // Required: python, docker, kubernetes, git; the markdown fixture has
    // python, docker and git.
    assert_eq!(report.assessment.readiness_score, 75);
    assert_eq!(report.assessment.missing_skills, vec!["kubernetes"]);

    // Kubernetes resources come from the curated catalog, not fallbacks.
    assert!(report.recommendations.iter().any(|r| r.provider == "edX"));
}

#[test]
fn test_declared_skills_assessment_scenarios() {
    let engine = ReadinessEngine::new(&Config::default(), ResourceCatalog::new());

    // Partial overlap
    let library = RoleLibrary::from_json_str(
        r#"[{
            "id": "demo",
            "title": "Demo Role",
            "description": "scoring scenarios",
            "required_skills": ["python", "sql", "docker"],
            "preferred_skills": [],
            "experience_level": "entry"
        }]"#,
    )
    .unwrap();
    let role = library.get("demo").unwrap();

    let report = engine
        .assess(role, &SkillSet::normalize(["python", "sql"]))
        .unwrap();
    assert_eq!(report.assessment.readiness_score, 67);
    assert_eq!(report.assessment.matched_skills, vec!["python", "sql"]);
    assert_eq!(report.assessment.missing_skills, vec!["docker"]);

    // No overlap
    let report = engine.assess(role, &SkillSet::default()).unwrap();
    assert_eq!(report.assessment.readiness_score, 0);
    assert_eq!(report.recommendations.len(), 9); // 3 fallbacks per gap
}
