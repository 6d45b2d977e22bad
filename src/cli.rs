//! CLI interface for the readiness analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "readiness-analyzer")]
#[command(about = "Assess your readiness for a target job role")]
#[command(
    long_about = "Score a resume (or a declared skill list) against a role's required skills, list the gaps, and suggest learning resources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess readiness for a role
    Assess {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long, conflicts_with = "skills")]
        resume: Option<PathBuf>,

        /// Comma-separated skill list instead of a resume file
        #[arg(short, long)]
        skills: Option<String>,

        /// Target role id or title (see `roles list`)
        #[arg(long)]
        role: String,

        /// JSON file with role profiles (overrides built-in roles)
        #[arg(long)]
        roles_file: Option<PathBuf>,

        /// JSON file with a learning-resource catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Maximum suggested resources per missing skill
        #[arg(long)]
        max_resources: Option<usize>,

        /// Include the preferred-skill bonus in the score
        #[arg(long)]
        preferred_bonus: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Show detailed analysis
        #[arg(short, long)]
        detailed: bool,
    },

    /// Role library commands
    Roles {
        #[command(subcommand)]
        action: RolesAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum RolesAction {
    /// List available roles
    List {
        /// JSON file with role profiles (overrides built-in roles)
        #[arg(long)]
        roles_file: Option<PathBuf>,
    },

    /// Show a role's requirement profile
    Show {
        /// Role id or title
        role: String,

        /// JSON file with role profiles (overrides built-in roles)
        #[arg(long)]
        roles_file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf", "txt"]).is_ok());

        let path = PathBuf::from("resume.docx");
        assert!(validate_file_extension(&path, &["pdf", "txt"]).is_err());

        let path = PathBuf::from("resume");
        assert!(validate_file_extension(&path, &["pdf"]).is_err());
    }
}
