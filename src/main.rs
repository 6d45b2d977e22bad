//! Readiness analyzer: score a resume against a target job role

mod cli;
mod config;
mod engine;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, RolesAction};
use config::Config;
use engine::analyzer::ReadinessEngine;
use engine::extractor::{DeclaredSkills, KeywordExtractor, SkillExtractor};
use engine::recommender::ResourceCatalog;
use engine::role::RoleLibrary;
use error::{ReadinessError, Result};
use input::loader::ResumeLoader;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Assess {
            resume,
            skills,
            role,
            roles_file,
            catalog,
            max_resources,
            preferred_bonus,
            output,
            save,
            detailed,
        } => {
            let mut config = config;
            if preferred_bonus {
                config.scoring.include_preferred_bonus = true;
            }
            if let Some(max) = max_resources {
                config.recommender.max_resources_per_skill = max;
            }
            config.validate()?;

            let output_format = cli::parse_output_format(&output).map_err(ReadinessError::InvalidInput)?;

            let library = load_role_library(roles_file.as_deref(), &config)?;
            let target = library.get(&role)?;
            info!("Assessing readiness for role: {}", target.title);

            let user_skills = match (&resume, &skills) {
                (Some(path), _) => {
                    cli::validate_file_extension(path, &["pdf", "txt", "md"])
                        .map_err(|e| ReadinessError::InvalidInput(format!("Resume file: {}", e)))?;

                    let mut loader = ResumeLoader::new();
                    let text = loader.load(path).await?;
                    info!("Extracted {} characters of resume text", text.len());

                    let extractor = KeywordExtractor::for_role(target)?;
                    extractor.extract(&text)?
                }
                (None, Some(list)) => DeclaredSkills(list.clone()).extract("")?,
                (None, None) => {
                    return Err(ReadinessError::InvalidInput(
                        "Provide either --resume or --skills".to_string(),
                    ));
                }
            };
            info!("User skill set: {}", user_skills);

            let resource_catalog = load_resource_catalog(catalog.as_deref(), &config)?;
            let analysis_engine = ReadinessEngine::new(&config, resource_catalog);
            let report = analysis_engine.assess(target, &user_skills)?;

            let generator = output::formatter::ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
            );
            println!("{}", generator.generate(&report, output_format)?);

            if let Some(save_path) = save {
                generator.save_to_file(&report, output_format, &save_path)?;
                println!("Report saved to: {}", save_path.display());
            }

            Ok(())
        }

        Commands::Roles { action } => match action {
            RolesAction::List { roles_file } => {
                let library = load_role_library(roles_file.as_deref(), &config)?;
                println!("Available roles ({}):", library.len());
                for role in library.iter() {
                    println!(
                        "  {:<24} {} [{}]",
                        role.id, role.title, role.experience_level
                    );
                }
                Ok(())
            }
            RolesAction::Show { role, roles_file } => {
                let library = load_role_library(roles_file.as_deref(), &config)?;
                let profile = library.get(&role)?;
                println!("{} ({})", profile.title, profile.experience_level);
                println!("{}\n", profile.description);
                println!("Required skills: {}", profile.required_skills);
                println!("Preferred skills: {}", profile.preferred_skills);
                Ok(())
            }
        },

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ReadinessError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("# {}", Config::config_path().display());
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::reset()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

fn load_role_library(roles_file: Option<&Path>, config: &Config) -> Result<RoleLibrary> {
    let path: Option<PathBuf> = roles_file
        .map(Path::to_path_buf)
        .or_else(|| config.roles.roles_path.clone());

    match path {
        Some(path) => RoleLibrary::from_json_file(&path),
        None => Ok(RoleLibrary::builtin()),
    }
}

fn load_resource_catalog(catalog_file: Option<&Path>, config: &Config) -> Result<ResourceCatalog> {
    let path: Option<PathBuf> = catalog_file
        .map(Path::to_path_buf)
        .or_else(|| config.recommender.catalog_path.clone());

    match path {
        Some(path) => ResourceCatalog::from_json_file(&path),
        None => Ok(ResourceCatalog::builtin()),
    }
}
