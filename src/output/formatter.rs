//! Report formatters: console, JSON and markdown

use crate::config::OutputFormat;
use crate::engine::analyzer::ReadinessReport;
use crate::error::{ReadinessError, Result};
use colored::{Color, Colorize};

/// Trait for formatting readiness reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

/// Dispatches to the formatter matching the requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            80..=100 => Color::Green,
            60..=79 => Color::Cyan,
            40..=59 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        match level {
            1 => format!("\n{}\n{}\n", title.to_uppercase(), "=".repeat(title.len())),
            2 => format!("\n{}\n{}\n", title, "-".repeat(title.len())),
            _ => format!("\n{}\n", title),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        let mut output = String::new();
        let assessment = &report.assessment;

        output.push_str(&self.format_header("📊 Placement Readiness Report", 1));
        output.push_str(&format!(
            "Role: {} ({}) | Generated: {} | {}ms\n",
            report.role_title,
            report.experience_level,
            assessment.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.processing_time_ms
        ));

        output.push_str(&self.format_header("Readiness Score", 2));
        let score_text = format!("{}% ({})", assessment.readiness_score, assessment.readiness_label());
        output.push_str(&format!(
            "🎯 {}\n",
            self.colorize(&score_text, Self::score_color(assessment.readiness_score))
        ));
        if report.preferred_bonus_applied {
            output.push_str("   (includes preferred-skill bonus)\n");
        }
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(&report.verdict, Color::Cyan)
        ));

        output.push_str(&self.format_header("✅ Matched Skills", 2));
        if assessment.matched_skills.is_empty() {
            output.push_str("  (none)\n");
        }
        for skill in &assessment.matched_skills {
            output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
        }
        for skill in &report.matched_preferred {
            output.push_str(&format!(
                "  • {} {}\n",
                self.colorize(skill, Color::Green),
                self.colorize("(preferred)", Color::BrightBlack)
            ));
        }

        output.push_str(&self.format_header("🎯 Skill Gaps", 2));
        if assessment.missing_skills.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                self.colorize("No gaps - all required skills covered!", Color::Green)
            ));
        }
        for skill in &assessment.missing_skills {
            output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Yellow)));
        }

        if !report.recommendations.is_empty() {
            output.push_str(&self.format_header("📚 Learning Recommendations", 2));
            for rec in &report.recommendations {
                output.push_str(&format!(
                    "  [{}] {} {}\n",
                    rec.resource_type,
                    self.colorize(&rec.title, Color::White),
                    self.colorize(&format!("({})", rec.provider), Color::BrightBlack)
                ));
                output.push_str(&format!("        {}\n", rec.url));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("📄 Detected Skills", 2));
            output.push_str(&format!("  {}\n", assessment.user_skills));
        }

        output.push_str(&format!(
            "\n{} Generated by Readiness Analyzer v{}\n",
            self.colorize("ℹ️", Color::Blue),
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        let assessment = &report.assessment;
        let mut output = String::new();

        output.push_str("# Placement Readiness Report\n\n");
        output.push_str(&format!(
            "**Role:** {} ({})  \n**Generated:** {}\n\n",
            report.role_title,
            report.experience_level,
            assessment.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&format!(
            "## Readiness Score: {}% ({})\n\n{}\n\n",
            assessment.readiness_score,
            assessment.readiness_label(),
            report.verdict
        ));

        output.push_str("## Matched Skills\n\n");
        if assessment.matched_skills.is_empty() && report.matched_preferred.is_empty() {
            output.push_str("_None._\n");
        }
        for skill in &assessment.matched_skills {
            output.push_str(&format!("- {}\n", skill));
        }
        for skill in &report.matched_preferred {
            output.push_str(&format!("- {} _(preferred)_\n", skill));
        }

        output.push_str("\n## Skill Gaps\n\n");
        if assessment.missing_skills.is_empty() {
            output.push_str("_No gaps - all required skills covered._\n");
        }
        for skill in &assessment.missing_skills {
            output.push_str(&format!("- {}\n", skill));
        }

        if !report.recommendations.is_empty() {
            output.push_str("\n## Learning Recommendations\n\n");
            output.push_str("| Skill | Type | Resource | Provider |\n");
            output.push_str("|---|---|---|---|\n");
            for rec in &report.recommendations {
                output.push_str(&format!(
                    "| {} | {} | [{}]({}) | {} |\n",
                    rec.skill_name, rec.resource_type, rec.title, rec.url, rec.provider
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn generate(&self, report: &ReadinessReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_to_file(
        &self,
        report: &ReadinessReport,
        format: OutputFormat,
        path: &std::path::Path,
    ) -> Result<()> {
        let content = self.generate(report, format)?;
        std::fs::write(path, content).map_err(|e| {
            ReadinessError::OutputFormatting(format!(
                "Failed to save report to {}: {}",
                path.display(),
                e
            ))
        })
    }
}
