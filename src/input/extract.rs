//! Text extraction from resume files

use crate::error::{ReadinessError, Result};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

/// Resume file formats the analyzer can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
    Markdown,
}

impl ResumeFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "txt" => Some(ResumeFormat::PlainText),
            "md" | "markdown" => Some(ResumeFormat::Markdown),
            _ => None,
        }
    }
}

/// Extract plain text from a resume file, routing on its format.
pub async fn extract_text(path: &Path) -> Result<String> {
    let format = ResumeFormat::from_path(path).ok_or_else(|| {
        ReadinessError::UnsupportedFormat(format!(
            "Unsupported resume file type: {}",
            path.display()
        ))
    })?;

    match format {
        ResumeFormat::Pdf => extract_pdf(path).await,
        ResumeFormat::PlainText => Ok(fs::read_to_string(path).await?),
        ResumeFormat::Markdown => extract_markdown(path).await,
    }
}

async fn extract_pdf(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        ReadinessError::PdfExtraction(format!(
            "Failed to extract text from PDF '{}': {}",
            path.display(),
            e
        ))
    })
}

async fn extract_markdown(path: &Path) -> Result<String> {
    let markdown = fs::read_to_string(path).await?;

    // Render to HTML first so markdown structure (emphasis, headings, lists)
    // is stripped uniformly.
    let parser = Parser::new(&markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    Ok(html_to_text(&html_output))
}

fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let tag_re = regex::Regex::new(r"<[^>]*>").unwrap();
    let clean = tag_re.replace_all(&text, "");

    clean
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ResumeFormat::from_path(&PathBuf::from("cv.PDF")),
            Some(ResumeFormat::Pdf)
        );
        assert_eq!(
            ResumeFormat::from_path(&PathBuf::from("cv.txt")),
            Some(ResumeFormat::PlainText)
        );
        assert_eq!(
            ResumeFormat::from_path(&PathBuf::from("cv.markdown")),
            Some(ResumeFormat::Markdown)
        );
        assert_eq!(ResumeFormat::from_path(&PathBuf::from("cv.docx")), None);
        assert_eq!(ResumeFormat::from_path(&PathBuf::from("cv")), None);
    }

    #[test]
    fn test_html_to_text_strips_tags_and_entities() {
        let text = html_to_text("<h1>Jane Doe</h1><p>Python &amp; SQL</p>");
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Python & SQL"));
        assert!(!text.contains('<'));
    }
}
