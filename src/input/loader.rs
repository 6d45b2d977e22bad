//! Resume loader with an in-memory extraction cache

use crate::error::{ReadinessError, Result};
use crate::input::extract;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct ResumeLoader {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for ResumeLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ReadinessError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Extracting resume text from: {}", path.display());
        let text = extract::extract_text(path).await?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
