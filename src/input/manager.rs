//! Document loading for resumes and job descriptions

use crate::error::{Result, ResumeReviewError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    normalize_whitespace, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub file_name: String,
    pub file_type: FileType,
    pub text: String,
}

pub struct DocumentLoader {
    cache: HashMap<PathBuf, LoadedDocument>,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self { cache: HashMap::new() }
    }

    pub async fn load(&mut self, path: &Path) -> Result<LoadedDocument> {
        if let Some(cached) = self.cache.get(path) {
            debug!("Using cached text for: {}", path.display());
            return Ok(cached.clone());
        }

        if !path.exists() {
            return Err(ResumeReviewError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::detect(path)?;
        info!("Reading {} file: {}", file_type, path.display());

        let raw = match file_type {
            FileType::Pdf => PdfExtractor.extract(path).await?,
            FileType::Text => PlainTextExtractor.extract(path).await?,
            FileType::Markdown => MarkdownExtractor.extract(path).await?,
            FileType::Unknown => {
                return Err(ResumeReviewError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        // Scanned PDFs yield nothing; the scorer's floors handle empty text
        let text = normalize_whitespace(&raw);
        if text.is_empty() {
            warn!("No text could be extracted from: {}", path.display());
        }

        let document = LoadedDocument {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            file_type,
            text,
        };

        self.cache.insert(path.to_path_buf(), document.clone());

        Ok(document)
    }

    pub async fn load_text(&mut self, path: &Path) -> Result<String> {
        Ok(self.load(path).await?.text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_loads_and_caches_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane   Doe\n\n  Experience:  Rust  \n").unwrap();

        let mut loader = DocumentLoader::new();
        let document = loader.load(&path).await.unwrap();
        assert_eq!(document.file_name, "resume.txt");
        assert_eq!(document.file_type, FileType::Text);
        assert_eq!(document.text, "Jane Doe\nExperience: Rust");
        assert_eq!(loader.cache_size(), 1);

        // Served from cache even after the file changes
        std::fs::write(&path, "changed").unwrap();
        assert_eq!(loader.load_text(&path).await.unwrap(), "Jane Doe\nExperience: Rust");

        loader.clear_cache();
        assert_eq!(loader.load_text(&path).await.unwrap(), "changed");
    }

    #[tokio::test]
    async fn test_loads_markdown() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.md");
        std::fs::write(&path, "# Role\n\nBuild things").unwrap();

        let mut loader = DocumentLoader::new();
        let document = loader.load(&path).await.unwrap();
        assert_eq!(document.file_type, FileType::Markdown);
        assert_eq!(document.text, "Role\nBuild things");
    }

    #[tokio::test]
    async fn test_blank_document_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scanned.txt");
        std::fs::write(&path, "  \n\t\n").unwrap();

        let mut loader = DocumentLoader::new();
        let document = loader.load(&path).await.unwrap();
        assert_eq!(document.text, "");
        assert_eq!(document.file_name, "scanned.txt");

        // Empty text still gets a low-end review
        let report = crate::scoring::HeuristicScorer::new()
            .unwrap()
            .score_text(&document.text, "Backend Engineer", "", "");
        assert_eq!(report.content.score, 25);
        assert_eq!(report.structure.score, 30);
        assert!(report.overall_score < 55);
    }

    #[tokio::test]
    async fn test_rejects_bad_inputs() {
        let dir = tempdir().unwrap();
        let mut loader = DocumentLoader::new();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(loader.load(&missing).await, Err(ResumeReviewError::InvalidInput(_))));

        let unknown = dir.path().join("resume.docx");
        std::fs::write(&unknown, "binary").unwrap();
        assert!(matches!(loader.load(&unknown).await, Err(ResumeReviewError::UnsupportedFormat(_))));

        let bare = dir.path().join("README");
        std::fs::write(&bare, "text").unwrap();
        assert!(matches!(loader.load(&bare).await, Err(ResumeReviewError::InvalidInput(_))));
    }
}
