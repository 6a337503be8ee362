use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::composer::ComposedDocument;

const PREVIEW_DIR: &str = "codepad-preview";
const PREVIEW_FILE: &str = "preview.html";

/// Hands composed documents to the system browser.
///
/// The browser runs in its own process, so the user's script never shares
/// scope with the editor.
pub struct PreviewController {
    dir: PathBuf,
    launches: usize,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::with_dir(std::env::temp_dir().join(PREVIEW_DIR))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), launches: 0 }
    }

    pub fn preview_path(&self) -> PathBuf {
        self.dir.join(PREVIEW_FILE)
    }

    /// Write the document to the preview file, replacing any previous one.
    pub fn write_preview_file(&self, doc: &ComposedDocument) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.preview_path();
        fs::write(&path, doc.as_str())?;
        Ok(path)
    }

    /// Write the document and open it in the default browser.
    pub fn run_in_browser(&mut self, doc: &ComposedDocument) -> Result<PathBuf> {
        let path = self.write_preview_file(doc)?;
        open_in_browser(&path)?;
        self.launches += 1;
        tracing::info!(path = %path.display(), launches = self.launches, "preview opened in browser");
        Ok(path)
    }

    /// Rewrite the preview file once a browser has it open, so a reload there
    /// shows the current sources. Returns `None` before the first launch.
    pub fn refresh(&self, doc: &ComposedDocument) -> Result<Option<PathBuf>> {
        if self.launches == 0 {
            return Ok(None);
        }
        self.write_preview_file(doc).map(Some)
    }

    pub fn launches(&self) -> usize {
        self.launches
    }

    /// Remove the preview directory.
    pub fn cleanup(&self) {
        if let Err(e) = fs::remove_dir_all(&self.dir) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!("Could not remove preview dir: {}", e);
            }
        }
    }
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new()
    }
}

fn open_in_browser(path: &Path) -> Result<()> {
    open::that(path).map_err(|e| AppError::Preview(format!("Failed to open browser: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_preview_file() {
        let dir = tempdir().unwrap();
        let preview = PreviewController::with_dir(dir.path().join("preview"));
        let doc = ComposedDocument::new("<h1>Hi</h1>", "h1{color:red}", "console.log(1)");

        let path = preview.write_preview_file(&doc).unwrap();
        assert_eq!(path, preview.preview_path());
        assert_eq!(fs::read_to_string(&path).unwrap(), doc.as_str());
        assert_eq!(preview.launches(), 0);
    }

    #[test]
    fn test_rewrite_replaces_previous_document() {
        let dir = tempdir().unwrap();
        let preview = PreviewController::with_dir(dir.path());
        preview.write_preview_file(&ComposedDocument::new("old", "", "")).unwrap();
        let path = preview.write_preview_file(&ComposedDocument::new("new", "", "")).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("new"));
        assert!(!written.contains("old"));
    }

    #[test]
    fn test_refresh_waits_for_first_launch() {
        let dir = tempdir().unwrap();
        let mut preview = PreviewController::with_dir(dir.path().join("preview"));
        let doc = ComposedDocument::new("<p>x</p>", "", "");

        assert_eq!(preview.refresh(&doc).unwrap(), None);
        assert!(!preview.preview_path().exists());

        preview.launches = 1;
        let path = preview.refresh(&doc).unwrap().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), doc.as_str());
    }

    #[test]
    fn test_cleanup_removes_dir() {
        let dir = tempdir().unwrap();
        let preview = PreviewController::with_dir(dir.path().join("preview"));
        preview.write_preview_file(&ComposedDocument::new("", "", "")).unwrap();
        preview.cleanup();
        assert!(!preview.preview_path().exists());
        // second cleanup is a no-op
        preview.cleanup();
    }
}
