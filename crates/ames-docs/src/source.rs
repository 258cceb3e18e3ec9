//! Documentation sources.
//!
//! A source hands the parser the cleaned, non-empty lines of the data
//! documentation. The published file carries a prose header and footer around
//! the variable listing; [`DocumentWindow`] cuts the listing out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocsError, Result};

/// Supplies the documentation lines, in order.
pub trait DocumentSource {
    fn lines(&self) -> Result<Vec<String>>;
}

/// Half-open range of raw line indices holding the variable listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentWindow {
    pub start: usize,
    pub end: Option<usize>,
}

impl DocumentWindow {
    /// Lines 13..545 of the published Ames documentation.
    pub const AMES: DocumentWindow = DocumentWindow {
        start: 13,
        end: Some(545),
    };

    /// Every line.
    pub const fn full() -> Self {
        Self {
            start: 0,
            end: None,
        }
    }

    fn apply<'a, T>(&self, lines: &'a [T]) -> &'a [T] {
        let end = self.end.map_or(lines.len(), |end| end.min(lines.len()));
        let start = self.start.min(end);
        &lines[start..end]
    }
}

impl Default for DocumentWindow {
    fn default() -> Self {
        Self::AMES
    }
}

/// Collapses double spaces, trims and drops empty lines.
pub fn clean_lines<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    raw.into_iter()
        .map(|line| line.replace("  ", " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn windowed_lines(text: &str, window: DocumentWindow) -> Vec<String> {
    let raw: Vec<&str> = text.lines().collect();
    clean_lines(window.apply(&raw).iter().copied())
}

/// Locally cached copy of the documentation.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    window: DocumentWindow,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            window: DocumentWindow::default(),
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: DocumentWindow) -> Self {
        self.window = window;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileDocument {
    fn lines(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocsError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                DocsError::FileRead {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let lines = windowed_lines(text, self.window);
        tracing::debug!(
            path = %self.path.display(),
            lines = lines.len(),
            "Loaded documentation lines"
        );
        Ok(lines)
    }
}

/// Documentation already held in memory.
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: String,
    window: DocumentWindow,
}

impl TextDocument {
    /// In-memory text; every line is used unless a window is set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            window: DocumentWindow::full(),
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: DocumentWindow) -> Self {
        self.window = window;
        self
    }
}

impl DocumentSource for TextDocument {
    fn lines(&self) -> Result<Vec<String>> {
        Ok(windowed_lines(&self.text, self.window))
    }
}
