//! Screenshot byte retrieval.
//!
//! Screenshot metadata lives in the `screenshots` category; the image bytes
//! are fetched separately through a [`ScreenshotSource`] so that one missing
//! image fails a single call rather than the whole catalog.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Fetches screenshot bytes by file pointer.
pub trait ScreenshotSource: Send + Sync {
    /// Returns the raw bytes behind `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read.
    fn read(&self, file: &str) -> io::Result<Vec<u8>>;
}

/// Screenshots stored under a directory.
#[derive(Debug, Clone)]
pub struct DirectoryScreenshots {
    root: PathBuf,
}

impl DirectoryScreenshots {
    /// Creates a source reading from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a file pointer below the root.
    ///
    /// Absolute pointers and pointers with `..` components are refused.
    fn resolve(&self, file: &str) -> io::Result<PathBuf> {
        let relative = Path::new(file);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if file.is_empty() || escapes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Access denied: screenshot path is outside the screenshot directory",
            ));
        }

        Ok(self.root.join(relative))
    }
}

impl ScreenshotSource for DirectoryScreenshots {
    fn read(&self, file: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(file)?)
    }
}

/// Used when no screenshot directory is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScreenshots;

impl ScreenshotSource for NoScreenshots {
    fn read(&self, _file: &str) -> io::Result<Vec<u8>> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no screenshot directory configured",
        ))
    }
}

/// Guesses the MIME type of an image from its file extension.
#[must_use]
pub fn mime_type(file: &str) -> &'static str {
    let extension = Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}
