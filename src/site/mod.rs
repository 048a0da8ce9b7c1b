//! Static site generation.
//!
//! Mirrors a content tree of `.md` files into an output tree of `.html`
//! pages rendered through one template, after copying static assets.
//! A failure on any file aborts the build.

mod fs;
mod generate;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use fs::{copy_dir, copy_static, empty_dir, find_markdown_files};
pub use generate::{generate_page, generate_pages_recursive};

/// Errors from building a site. Each names the file involved.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A required source directory is missing.
    #[error("source directory not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A Markdown document failed to convert.
    #[error("failed to convert {}: {source}", .path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: crate::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
        move |source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Input and output locations for a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Tree of `.md` documents.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Page template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Destination; emptied before every build.
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
        }
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Written pages, in generation order.
    pub pages: Vec<PathBuf>,
    /// Number of static files copied.
    pub static_files: usize,
}

/// Empty the output directory, copy static assets, then generate pages.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    log::info!("building site into {}", config.output_dir.display());
    empty_dir(&config.output_dir)?;
    let static_files = copy_static(&config.static_dir, &config.output_dir)?;
    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
    )?;
    log::info!(
        "built {} page(s), copied {} static file(s)",
        pages.len(),
        static_files
    );
    Ok(BuildReport {
        pages,
        static_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.template_path, PathBuf::from("template.html"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_error_messages_name_path() {
        let err = SiteError::MissingSource(PathBuf::from("static"));
        assert_eq!(err.to_string(), "source directory not found: static");

        let err = SiteError::Convert {
            path: PathBuf::from("content/index.md"),
            source: crate::Error::NoTitle,
        };
        assert_eq!(
            err.to_string(),
            "failed to convert content/index.md: no h1 header found in markdown"
        );
    }
}
