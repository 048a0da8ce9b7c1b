//! Page generation.

use std::fs;
use std::path::{Path, PathBuf};

use super::fs::find_markdown_files;
use super::{Result, SiteError};
use crate::Page;

/// Render one Markdown file through `template` and write it to `dest`.
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<()> {
    log::info!(
        "generating page from {} to {}",
        from.display(),
        dest.display()
    );

    let markdown = fs::read_to_string(from).map_err(SiteError::io(from))?;
    let page = Page::from_markdown(&markdown).map_err(|source| SiteError::Convert {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }
    fs::write(dest, page.apply_to(template)).map_err(SiteError::io(dest))
}

/// Generate a page for every `.md` file under `content_dir`.
///
/// `content_dir/a/b.md` is written to `dest_dir/a/b.html`. Returns the
/// written paths; stops at the first failure.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;
    log::debug!("using template {}", template_path.display());

    let mut written = Vec::new();
    for source in find_markdown_files(content_dir)? {
        let dest = dest_path(content_dir, &source, dest_dir);
        generate_page(&source, &template, &dest)?;
        written.push(dest);
    }
    Ok(written)
}

/// Mirror `source` from `content_dir` into `dest_dir` with an `.html` suffix.
fn dest_path(content_dir: &Path, source: &Path, dest_dir: &Path) -> PathBuf {
    let rel = source.strip_prefix(content_dir).unwrap_or(source);
    dest_dir.join(rel).with_extension("html")
}
