//! Directory helpers for the site build.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Result, SiteError};

/// Remove everything inside `dst`, keeping `dst` itself.
///
/// Creates `dst` if it does not exist.
pub fn empty_dir(dst: &Path) -> Result<()> {
    if !dst.exists() {
        return fs::create_dir_all(dst).map_err(SiteError::io(dst));
    }

    for entry in fs::read_dir(dst).map_err(SiteError::io(dst))? {
        let path = entry.map_err(SiteError::io(dst))?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(SiteError::io(&path))?;
        } else {
            fs::remove_file(&path).map_err(SiteError::io(&path))?;
        }
    }
    Ok(())
}

/// Recursively copy the contents of `src` into `dst`.
///
/// Returns the number of files copied.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in fs::read_dir(src).map_err(SiteError::io(src))? {
        let path = entry.map_err(SiteError::io(src))?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);

        if path.is_dir() {
            fs::create_dir_all(&target).map_err(SiteError::io(&target))?;
            copied += copy_dir(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(SiteError::io(&path))?;
            log::debug!("copied: {} -> {}", path.display(), target.display());
            copied += 1;
        }
    }

    Ok(copied)
}

/// Replace the contents of `dst` with a copy of `src`.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(SiteError::MissingSource(src.to_path_buf()));
    }
    fs::create_dir_all(dst).map_err(SiteError::io(dst))?;
    empty_dir(dst)?;
    copy_dir(src, dst)
}

/// Every `.md` file under `root`, sorted.
pub fn find_markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SiteError::MissingSource(root.to_path_buf()));
    }
    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(SiteError::io(dir))? {
        let path = entry.map_err(SiteError::io(dir))?.path();
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_empty_dir_keeps_root() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.txt", "a");
        write(tmp.path(), "nested/b.txt", "b");

        empty_dir(tmp.path()).unwrap();

        assert!(tmp.path().is_dir());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_dir_creates_missing() {
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("public");
        empty_dir(&dst).unwrap();
        assert!(dst.is_dir());
    }

    #[test]
    fn test_copy_static_replaces_contents() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("static");
        let dst = tmp.path().join("public");
        write(&src, "index.css", "body {}");
        write(&src, "images/logo.png", "png");
        write(&dst, "stale.html", "old");

        let copied = copy_static(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert!(!dst.join("stale.html").exists());
        assert_eq!(fs::read_to_string(dst.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dst.join("images/logo.png")).unwrap(), "png");
    }

    #[test]
    fn test_copy_static_missing_source() {
        let tmp = TempDir::new().unwrap();
        let result = copy_static(&tmp.path().join("nope"), &tmp.path().join("public"));
        assert!(matches!(result, Err(SiteError::MissingSource(_))));
    }

    #[test]
    fn test_find_markdown_files_nested_and_sorted() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "index.md", "# Home");
        write(tmp.path(), "blog/post.md", "# Post");
        write(tmp.path(), "blog/image.png", "png");
        write(tmp.path(), "about.md", "# About");

        let files = find_markdown_files(tmp.path()).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("about.md"),
                PathBuf::from("blog/post.md"),
                PathBuf::from("index.md"),
            ]
        );
    }
}
