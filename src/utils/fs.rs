use crate::error::BumpError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn get_cwd() -> Result<PathBuf, BumpError> {
    std::env::current_dir().map_err(|e| BumpError::filesystem(".", e))
}

pub fn read_text(path: &Path) -> Result<String, BumpError> {
    fs::read_to_string(path).map_err(|e| BumpError::filesystem(path, e))
}

/// Like `read_text`, but invalid UTF-8 sequences become U+FFFD instead of failing.
pub fn read_text_lossy(path: &Path) -> Result<String, BumpError> {
    let bytes = fs::read(path).map_err(|e| BumpError::filesystem(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Regular files directly under `dir` with the given extension, in directory-listing order.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BumpError> {
    let rd = fs::read_dir(dir).map_err(|e| BumpError::filesystem(dir, e))?;
    let mut files = Vec::new();
    for entry in rd {
        let entry = entry.map_err(|e| BumpError::filesystem(dir, e))?;
        let p = entry.path();
        let matches_ext = p
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches_ext && p.is_file() {
            files.push(p);
        }
    }
    Ok(files)
}

/// Replaces `path` with `contents` through a sibling temp file and a rename,
/// so readers never observe a partially written file.
pub fn write_text_replacing(path: &Path, contents: &str) -> Result<(), BumpError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| BumpError::filesystem(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| BumpError::filesystem(tmp.path(), e))?;
    if let Ok(meta) = fs::metadata(path) {
        let _ = fs::set_permissions(tmp.path(), meta.permissions());
    }
    tmp.persist(path)
        .map_err(|e| BumpError::filesystem(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_top_level_files_with_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.php"), "").unwrap();
        fs::write(dir.path().join("b.PHP"), "").unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();
        fs::create_dir(dir.path().join("inc")).unwrap();
        fs::write(dir.path().join("inc").join("nested.php"), "").unwrap();
        fs::create_dir(dir.path().join("dir.php")).unwrap();

        let mut names: Vec<String> = list_files_with_extension(dir.path(), "php")
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().and_then(|s| s.to_str()).map(String::from))
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.php", "b.PHP"]);
    }

    #[test]
    fn replaces_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("readme.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        write_text_replacing(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn lossy_read_tolerates_latin1_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("helpers.php");
        fs::write(&path, b"<?php // caf\xe9\n").unwrap();

        assert!(read_text(&path).is_err());
        assert_eq!(read_text_lossy(&path).unwrap(), "<?php // caf\u{fffd}\n");
    }

    #[test]
    fn read_text_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = read_text(&missing).unwrap_err();
        assert!(matches!(err, BumpError::Filesystem { ref path, .. } if *path == missing));
    }
}
