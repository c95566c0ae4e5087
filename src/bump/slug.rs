use crate::bump::header_field_pattern;
use crate::error::BumpError;
use crate::utils::fs::{list_files_with_extension, read_text_lossy};
use std::path::{Path, PathBuf};

/// The plugin's text domain, doubling as the name of its main file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSlug(String);

impl PluginSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn main_file(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.php", self.0))
    }
}

/// Scans the `.php` files directly under `dir`, in listing order, and returns the
/// first `Text Domain:` value found, lower-cased. Files that are not valid UTF-8
/// are still searched.
pub fn resolve_plugin_slug(dir: &Path) -> Result<PluginSlug, BumpError> {
    let re = header_field_pattern("Text Domain")?;

    for file in list_files_with_extension(dir, "php")? {
        let contents = read_text_lossy(&file)?;
        let found = re
            .captures(&contents)
            .and_then(|caps| caps.name("value"))
            .map(|m| m.as_str())
            .filter(|v| !v.is_empty());
        if let Some(slug) = found {
            return Ok(PluginSlug(slug.to_lowercase()));
        }
    }

    Err(BumpError::missing_field("Text Domain", dir.join("*.php")))
}
