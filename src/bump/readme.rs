use crate::bump::header_field_pattern;
use crate::error::BumpError;
use crate::types::version::Version;
use std::path::Path;

/// Reads the `Stable tag:` value out of readme contents. `path` is only used for
/// error reporting.
pub fn read_stable_version(contents: &str, path: &Path) -> Result<Version, BumpError> {
    let re = header_field_pattern("Stable tag")?;

    let value = re
        .captures(contents)
        .and_then(|caps| caps.name("value"))
        .map(|m| m.as_str())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BumpError::missing_field("Stable tag", path))?;

    value.parse()
}
