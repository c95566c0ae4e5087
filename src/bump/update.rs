use crate::bump::header_field_pattern;
use crate::error::BumpError;
use crate::types::remote::RemoteVersions;
use crate::utils::fs::{read_text, write_text_replacing};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

/// `define( 'ANYTHING_VERSION', '<value>' )`, any quotes and spacing.
const VERSION_CONSTANT_PATTERN: &str = concat!(
    r#"(?P<prefix>\b(?i:define)\s*\(\s*['"][A-Za-z0-9_]*_VERSION['"]\s*,\s*['"])"#,
    r#"(?P<value>[^'"\r\n]*)"#,
    r#"(?P<suffix>['"])"#,
);

/// A pattern whose `value` group is swapped for a fixed string. Everything captured
/// as `prefix`/`suffix` is written back untouched.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pattern: Regex,
    value: String,
}

impl ReplacementRule {
    pub fn header(field: &str, value: &str) -> Result<Self, BumpError> {
        Ok(ReplacementRule {
            pattern: header_field_pattern(field)?,
            value: value.to_string(),
        })
    }

    pub fn version_constants(value: &str) -> Result<Self, BumpError> {
        Ok(ReplacementRule {
            pattern: Regex::new(VERSION_CONSTANT_PATTERN)?,
            value: value.to_string(),
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let prefix = caps.name("prefix").map_or("", |m| m.as_str());
                let suffix = caps.name("suffix").map_or("", |m| m.as_str());
                let current = caps.name("value").map_or("", |m| m.as_str());
                let mut out = String::with_capacity(prefix.len() + self.value.len() + suffix.len());
                out.push_str(prefix);
                // "Tested up to:" with no value yet
                if current.is_empty() && prefix.ends_with(':') {
                    out.push(' ');
                }
                out.push_str(&self.value);
                out.push_str(suffix);
                out
            })
            .into_owned()
    }
}

pub fn apply_rules(text: &str, rules: &[ReplacementRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

pub fn readme_rules(
    new_version: &str,
    remote: &RemoteVersions,
) -> Result<Vec<ReplacementRule>, BumpError> {
    Ok(vec![
        ReplacementRule::header("Stable tag", new_version)?,
        ReplacementRule::header("Tested up to", &remote.wordpress)?,
        ReplacementRule::header("WC tested up to", &remote.woocommerce)?,
    ])
}

pub fn plugin_rules(
    new_version: &str,
    remote: &RemoteVersions,
) -> Result<Vec<ReplacementRule>, BumpError> {
    Ok(vec![
        ReplacementRule::header("Version", new_version)?,
        ReplacementRule::header("Stable tag", new_version)?,
        ReplacementRule::header("Tested up to", &remote.wordpress)?,
        ReplacementRule::header("WC tested up to", &remote.woocommerce)?,
        ReplacementRule::version_constants(new_version)?,
    ])
}

/// A file read and rewritten in memory, not yet written back.
#[derive(Debug)]
pub struct StagedFile {
    pub path: PathBuf,
    original: String,
    updated: String,
}

impl StagedFile {
    pub fn stage(path: &Path, rules: &[ReplacementRule]) -> Result<Self, BumpError> {
        let original = read_text(path)?;
        Ok(StagedFile::from_contents(path, original, rules))
    }

    pub fn from_contents(path: &Path, original: String, rules: &[ReplacementRule]) -> Self {
        let updated = apply_rules(&original, rules);
        StagedFile {
            path: path.to_path_buf(),
            original,
            updated,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.original != self.updated
    }

    /// Writes the new contents over the file. Unchanged files are left alone;
    /// returns whether a write happened.
    pub fn commit(&self) -> Result<bool, BumpError> {
        if !self.is_changed() {
            return Ok(false);
        }
        write_text_replacing(&self.path, &self.updated)?;
        Ok(true)
    }
}
