use crate::bump::{
    README_FILE,
    readme::read_stable_version,
    remote::{prompt_manual_version, resolve_remote_versions},
    slug::resolve_plugin_slug,
    update::{StagedFile, plugin_rules, readme_rules},
};
use crate::error::BumpError;
use crate::types::{
    remote::RemoteVersions,
    version::{Bump, Version},
};
use crate::utils::{
    api::Endpoints,
    fs::read_text,
    logger::{LogLevel, Logger},
};
use std::fmt;
use std::path::Path;

/// One entry of the bump menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpChoice {
    pub bump: Bump,
    pub version: Version,
}

impl fmt::Display for BumpChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.bump.label(), self.version)
    }
}

pub fn bump_choices(current: &Version) -> Vec<BumpChoice> {
    Bump::ALL
        .iter()
        .map(|&bump| BumpChoice {
            bump,
            version: current.bump(bump),
        })
        .collect()
}

pub fn prompt_new_version(current: &Version) -> Result<Version, BumpError> {
    let choice = inquire::Select::new("Select the version bump:", bump_choices(current))
        .with_starting_cursor(0)
        .prompt()?;
    Ok(choice.version)
}

/// Runs the whole bump in `cwd`: read the stable tag, ask for the bump, find the
/// main plugin file, fetch compatibility targets, then rewrite both files.
pub async fn prompt_bump_plugin(cwd: &Path) -> Result<(), BumpError> {
    println!();
    println!("⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯");
    println!("WordPress Plugin Version Bump");
    println!("⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯");
    println!();

    let logger = Logger::new();

    let readme_path = cwd.join(README_FILE);
    let readme = read_text(&readme_path)?;
    let current = read_stable_version(&readme, &readme_path)?;
    logger.log_message(LogLevel::Info, &format!("Current version: {}", current));

    let new_version = prompt_new_version(&current)?;

    let slug = resolve_plugin_slug(cwd)?;
    let plugin_path = slug.main_file(cwd);
    logger.log_message(
        LogLevel::Info,
        &format!("Plugin '{}' ({})", slug.as_str(), plugin_path.display()),
    );

    let remote = resolve_remote_versions(&Endpoints::from_env(), prompt_manual_version).await?;

    let staged = stage_bump(&readme_path, readme, &plugin_path, &new_version, &remote)?;
    commit_all(&staged, &new_version, &remote)?;

    logger.log_message(
        LogLevel::Success,
        &format!("Bumped {} -> {}", current, new_version),
    );

    Ok(())
}

/// Computes the new contents of both files without touching the disk, so a
/// read failure on the plugin file cannot leave the readme half-bumped.
pub fn stage_bump(
    readme_path: &Path,
    readme: String,
    plugin_path: &Path,
    new_version: &Version,
    remote: &RemoteVersions,
) -> Result<[StagedFile; 2], BumpError> {
    let new_version = new_version.to_string();
    let readme_rules = readme_rules(&new_version, remote)?;
    let readme = StagedFile::from_contents(readme_path, readme, &readme_rules);
    let plugin = StagedFile::stage(plugin_path, &plugin_rules(&new_version, remote)?)?;
    Ok([readme, plugin])
}

/// Writes the staged files in order. Each write is all-or-nothing, the pair is not:
/// an interruption between the two leaves only the first updated.
pub fn commit_all(
    staged: &[StagedFile],
    new_version: &Version,
    remote: &RemoteVersions,
) -> Result<(), BumpError> {
    let logger = Logger::new();
    for file in staged {
        if file.commit()? {
            logger.log_message_with_trace(
                LogLevel::Success,
                &format!("Updated {}", file.path.display()),
                &[
                    format!("Version: {}", new_version),
                    format!("Tested up to: {}", remote.wordpress),
                    format!("WC tested up to: {}", remote.woocommerce),
                ],
            );
        } else {
            logger.log_message(
                LogLevel::Warning,
                &format!("No matching fields in {}, left unchanged", file.path.display()),
            );
        }
    }
    Ok(())
}
