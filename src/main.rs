use crate::utils::{
    fs::get_cwd,
    logger::{LogLevel, Logger},
    version::{get_version, get_version_with_signature},
};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::process::ExitCode;

mod bump;
mod error;
mod types;
mod utils;

/// Bumps the version of the WordPress plugin in the current directory.
///
/// Reads `Stable tag:` from readme.txt, asks for a patch/minor/major bump, finds
/// the main plugin file through its `Text Domain:` header, and rewrites both
/// files with the new version and the latest WordPress/WooCommerce releases.
#[derive(Parser)]
#[command(name = "wpbump")]
#[command(author = "Labscend Studios")]
#[command(about = "Bump a WordPress plugin's version and refresh its compatibility headers")]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let version_static: &'static str = Box::leak(format!("v{}", get_version()).into_boxed_str());

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().skip(1).any(|a| a == "--version" || a == "-V") {
        println!("{}", get_version_with_signature());
        return ExitCode::SUCCESS;
    }

    let cmd = Cli::command().version(version_static);
    let matches = cmd.get_matches();
    if let Err(e) = Cli::from_arg_matches(&matches) {
        e.exit();
    }

    let result = match get_cwd() {
        Ok(cwd) => bump::prompt::prompt_bump_plugin(&cwd).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Logger::new().log_message(LogLevel::Error, &e.to_string());
            ExitCode::FAILURE
        }
    }
}
