use std::env;
use std::path::PathBuf;

use crate::cli::ui::{info, success};
use crate::error::AppError;
use crate::profile::ProviderProfile;
use crate::services::DisableOutcome;

pub mod bedrock;
pub mod glm;
pub mod key;
pub mod status;

/// 以当前工作目录作为项目根
pub(crate) fn current_project_dir() -> Result<PathBuf, AppError> {
    env::current_dir()
        .map_err(|e| AppError::Message(format!("failed to resolve current directory: {e}")))
}

pub(crate) fn report_enabled(profile: &ProviderProfile, ignore_added: bool) {
    println!(
        "{}",
        success(&format!("✓ {} provider enabled for this project", profile.label))
    );
    if ignore_added {
        println!("{}", info("  Added .claude/settings.json to .gitignore"));
    }
    println!("{}", info("Note: Restart Claude Code to apply the changes."));
}

pub(crate) fn report_disabled(profile: &ProviderProfile, outcome: DisableOutcome) {
    match outcome {
        DisableOutcome::NothingToDo => {
            println!("{}", info("No settings file found; nothing to do."));
        }
        DisableOutcome::SettingsUpdated => {
            println!(
                "{}",
                success(&format!("✓ {} provider disabled", profile.label))
            );
        }
        DisableOutcome::SettingsRemoved => {
            println!(
                "{}",
                success(&format!(
                    "✓ {} provider disabled (settings file removed)",
                    profile.label
                ))
            );
        }
    }
}
