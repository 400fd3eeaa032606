// Core modules
mod claude_settings;
mod config;
mod credentials;
mod error;
mod gitignore;
mod profile;
mod services;

// CLI module
pub mod cli;

// Public exports
pub use claude_settings::{
    inject_profile, is_settings_empty, load_settings, profile_is_active, strip_profile,
};
pub use config::{
    get_app_config_dir, get_app_config_path, get_claude_settings_path, get_gitignore_path,
    read_json_file, write_json_file, CLAUDE_SETTINGS_IGNORE_ENTRY,
};
pub use credentials::{CredentialStore, GLM_API_KEY_FIELD};
pub use error::AppError;
pub use gitignore::ensure_ignore_entry;
pub use profile::{
    ActivateOptions, ProviderProfile, ResolvedProfile, BEDROCK, DEFAULT_AWS_PROFILE,
    DEFAULT_AWS_REGION, GLM, PROFILES,
};
pub use services::{DisableOutcome, SwitchService, SwitchStatus};
