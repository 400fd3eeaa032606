use crate::cli::ui::{info, success};
use crate::credentials::CredentialStore;
use crate::error::AppError;

/// 写入全局 GLM API Key
pub fn execute(key: &str) -> Result<(), AppError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::InvalidInput("API key must not be empty".into()));
    }

    let mut store = CredentialStore::load()?;
    store.set_glm_api_key(key);
    store.save()?;

    println!(
        "{}",
        success(&format!("✓ GLM API key saved ({})", mask_api_key(key)))
    );
    println!("{}", info(&format!("  Stored in: {}", store.path().display())));
    Ok(())
}

/// 脱敏显示 API Key（前 8 个字符 + ...）
fn mask_api_key(key: &str) -> String {
    let mut iter = key.chars();
    let prefix: String = iter.by_ref().take(8).collect();
    if iter.next().is_some() {
        format!("{prefix}...")
    } else {
        prefix
    }
}
