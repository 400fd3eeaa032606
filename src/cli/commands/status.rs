use crate::cli::ui::{error, highlight, info, success, to_json, warning};
use crate::error::AppError;
use crate::profile::PROFILES;
use crate::services::SwitchService;

use super::current_project_dir;

/// 展示当前项目的供应商状态
pub fn execute(json: bool) -> Result<(), AppError> {
    let project_dir = current_project_dir()?;
    let status = SwitchService::status(&project_dir)?;

    if json {
        let text = to_json(&status).map_err(|e| AppError::JsonSerialize { source: e })?;
        println!("{text}");
        return Ok(());
    }

    println!("{}", highlight("Provider Status"));
    println!("{}", "=".repeat(50));
    println!("Settings file: {}", status.settings_path);

    if !status.settings_exists {
        println!("{} Settings file does not exist; no provider is active", error("✗"));
        println!("{}", info("Run `ccsw glm-on` or `ccsw bedrock-on` to enable one."));
    } else {
        match &status.active_profile {
            Some(id) => {
                let label = PROFILES
                    .iter()
                    .find(|p| p.id == id.as_str())
                    .map(|p| p.label)
                    .unwrap_or(id.as_str());
                println!("{} Active provider: {}", success("✓"), highlight(label));
            }
            None => {
                println!(
                    "{}",
                    info("Settings file exists, but no managed provider is active.")
                );
            }
        }
    }

    if status.glm_key_configured {
        println!("{} GLM API key is configured", success("✓"));
    } else {
        println!(
            "{} GLM API key not set (run `ccsw set-glm-key <key>`)",
            warning("!")
        );
    }
    Ok(())
}
