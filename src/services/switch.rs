use std::path::Path;

use serde::Serialize;

use crate::claude_settings;
use crate::config::{delete_file, get_claude_settings_path, write_json_file};
use crate::credentials::CredentialStore;
use crate::error::AppError;
use crate::gitignore;
use crate::profile::{ActivateOptions, ProviderProfile, PROFILES};

/// 停用的结果，命令层据此决定输出措辞
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisableOutcome {
    /// settings.json 不存在，无事可做
    NothingToDo,
    /// 移除字段后文件仍有内容，已回写
    SettingsUpdated,
    /// 对象已空，settings.json 已删除
    SettingsRemoved,
}

/// 项目当前的供应商开关状态
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatus {
    pub settings_path: String,
    pub settings_exists: bool,
    pub active_profile: Option<String>,
    pub glm_key_configured: bool,
}

/// 供应商开关的业务逻辑；同一对 enable/disable 驱动所有 profile
pub struct SwitchService;

impl SwitchService {
    /// 激活 profile：向项目 settings.json 注入其 env 与顶层字段，
    /// 并登记 .gitignore 条目。返回是否新追加了该条目。
    pub fn enable(
        project_dir: &Path,
        profile: &'static ProviderProfile,
        opts: &ActivateOptions,
    ) -> Result<bool, AppError> {
        // 先解析凭据与参数，失败时不触碰项目文件
        let api_key = if profile.requires_api_key() {
            CredentialStore::load()?.glm_api_key().map(str::to_string)
        } else {
            None
        };
        let resolved = profile.resolve(api_key.as_deref(), opts)?;

        let settings_path = get_claude_settings_path(project_dir);
        let mut root = claude_settings::load_settings(&settings_path)?
            .unwrap_or_else(|| serde_json::json!({}));

        claude_settings::inject_profile(&mut root, &resolved)?;
        write_json_file(&settings_path, &root)?;
        log::debug!("已写入 {}", settings_path.display());

        gitignore::ensure_ignore_entry(project_dir)
    }

    /// 停用 profile：精确移除其拥有的字段；对象随之清空时删除文件
    pub fn disable(
        project_dir: &Path,
        profile: &'static ProviderProfile,
    ) -> Result<DisableOutcome, AppError> {
        let settings_path = get_claude_settings_path(project_dir);
        let Some(mut root) = claude_settings::load_settings(&settings_path)? else {
            return Ok(DisableOutcome::NothingToDo);
        };

        let changed = claude_settings::strip_profile(&mut root, profile)?;

        if claude_settings::is_settings_empty(&root) {
            delete_file(&settings_path)?;
            log::debug!("已删除空的 {}", settings_path.display());
            return Ok(DisableOutcome::SettingsRemoved);
        }

        if changed {
            write_json_file(&settings_path, &root)?;
        }
        Ok(DisableOutcome::SettingsUpdated)
    }

    /// 汇总当前项目的开关状态
    pub fn status(project_dir: &Path) -> Result<SwitchStatus, AppError> {
        let settings_path = get_claude_settings_path(project_dir);
        let root = claude_settings::load_settings(&settings_path)?;

        let active_profile = root.as_ref().and_then(|root| {
            PROFILES
                .iter()
                .find(|profile| claude_settings::profile_is_active(root, profile))
                .map(|profile| profile.id.to_string())
        });

        let glm_key_configured = CredentialStore::load()?.glm_api_key().is_some();

        Ok(SwitchStatus {
            settings_path: settings_path.display().to_string(),
            settings_exists: root.is_some(),
            active_profile,
            glm_key_configured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::BEDROCK;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn read_settings(project: &Path) -> Value {
        let content = fs::read_to_string(get_claude_settings_path(project)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    fn seed_settings(project: &Path, value: &Value) {
        let path = get_claude_settings_path(project);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    // Bedrock never reads the credential store, so these cases need no HOME redirect.

    #[test]
    fn enable_bedrock_writes_settings_and_gitignore() {
        let project = TempDir::new().unwrap();

        let appended =
            SwitchService::enable(project.path(), &BEDROCK, &ActivateOptions::default()).unwrap();

        assert!(appended);
        let root = read_settings(project.path());
        assert_eq!(root["env"]["AWS_PROFILE"], "sjmbrprofile");
        assert_eq!(root["model"], "eu.anthropic.claude-opus-4-5-20251101-v1:0");
        let gitignore = fs::read_to_string(project.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, ".claude/settings.json\n");
    }

    #[test]
    fn disable_without_settings_file_is_a_noop() {
        let project = TempDir::new().unwrap();

        let outcome = SwitchService::disable(project.path(), &BEDROCK).unwrap();

        assert_eq!(outcome, DisableOutcome::NothingToDo);
        assert!(!get_claude_settings_path(project.path()).exists());
    }

    #[test]
    fn disable_keeps_file_while_unrelated_fields_remain() {
        let project = TempDir::new().unwrap();
        seed_settings(project.path(), &json!({"foo": 1}));

        SwitchService::enable(project.path(), &BEDROCK, &ActivateOptions::default()).unwrap();
        let outcome = SwitchService::disable(project.path(), &BEDROCK).unwrap();

        assert_eq!(outcome, DisableOutcome::SettingsUpdated);
        assert_eq!(read_settings(project.path()), json!({"foo": 1}));
    }

    #[test]
    fn disable_removes_file_when_object_becomes_empty() {
        let project = TempDir::new().unwrap();

        SwitchService::enable(project.path(), &BEDROCK, &ActivateOptions::default()).unwrap();
        let outcome = SwitchService::disable(project.path(), &BEDROCK).unwrap();

        assert_eq!(outcome, DisableOutcome::SettingsRemoved);
        assert!(!get_claude_settings_path(project.path()).exists());
        // The .gitignore entry stays behind.
        let gitignore = fs::read_to_string(project.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, ".claude/settings.json\n");
    }

    #[test]
    fn malformed_settings_fail_both_directions() {
        let project = TempDir::new().unwrap();
        let path = get_claude_settings_path(project.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let enable_err =
            SwitchService::enable(project.path(), &BEDROCK, &ActivateOptions::default())
                .unwrap_err();
        assert!(matches!(enable_err, AppError::Json { .. }));

        let disable_err = SwitchService::disable(project.path(), &BEDROCK).unwrap_err();
        assert!(matches!(disable_err, AppError::Json { .. }));

        // The file keeps its original content.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
