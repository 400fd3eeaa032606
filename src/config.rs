use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// 写入 .gitignore 的条目；git 侧统一使用正斜杠
pub const CLAUDE_SETTINGS_IGNORE_ENTRY: &str = ".claude/settings.json";

/// 全局配置目录 ~/.ccsw
pub fn get_app_config_dir() -> PathBuf {
    dirs::home_dir().expect("无法获取用户主目录").join(".ccsw")
}

/// 全局凭据文件 ~/.ccsw/config.json
pub fn get_app_config_path() -> PathBuf {
    get_app_config_dir().join("config.json")
}

/// 项目内的 Claude Code 设置文件 <project>/.claude/settings.json
pub fn get_claude_settings_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".claude").join("settings.json")
}

/// 项目内的忽略文件 <project>/.gitignore
pub fn get_gitignore_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".gitignore")
}

/// 读取并反序列化 JSON 文件
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| AppError::json(path, e))
}

/// 序列化为两空格缩进的 JSON 并原子写入，必要时创建父目录
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| AppError::JsonSerialize { source: e })?;
    atomic_write(path, json.as_bytes())
}

/// 先写同目录临时文件再改名，避免留下写了一半的文件
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let parent = path
        .parent()
        .ok_or_else(|| AppError::Config(format!("path '{}' has no parent", path.display())))?;
    fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".ccsw-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| AppError::io(parent, e))?;
    tmp.write_all(bytes).map_err(|e| AppError::io(path, e))?;
    tmp.flush().map_err(|e| AppError::io(path, e))?;
    tmp.persist(path).map_err(|e| AppError::io(path, e.error))?;
    Ok(())
}

pub fn delete_file(path: &Path) -> Result<(), AppError> {
    fs::remove_file(path).map_err(|e| AppError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn write_json_file_creates_parent_dirs_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("data.json");

        write_json_file(&path, &json!({"a": 1})).unwrap();

        let value: Value = read_json_file(&path).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn write_json_file_uses_two_space_indentation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pretty.json");

        write_json_file(&path, &json!({"a": {"b": 1}})).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"a\""), "unexpected layout: {content}");
        assert!(content.contains("\n    \"b\""), "unexpected layout: {content}");
    }

    #[test]
    fn atomic_write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, "old").unwrap();

        atomic_write(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // No temp file should be left behind.
        let stray: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "file.txt")
            .collect();
        assert!(stray.is_empty(), "stray temp files: {stray:?}");
    }

    #[test]
    fn read_json_file_reports_malformed_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json_file::<Value>(&path).unwrap_err();
        assert!(matches!(err, AppError::Json { .. }), "got: {err:?}");
    }
}
