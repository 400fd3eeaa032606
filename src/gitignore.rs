use std::fs;
use std::path::Path;

use crate::config::{atomic_write, get_gitignore_path, CLAUDE_SETTINGS_IGNORE_ENTRY};
use crate::error::AppError;

/// 确保项目 .gitignore 含有 settings.json 条目，必要时建文件。
/// 按整行（去除首尾空白）精确比较，子串命中不算存在。
/// 返回是否实际追加了条目；停用操作从不回收该条目。
pub fn ensure_ignore_entry(project_dir: &Path) -> Result<bool, AppError> {
    let path = get_gitignore_path(project_dir);

    let existing = if path.exists() {
        fs::read_to_string(&path).map_err(|e| AppError::io(&path, e))?
    } else {
        String::new()
    };

    let present = existing
        .lines()
        .any(|line| line.trim() == CLAUDE_SETTINGS_IGNORE_ENTRY);
    if present {
        return Ok(false);
    }

    let mut content = existing;
    // 已有内容且末尾缺换行时先补一个分隔换行
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(CLAUDE_SETTINGS_IGNORE_ENTRY);
    content.push('\n');

    atomic_write(&path, content.as_bytes())?;
    Ok(true)
}
