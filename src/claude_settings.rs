//! 对 .claude/settings.json 的纯值级编辑。
//!
//! 所有函数都在 serde_json::Value 上工作，不直接接触文件系统
//! （load_settings 除外），无关字段原样保留。

use std::path::Path;

use serde_json::{Map, Value};

use crate::config::read_json_file;
use crate::error::AppError;
use crate::profile::{ProviderProfile, ResolvedProfile};

/// 读取项目 settings.json；文件不存在返回 None，JSON 损坏直接报错
pub fn load_settings(path: &Path) -> Result<Option<Value>, AppError> {
    if !path.exists() {
        return Ok(None);
    }
    let value: Value = read_json_file(path)?;
    Ok(Some(value))
}

/// 把解析好的 profile 注入 settings 对象：env 逐字段浅覆盖，
/// 顶层字段直接写入。重复注入同一 profile 不产生额外变化。
pub fn inject_profile(root: &mut Value, resolved: &ResolvedProfile) -> Result<(), AppError> {
    let obj = root
        .as_object_mut()
        .ok_or_else(|| AppError::Config("settings.json 根必须是对象".into()))?;

    // 确保 env 子对象存在；已有同名非对象值时按覆盖语义重建
    if !matches!(obj.get("env"), Some(Value::Object(_))) {
        if obj.contains_key("env") {
            log::warn!("settings.json 的 env 字段不是对象，已重建为空对象");
        }
        obj.insert("env".to_string(), Value::Object(Map::new()));
    }

    if let Some(Value::Object(env)) = obj.get_mut("env") {
        for (key, value) in &resolved.env {
            env.insert((*key).to_string(), Value::String(value.clone()));
        }
    }

    for (key, value) in &resolved.top_level {
        obj.insert((*key).to_string(), Value::String(value.clone()));
    }

    Ok(())
}

/// 从 settings 对象删除 profile 拥有的全部字段。env 随之变空时
/// 整个移除，不留 `"env": {}`。返回是否有任何改动。
pub fn strip_profile(root: &mut Value, profile: &ProviderProfile) -> Result<bool, AppError> {
    let obj = root
        .as_object_mut()
        .ok_or_else(|| AppError::Config("settings.json 根必须是对象".into()))?;

    let mut changed = false;

    // 非对象的 env 不含本工具写入的字段，保持原样
    if let Some(Value::Object(env)) = obj.get_mut("env") {
        for key in profile.owned_env_keys() {
            if env.remove(key).is_some() {
                changed = true;
            }
        }
        if env.is_empty() {
            obj.remove("env");
            changed = true;
        }
    }

    for key in profile.owned_top_level_keys() {
        if obj.remove(key).is_some() {
            changed = true;
        }
    }

    Ok(changed)
}

/// settings 对象是否已无任何字段
pub fn is_settings_empty(root: &Value) -> bool {
    root.as_object().is_some_and(|obj| obj.is_empty())
}

/// profile 的全部 env 字段是否都已写入（status 检测用）
pub fn profile_is_active(root: &Value, profile: &ProviderProfile) -> bool {
    let Some(env) = root.get("env").and_then(Value::as_object) else {
        return false;
    };
    profile.owned_env_keys().all(|key| env.contains_key(key))
}
