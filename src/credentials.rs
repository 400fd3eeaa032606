use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::{get_app_config_path, read_json_file, write_json_file};
use crate::error::AppError;

/// 全局凭据记录中 GLM API Key 的字段名
pub const GLM_API_KEY_FIELD: &str = "glmApiKey";

/// 全局凭据存储（~/.ccsw/config.json）。
/// 显式 load/save，不做进程级缓存；记录中未知字段原样保留。
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    record: Map<String, Value>,
}

impl CredentialStore {
    /// 从默认路径加载；文件不存在视为一条空记录，首次 save 时才落盘
    pub fn load() -> Result<Self, AppError> {
        let path = get_app_config_path();
        let record = if path.exists() {
            match read_json_file::<Value>(&path)? {
                Value::Object(map) => map,
                _ => {
                    return Err(AppError::Config(format!(
                        "凭据文件 {} 根必须是对象",
                        path.display()
                    )));
                }
            }
        } else {
            Map::new()
        };
        Ok(Self { path, record })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 已存储的 GLM API Key；从未设置时为 None
    pub fn glm_api_key(&self) -> Option<&str> {
        self.record.get(GLM_API_KEY_FIELD).and_then(Value::as_str)
    }

    /// 覆盖写入 GLM API Key，其余字段保持不动
    pub fn set_glm_api_key(&mut self, key: &str) {
        self.record
            .insert(GLM_API_KEY_FIELD.to_string(), Value::String(key.to_string()));
    }

    /// 持久化记录，必要时创建 ~/.ccsw 目录
    pub fn save(&self) -> Result<(), AppError> {
        write_json_file(&self.path, &Value::Object(self.record.clone()))
    }
}
