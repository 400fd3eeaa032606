use std::path::Path;

use thiserror::Error;

/// 统一错误类型：底层携带路径上下文，命令层只负责展示
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件系统错误，附带出错路径
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析失败，附带出错路径
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// 配置形状不符合预期（例如根节点不是对象）
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    /// glm-on 的前置条件：必须先 set-glm-key
    #[error("GLM API key not configured. Run `ccsw set-glm-key <key>` first.")]
    MissingApiKey,

    #[error("{0}")]
    Message(String),
}

impl AppError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
