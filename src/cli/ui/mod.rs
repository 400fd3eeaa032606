mod colors;

pub use colors::{error, highlight, info, success, warning};

use serde::Serialize;

/// --json 输出统一用两空格缩进
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
