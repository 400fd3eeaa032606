use indexmap::IndexMap;

use crate::error::AppError;

/// bedrock-on 未指定 --profile 时使用的 AWS profile
pub const DEFAULT_AWS_PROFILE: &str = "sjmbrprofile";
/// bedrock-on 未指定 --region 时使用的区域
pub const DEFAULT_AWS_REGION: &str = "eu-west-1";

const GLM_BASE_URL: &str = "https://open.bigmodel.cn/api/anthropic";
const GLM_API_TIMEOUT_MS: &str = "3000000";
const GLM_SONNET_MODEL: &str = "glm-4.6";
const GLM_OPUS_MODEL: &str = "glm-4.6";
const GLM_HAIKU_MODEL: &str = "glm-4.5-air";
const BEDROCK_MODEL: &str = "eu.anthropic.claude-opus-4-5-20251101-v1:0";

/// env 字段的取值来源：固定字面量，或激活时才解析的动态值
#[derive(Debug, Clone, Copy)]
enum EnvValue {
    Literal(&'static str),
    /// 凭据存储中的 GLM API Key
    StoredApiKey,
    /// --profile 参数，缺省 DEFAULT_AWS_PROFILE
    AwsProfile,
    /// --region 参数，缺省 DEFAULT_AWS_REGION
    AwsRegion,
}

struct EnvField {
    key: &'static str,
    value: EnvValue,
}

/// 供应商配置模板。一张静态表同时驱动激活（写哪些键）与停用
/// （删哪些键），两侧永远一致。
pub struct ProviderProfile {
    pub id: &'static str,
    pub label: &'static str,
    env: &'static [EnvField],
    top_level: &'static [(&'static str, &'static str)],
}

/// GLM（智谱开放平台的 Anthropic 兼容端点）
pub static GLM: ProviderProfile = ProviderProfile {
    id: "glm",
    label: "GLM",
    env: &[
        EnvField {
            key: "ANTHROPIC_BASE_URL",
            value: EnvValue::Literal(GLM_BASE_URL),
        },
        EnvField {
            key: "ANTHROPIC_AUTH_TOKEN",
            value: EnvValue::StoredApiKey,
        },
        EnvField {
            key: "API_TIMEOUT_MS",
            value: EnvValue::Literal(GLM_API_TIMEOUT_MS),
        },
        EnvField {
            key: "ANTHROPIC_DEFAULT_SONNET_MODEL",
            value: EnvValue::Literal(GLM_SONNET_MODEL),
        },
        EnvField {
            key: "ANTHROPIC_DEFAULT_OPUS_MODEL",
            value: EnvValue::Literal(GLM_OPUS_MODEL),
        },
        EnvField {
            key: "ANTHROPIC_DEFAULT_HAIKU_MODEL",
            value: EnvValue::Literal(GLM_HAIKU_MODEL),
        },
        EnvField {
            key: "IS_DEMO",
            value: EnvValue::Literal("true"),
        },
    ],
    top_level: &[],
};

/// AWS Bedrock
pub static BEDROCK: ProviderProfile = ProviderProfile {
    id: "bedrock",
    label: "AWS Bedrock",
    env: &[
        EnvField {
            key: "CLAUDE_CODE_USE_BEDROCK",
            value: EnvValue::Literal("1"),
        },
        EnvField {
            key: "AWS_PROFILE",
            value: EnvValue::AwsProfile,
        },
        EnvField {
            key: "AWS_REGION",
            value: EnvValue::AwsRegion,
        },
        EnvField {
            key: "IS_DEMO",
            value: EnvValue::Literal("true"),
        },
    ],
    top_level: &[("model", BEDROCK_MODEL)],
};

/// 全部内置供应商（status 检测按此顺序）
pub static PROFILES: [&ProviderProfile; 2] = [&GLM, &BEDROCK];

/// 激活时来自命令行的可选参数
#[derive(Debug, Default, Clone)]
pub struct ActivateOptions {
    pub aws_profile: Option<String>,
    pub aws_region: Option<String>,
}

/// 解析完成的 profile：键值均已定形，可直接写入 settings.json
pub struct ResolvedProfile {
    pub env: IndexMap<&'static str, String>,
    pub top_level: IndexMap<&'static str, String>,
}

impl ProviderProfile {
    /// 该 profile 在 env 中拥有的全部字段名，停用时按此精确删除
    pub fn owned_env_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.env.iter().map(|field| field.key)
    }

    /// 该 profile 拥有的顶层字段名
    pub fn owned_top_level_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.top_level.iter().map(|(key, _)| *key)
    }

    /// 激活前是否要求已配置全局 GLM API Key
    pub fn requires_api_key(&self) -> bool {
        self.env
            .iter()
            .any(|field| matches!(field.value, EnvValue::StoredApiKey))
    }

    /// 把模板解析为具体键值。引用凭据的字段在 `api_key` 缺失时报
    /// MissingApiKey，调用方应在触碰项目文件之前完成这一步。
    pub fn resolve(
        &'static self,
        api_key: Option<&str>,
        opts: &ActivateOptions,
    ) -> Result<ResolvedProfile, AppError> {
        let mut env = IndexMap::with_capacity(self.env.len());
        for field in self.env {
            let value = match field.value {
                EnvValue::Literal(v) => v.to_string(),
                EnvValue::StoredApiKey => api_key.ok_or(AppError::MissingApiKey)?.to_string(),
                EnvValue::AwsProfile => opts
                    .aws_profile
                    .clone()
                    .unwrap_or_else(|| DEFAULT_AWS_PROFILE.to_string()),
                EnvValue::AwsRegion => opts
                    .aws_region
                    .clone()
                    .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            };
            env.insert(field.key, value);
        }

        let top_level = self
            .top_level
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();

        Ok(ResolvedProfile { env, top_level })
    }
}
