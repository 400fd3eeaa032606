use crate::error::AppError;
use crate::profile::{ActivateOptions, BEDROCK};
use crate::services::SwitchService;

use super::{current_project_dir, report_disabled, report_enabled};

/// 为当前项目启用 AWS Bedrock 供应商
pub fn on(profile: Option<String>, region: Option<String>) -> Result<(), AppError> {
    let project_dir = current_project_dir()?;
    let opts = ActivateOptions {
        aws_profile: profile,
        aws_region: region,
    };
    let ignore_added = SwitchService::enable(&project_dir, &BEDROCK, &opts)?;
    report_enabled(&BEDROCK, ignore_added);
    Ok(())
}

/// 从当前项目移除 AWS Bedrock 供应商设置
pub fn off() -> Result<(), AppError> {
    let project_dir = current_project_dir()?;
    let outcome = SwitchService::disable(&project_dir, &BEDROCK)?;
    report_disabled(&BEDROCK, outcome);
    Ok(())
}
