use crate::error::AppError;
use crate::profile::{ActivateOptions, GLM};
use crate::services::SwitchService;

use super::{current_project_dir, report_disabled, report_enabled};

/// 为当前项目启用 GLM 供应商
pub fn on() -> Result<(), AppError> {
    let project_dir = current_project_dir()?;
    let ignore_added = SwitchService::enable(&project_dir, &GLM, &ActivateOptions::default())?;
    report_enabled(&GLM, ignore_added);
    Ok(())
}

/// 从当前项目移除 GLM 供应商设置
pub fn off() -> Result<(), AppError> {
    let project_dir = current_project_dir()?;
    let outcome = SwitchService::disable(&project_dir, &GLM)?;
    report_disabled(&GLM, outcome);
    Ok(())
}
