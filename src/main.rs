use ccsw_lib::cli::{Cli, Commands};
use ccsw_lib::AppError;
use clap::Parser;
use std::process;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    let log_level = if cli.verbose {
        "debug"
    } else {
        "error" // 默认只显示错误日志，避免 INFO 日志干扰命令输出
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // 执行命令
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::SetGlmKey { key } => ccsw_lib::cli::commands::key::execute(&key),
        Commands::GlmOn => ccsw_lib::cli::commands::glm::on(),
        Commands::GlmOff => ccsw_lib::cli::commands::glm::off(),
        Commands::BedrockOn { profile, region } => {
            ccsw_lib::cli::commands::bedrock::on(profile, region)
        }
        Commands::BedrockOff => ccsw_lib::cli::commands::bedrock::off(),
        Commands::Status { json } => ccsw_lib::cli::commands::status::execute(json),
        Commands::Completions { shell } => {
            ccsw_lib::cli::generate_completions(shell);
            Ok(())
        }
    }
}
