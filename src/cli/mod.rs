use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "ccsw",
    version,
    about = "Toggle GLM / AWS Bedrock provider settings for Claude Code",
    long_about = "Switches the current project between the GLM and AWS Bedrock providers by editing .claude/settings.json in place, keeping unrelated settings intact.\n\nThe settings file is registered in .gitignore so credentials never reach version control."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the GLM API key in the global config (~/.ccsw/config.json)
    SetGlmKey {
        /// API key issued by the GLM open platform
        key: String,
    },

    /// Switch the current project to the GLM provider
    GlmOn,

    /// Remove the GLM provider settings from the current project
    GlmOff,

    /// Switch the current project to AWS Bedrock
    BedrockOn {
        /// AWS profile to use [default: sjmbrprofile]
        #[arg(long)]
        profile: Option<String>,

        /// AWS region to use [default: eu-west-1]
        #[arg(long)]
        region: Option<String>,
    },

    /// Remove the AWS Bedrock provider settings from the current project
    BedrockOff,

    /// Show which provider is active for the current project
    Status {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Generate shell completions
pub fn generate_completions(shell: Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
