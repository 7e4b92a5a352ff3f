use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use panel_logging::LogDestination;

/// Submit images to the local underwater color correction service.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// RON configuration file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override the correction endpoint URL.
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Report non-2xx responses as errors instead of decoding their body.
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub reject_error_status: bool,

    /// Where log output goes.
    #[arg(long, global = true, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive panel driven by line commands on stdin.
    Panel,
    /// Submit once and print the result.
    Submit(SubmitArgs),
    /// Print the effective configuration as RON.
    PrintConfig,
}

#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    /// Destination URL for the corrected image.
    #[arg(long, value_name = "URL")]
    pub output_url: String,

    /// Source image URL, ignored when --file is given.
    #[arg(long, value_name = "URL", default_value = "")]
    pub image_url: String,

    /// Upload a local image instead of sending a URL.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
