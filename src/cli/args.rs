//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Inspect dialog-state annotation logs as dotted, path-compressed trees
#[derive(Parser, Debug)]
#[command(name = "dstree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Line-delimited JSON conversation log
    #[arg(value_hint = ValueHint::FilePath, required_unless_present_any = ["generator", "info"])]
    pub input_file: Option<PathBuf>,

    /// Maximum number of conversations to print
    #[arg(short, long, default_value_t = 50)]
    pub limit: usize,

    /// Enable debug logging. Use multiple -d options to increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,
}
