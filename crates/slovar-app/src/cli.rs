use std::path::PathBuf;

use clap::Parser;

/// Word lookup over a dictionary document
#[derive(Parser, Debug)]
#[command(name = "slovar", version)]
pub struct Args {
    /// Dictionary document (.docx or .txt), overrides config and SLOVAR_DICTIONARY
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// JSON config file, defaults to ./slovar.json when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
