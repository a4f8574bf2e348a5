//! Command-line arguments for the `dormkit` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "dormkit",
    about = "Scripted room layout editor: reads designer commands from a file or stdin",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
pub struct Cli {
    /// Config file (TOML or JSON). Defaults to the user config directory.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command script to run. Reads stdin when omitted.
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}
