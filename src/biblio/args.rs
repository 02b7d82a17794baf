use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(about = "Run library catalog command scripts", long_about = None)]
pub struct Cli {
    /// Command script to execute, one command per line (reads stdin when
    /// omitted)
    pub script: Option<PathBuf>,
}
