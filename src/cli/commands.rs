use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("to.do v", env!("CARGO_PKG_VERSION"), " - a small terminal to-do list"), version)]
pub struct Cli {
    /// Read configuration from this file instead of ./todo.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides [log] file)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Add a task before the UI starts (repeatable)
    #[arg(short, long = "task", value_name = "TITLE")]
    pub task: Vec<String>,
}
