use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the rolo contact directory
///
/// Rolo is an interactive personal address book. Starting the binary drops
/// into a command shell that reads one command per line (`add`,
/// `add-birthday`, `show-birthday`, `phone`, `birthdays`, `all`, `hello`,
/// `close`/`exit`). The directory is persisted to a single data file between
/// runs.
#[derive(Parser)]
#[command(version, about, name = "rolo")]
pub struct Args {
    /// Path to the directory data file. Defaults to
    /// $XDG_DATA_HOME/rolo/directory.json
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}
