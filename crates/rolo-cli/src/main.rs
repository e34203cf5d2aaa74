//! Rolo CLI Application
//!
//! Interactive command shell for the rolo contact directory. The directory
//! is loaded once at startup, mutated through shell commands, and saved once
//! at normal termination.

mod args;
mod commands;
mod repl;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use rolo_core::StoreBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args { data_file } = Args::parse();

    let store = StoreBuilder::new()
        .with_data_path(data_file)
        .build()
        .context("Failed to initialize contact store")?;

    let mut book = store
        .load()
        .context("Failed to load the address book")?;

    info!("Rolo started with {} record(s)", book.len());
    println!("Welcome to the address book!");

    repl::run(&mut book).context("Command loop failed")?;

    // A failed save at shutdown is a data loss risk; surface it, never
    // swallow it.
    store
        .save(&book)
        .context("Failed to save the address book")?;

    println!("Good bye!");
    Ok(())
}
