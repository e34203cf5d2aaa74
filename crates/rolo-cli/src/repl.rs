//! Interactive command loop.
//!
//! Reads one line at a time, splits it on whitespace into a command name and
//! its arguments, and dispatches to the handlers in [`crate::commands`]. The
//! loop owns no state of its own; the single long-lived [`Directory`] is
//! passed in and threaded through every handler.
//!
//! [`Directory`]: rolo_core::Directory

use std::io::{self, BufRead, Write};

use rolo_core::Directory;

use crate::commands;

/// Runs the command loop until `close`, `exit`, or end of input.
///
/// Every handler returns the message to print; no single invalid command
/// aborts the process.
pub fn run(book: &mut Directory) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut line = String::new();

    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // End of input behaves like exit so the directory still gets saved
            break;
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "close" | "exit" => break,
            "hello" => println!("How can I help you?"),
            "add" => println!("{}", commands::add_contact(&args, book)),
            "add-birthday" => println!("{}", commands::add_birthday(&args, book)),
            "show-birthday" => println!("{}", commands::show_birthday(&args, book)),
            "phone" => println!("{}", commands::show_phones(&args, book)),
            "birthdays" => println!("{}", commands::birthdays(book)),
            "all" => println!("{book}"),
            _ => println!("Invalid command."),
        }
    }

    Ok(())
}
