//! A command line interface to perishable supply network routing.
//!

mod commands;

use crate::commands::{get_app, run_subcommand};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_subcommand(matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
