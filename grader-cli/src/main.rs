//! A command line interface to homework autograding helpers.
//!
//! ## Usage
//!
//! - check whether a vertex set is independent, giving up after five seconds
//!
//!     `grader check independent-set answer.json --max-time 5`
//!
//! - validate a traveling salesman tour and write its cost to the file
//!
//!     `grader check tour answer.json -o result.json`
//!
//! For more details, simply run
//!
//!     grader --help

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::create_write_buffer;
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Homework Grader")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to homework autograding helpers")
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("check", check_matches)) => run_check(check_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
