use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DOCEX_COMPILER_VERSION"),
    ")"
);

/// Generate tests and reference docs from lisp documentation comments
#[derive(Debug, Parser)]
#[command(version, long_version = LONG_VERSION, about)]
pub(crate) struct Args {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Write a test file asserting every documented example
    Test {
        input: PathBuf,
        output: PathBuf,
        /// Spaces per indentation level in example code
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=16))]
        indent: u8,
        /// Accept unterminated expressions instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Write a Markdown reference page for every documented entity
    Doc {
        input: PathBuf,
        output: PathBuf,
        /// Page title
        name: String,
    },
}
