//! Command line surface.
//!
//! The job is deliberately flag-free: every run does the same thing with the
//! built-in configuration, so the parser exists only for `--help` and
//! `--version`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "marketsnap")]
#[command(version)]
#[command(about = "Fetch EVE market orders and write a best-price snapshot", long_about = None)]
pub struct Cli {}
