//! Command-line interface for the `skillgap` batch analysis.
//!
//! This crate is the executable entry point: argument parsing, the
//! optional config file, and the load → compute → report orchestration.
//! All business logic lives in the library crates.

mod app;
mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    app::run()
}
