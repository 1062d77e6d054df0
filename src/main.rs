// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use env_logger::{Builder, Env};
use std::process::ExitCode;

use treesnap::args::Args;
use treesnap::config;

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    let config = match config::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("treesnap: {e}");
            return ExitCode::FAILURE;
        }
    };

    match treesnap_core::run(&config) {
        Ok(report) => {
            println!(
                "Wrote {} entries to {}",
                report.entries,
                config.output().display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("treesnap: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// Verbosity comes from RUST_LOG; nothing is logged by default.
fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
