//! CLI logic shared by the topology diagram binaries.
//!
//! Each binary prints one fixed cluster-management topology diagram to
//! standard output. This module carries the shared plumbing: argument
//! parsing, logger setup, charset resolution, and error reporting.

pub mod error_adapter;
pub mod topology;

mod args;

pub use args::Args;

use std::{process, str::FromStr};

use log::{LevelFilter, debug, error, info};

use asciigram::{AsciigramError, Charset};

use error_adapter::Reportable;

/// Initializes the logger from the parsed arguments.
///
/// Invalid log levels fall back to `warn` with a note on stderr.
pub fn init_logger(args: &Args) {
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");
}

/// Resolves the rendering character set from the parsed arguments.
///
/// Invalid charsets fall back to `unicode` with a note on stderr.
pub fn charset(args: &Args) -> Charset {
    Charset::from_str(&args.charset).unwrap_or_else(|_| {
        eprintln!("Invalid charset: {}. Using 'unicode' instead.", args.charset);
        Charset::Unicode
    })
}

/// Prints a rendered diagram, or reports the error and exits non-zero.
pub fn print_or_exit(result: Result<String, AsciigramError>) {
    match result {
        Ok(rendered) => {
            println!("{rendered}");
            info!("Completed successfully");
        }
        Err(err) => {
            let reporter = miette::GraphicalReportHandler::new();
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &Reportable(&err))
                .expect("Writing to String buffer is infallible");

            error!("{writer}");
            process::exit(1);
        }
    }
}
