//! CLI entry point for the lampshade pattern tool

use clap::Parser;
use shadecut::io::cli::{Cli, PatternProcessor};
use shadecut::io::logging::init_logging;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    match PatternProcessor::new(cli).process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            if !error.is_user_facing() {
                if let Some(source) = error.source() {
                    log::debug!("caused by: {source}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
