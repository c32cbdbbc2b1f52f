//! CLI entry: resolve settings, run the pipeline, print the report

mod logging;
pub mod report;

pub use logging::{init_tracing, log, LogLevel};

use crate::config::{Cli, Settings};
use crate::pipeline;
use confmat_common::{OutputFormat, Result};

/// Execute one confmat invocation
pub fn run_command(cli: Cli) -> Result<()> {
    let common = cli.common.to_cli();
    let level = LogLevel::from_flags(common.is_verbose(), common.is_quiet());
    init_tracing(level);

    let settings = Settings::from_cli(&cli)?;
    tracing::debug!(?settings, "resolved settings");

    // stdout carries only the document in JSON mode
    let chatter = if common.format == OutputFormat::Json { LogLevel::Quiet } else { level };
    log(chatter, LogLevel::Verbose, &format!("Reading {}", settings.input.display()));
    log(
        chatter,
        LogLevel::Verbose,
        &format!(
            "Label columns: actual='{}', predicted='{}'",
            settings.read.actual_column, settings.read.predicted_column
        ),
    );

    let summary = pipeline::run(&settings)?;

    match common.format {
        OutputFormat::Text => {
            if level != LogLevel::Quiet {
                print!("{}", report::render_text(&summary, level == LogLevel::Verbose));
            }
        }
        OutputFormat::Json => {
            if level != LogLevel::Quiet {
                println!("{}", report::render_json(&summary)?);
            }
        }
    }

    Ok(())
}
