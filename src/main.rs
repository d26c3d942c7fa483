use clap::Parser;
use roman_calc::core::ShellMode;
use roman_calc::utils::error::ErrorCategory;
use roman_calc::utils::logger;
use roman_calc::{CliConfig, Shell};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            return Ok(ExitCode::from(2));
        }
    };

    let shell = Shell::new(settings);
    let stdout = io::stdout();

    if let Some(expression) = &config.expression {
        let (rendered, outcome) = shell.respond(expression)?;
        let mut out = stdout.lock();
        writeln!(out, "{}", rendered)?;
        out.flush()?;
        return Ok(if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let summary = match shell.run(io::stdin().lock(), stdout.lock()) {
        Ok(summary) => summary,
        Err(e) if e.category() == ErrorCategory::Io => {
            tracing::error!("terminal I/O failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if shell.config().mode == ShellMode::Single && summary.failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
