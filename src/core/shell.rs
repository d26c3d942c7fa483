use crate::core::evaluator::evaluate_detailed;
use crate::domain::model::{Evaluation, NumeralSystem};
use crate::domain::ports::{ConfigProvider, ShellMode};
use crate::utils::error::{EvalError, Result};
use crate::utils::i18n::OutputFormat;
use serde::Serialize;
use std::io::{BufRead, Write};

pub type Outcome = std::result::Result<Evaluation, EvalError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub evaluated: usize,
    pub failed: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutcome<'a> {
    Success {
        ok: bool,
        result: &'a str,
        system: NumeralSystem,
        value: i64,
    },
    Failure {
        ok: bool,
        error: &'static str,
        message: &'static str,
    },
}

/// Reads expressions line by line and writes one outcome line per expression.
pub struct Shell<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Shell<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        match self.config.mode() {
            ShellMode::Single => {
                writeln!(output, "{}", self.config.single_prompt())?;
                output.flush()?;

                let line = read_line(&mut input)?.unwrap_or_default();
                self.handle(&line, &mut output, &mut summary)?;
            }
            ShellMode::Interactive => loop {
                writeln!(output, "{}", self.config.prompt())?;
                output.flush()?;

                let Some(line) = read_line(&mut input)? else {
                    tracing::debug!("end of input");
                    break;
                };

                if self.is_exit_command(&line) {
                    writeln!(output, "{}", self.config.farewell())?;
                    break;
                }

                self.handle(&line, &mut output, &mut summary)?;
            },
        }

        output.flush()?;
        tracing::info!(
            evaluated = summary.evaluated,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }

    /// Evaluates one line and formats the outcome without a trailing newline.
    pub fn respond(&self, line: &str) -> Result<(String, Outcome)> {
        let outcome = evaluate_detailed(line);
        let rendered = self.format_outcome(&outcome)?;
        Ok((rendered, outcome))
    }

    fn handle<W: Write>(
        &self,
        line: &str,
        output: &mut W,
        summary: &mut SessionSummary,
    ) -> Result<()> {
        let (rendered, outcome) = self.respond(line)?;

        summary.evaluated += 1;
        if let Err(e) = outcome {
            summary.failed += 1;
            tracing::debug!(input = line, "evaluation failed: {} ({})", e, e.recovery_suggestion());
        }

        writeln!(output, "{}", rendered)?;
        Ok(())
    }

    fn is_exit_command(&self, line: &str) -> bool {
        line.trim().to_lowercase() == self.config.exit_command().trim().to_lowercase()
    }

    fn format_outcome(&self, outcome: &Outcome) -> Result<String> {
        let language = self.config.language();

        let rendered = match (self.config.output_format(), outcome) {
            (OutputFormat::Text, Ok(evaluation)) => {
                format!("{}: {}", language.result_label(), evaluation.rendered)
            }
            (OutputFormat::Text, Err(e)) => {
                format!("{}: {}", language.error_label(), e.message(language))
            }
            (OutputFormat::Json, Ok(evaluation)) => serde_json::to_string(&JsonOutcome::Success {
                ok: true,
                result: &evaluation.rendered,
                system: evaluation.system,
                value: evaluation.value,
            })?,
            (OutputFormat::Json, Err(e)) => serde_json::to_string(&JsonOutcome::Failure {
                ok: false,
                error: e.code(),
                message: e.message(language),
            })?,
        };
        Ok(rendered)
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
