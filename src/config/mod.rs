#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::{ConfigProvider, ShellMode};
use crate::utils::error::Result;
use crate::utils::i18n::{Language, OutputFormat};
use crate::utils::validation::{validate_single_word, Validate};

/// Fully resolved shell settings: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub prompt: String,
    pub single_prompt: String,
    pub exit_command: String,
    pub farewell: String,
    pub mode: ShellMode,
    pub language: Language,
    pub output_format: OutputFormat,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            prompt: "Введите выражение или 'exit' для выхода:".to_string(),
            single_prompt: "Введите выражение:".to_string(),
            exit_command: "exit".to_string(),
            farewell: "Завершение работы.".to_string(),
            mode: ShellMode::Interactive,
            language: Language::Ru,
            output_format: OutputFormat::Text,
        }
    }
}

impl ConfigProvider for ShellSettings {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn single_prompt(&self) -> &str {
        &self.single_prompt
    }

    fn exit_command(&self) -> &str {
        &self.exit_command
    }

    fn farewell(&self) -> &str {
        &self.farewell
    }

    fn mode(&self) -> ShellMode {
        self.mode
    }

    fn language(&self) -> Language {
        self.language
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for ShellSettings {
    fn validate(&self) -> Result<()> {
        validate_single_word("shell.exit_command", &self.exit_command)
    }
}
