use crate::config::toml_config::TomlConfig;
use crate::config::ShellSettings;
use crate::domain::ports::ShellMode;
use crate::utils::error::Result;
use crate::utils::i18n::{Language, OutputFormat};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Evaluates `a op b` over Roman (I..X) or Arabic (1..10) numerals")]
pub struct CliConfig {
    /// Evaluate this expression and exit, e.g. "VI * X"
    pub expression: Option<String>,

    /// Read a single expression from stdin and exit
    #[arg(long)]
    pub once: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language of result and error messages
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Output format of each outcome line
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges defaults, the optional config file and the flags given here.
    pub fn resolve(&self) -> Result<ShellSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path.display());
                TomlConfig::from_file(path)?.apply_to(ShellSettings::default())
            }
            None => ShellSettings::default(),
        };

        if self.once {
            settings.mode = ShellMode::Single;
        }
        if let Some(language) = self.lang {
            settings.language = language;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}
