use crate::config::ShellSettings;
use crate::domain::ports::ShellMode;
use crate::utils::error::Result;
use crate::utils::i18n::{Language, OutputFormat};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub shell: Option<ShellSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellSection {
    pub prompt: Option<String>,
    pub single_prompt: Option<String>,
    pub exit_command: Option<String>,
    pub farewell: Option<String>,
    pub mode: Option<ShellMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub language: Option<Language>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Loads a configuration file; every table and key is optional.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${NAME}` with the environment value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Layers the values present in this file over `base`.
    pub fn apply_to(&self, base: ShellSettings) -> ShellSettings {
        let mut settings = base;

        if let Some(shell) = &self.shell {
            if let Some(prompt) = &shell.prompt {
                settings.prompt = prompt.clone();
            }
            if let Some(single_prompt) = &shell.single_prompt {
                settings.single_prompt = single_prompt.clone();
            }
            if let Some(exit_command) = &shell.exit_command {
                settings.exit_command = exit_command.clone();
            }
            if let Some(farewell) = &shell.farewell {
                settings.farewell = farewell.clone();
            }
            if let Some(mode) = shell.mode {
                settings.mode = mode;
            }
        }

        if let Some(output) = &self.output {
            if let Some(language) = output.language {
                settings.language = language;
            }
            if let Some(format) = output.format {
                settings.output_format = format;
            }
        }

        settings
    }

    pub fn into_settings(self) -> Result<ShellSettings> {
        let settings = self.apply_to(ShellSettings::default());
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[shell]
prompt = "> "
exit_command = "quit"
farewell = "bye"
mode = "single"

[output]
language = "en"
format = "json"
"#;

        let settings = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_settings()
            .unwrap();

        assert_eq!(settings.prompt, "> ");
        assert_eq!(settings.exit_command, "quit");
        assert_eq!(settings.farewell, "bye");
        assert_eq!(settings.mode, ShellMode::Single);
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.single_prompt, ShellSettings::default().single_prompt);
    }

    #[test]
    fn test_empty_config_keeps_defaults() {
        let settings = TomlConfig::from_toml_str("").unwrap().into_settings().unwrap();
        assert_eq!(settings, ShellSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_CALC_TEST_EXIT", "stop");

        let config = TomlConfig::from_toml_str(
            r#"
[shell]
exit_command = "${ROMAN_CALC_TEST_EXIT}"
farewell = "${ROMAN_CALC_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();
        let shell = config.shell.unwrap();
        assert_eq!(shell.exit_command.as_deref(), Some("stop"));
        assert_eq!(
            shell.farewell.as_deref(),
            Some("${ROMAN_CALC_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("ROMAN_CALC_TEST_EXIT");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(TomlConfig::from_toml_str("[output]\nlanguage = \"de\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[shell]\nmode = \"batch\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[unknown]\nkey = 1\n").is_err());

        let config = TomlConfig::from_toml_str("[shell]\nexit_command = \"  \"\n").unwrap();
        assert!(config.into_settings().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nlanguage = \"en\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.into_settings().unwrap().language, Language::En);
    }
}
