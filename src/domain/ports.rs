use crate::domain::model::NumeralSystem;
use crate::utils::error::EvalError;
use crate::utils::i18n::{Language, OutputFormat};
use serde::Deserialize;

/// Converts between operand tokens of one numeral system and integers.
pub trait NumeralCodec {
    fn system(&self) -> NumeralSystem;

    /// `None` when the token is not a supported numeral of this system.
    fn decode(&self, token: &str) -> Option<i64>;

    fn encode(&self, value: i64) -> Result<String, EvalError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellMode {
    #[default]
    Interactive,
    Single,
}

pub trait ConfigProvider {
    fn prompt(&self) -> &str;
    fn single_prompt(&self) -> &str;
    fn exit_command(&self) -> &str;
    fn farewell(&self) -> &str;
    fn mode(&self) -> ShellMode;
    fn language(&self) -> Language;
    fn output_format(&self) -> OutputFormat;
}
