use crate::utils::i18n::Language;
use thiserror::Error;

/// Why a single expression could not be evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("expected two operands and one operator, for example '1 + 2'")]
    MalformedExpression,

    #[error("operands must be either both Roman or both Arabic numerals")]
    MixedOrInvalidOperands,

    #[error("unsupported operator")]
    InvalidOperator,

    #[error("division by zero")]
    DivisionByZero,

    #[error("there are no negative numbers or zero in Roman numerals")]
    RomanUnderflow,

    #[error("Roman numerals are only supported from 1 to 100")]
    OutOfRange,
}

impl EvalError {
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::MalformedExpression => "malformed_expression",
            EvalError::MixedOrInvalidOperands => "mixed_or_invalid_operands",
            EvalError::InvalidOperator => "invalid_operator",
            EvalError::DivisionByZero => "division_by_zero",
            EvalError::RomanUnderflow => "roman_underflow",
            EvalError::OutOfRange => "out_of_range",
        }
    }

    pub fn message(&self, language: Language) -> &'static str {
        match language {
            Language::En => match self {
                EvalError::MalformedExpression => {
                    "enter two operands and one operator, for example: '1 + 2'"
                }
                EvalError::MixedOrInvalidOperands => {
                    "operands must be either both Roman or both Arabic numerals"
                }
                EvalError::InvalidOperator => "invalid operation",
                EvalError::DivisionByZero => "division by zero",
                EvalError::RomanUnderflow => {
                    "there are no negative numbers or zero in Roman numerals"
                }
                EvalError::OutOfRange => {
                    "there are no negative numbers, zero or numbers above 100 in Roman numerals"
                }
            },
            Language::Ru => match self {
                EvalError::MalformedExpression => {
                    "введите два операнда и один оператор, например: '1 + 2'"
                }
                EvalError::MixedOrInvalidOperands => {
                    "операнды должны быть либо оба римскими, либо оба арабскими"
                }
                EvalError::InvalidOperator => "недопустимая операция",
                EvalError::DivisionByZero => "деление на ноль",
                EvalError::RomanUnderflow => "в римской системе нет отрицательных чисел или нуля",
                EvalError::OutOfRange => {
                    "в римской системе нет отрицательных чисел, нуля и чисел больше 100"
                }
            },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EvalError::MalformedExpression => "Separate operands and operator with spaces",
            EvalError::MixedOrInvalidOperands => {
                "Use I..X or 1..10 for both operands, without mixing systems"
            }
            EvalError::InvalidOperator => "Use one of + - * /",
            EvalError::DivisionByZero => "Use a non-zero divisor",
            EvalError::RomanUnderflow | EvalError::OutOfRange => {
                "Roman results must stay between I and C"
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::IoError(_) | AppError::SerializationError(_) => ErrorCategory::Io,
            AppError::TomlError(_) | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            AppError::SerializationError(e) => format!("Could not format the result: {}", e),
            AppError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
