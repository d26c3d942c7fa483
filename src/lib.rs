pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, ShellSettings};
pub use crate::core::{
    evaluator::{evaluate, evaluate_detailed},
    shell::{SessionSummary, Shell},
};
pub use crate::utils::error::{AppError, EvalError, Result};
