pub mod classifier;
pub mod evaluator;
pub mod shell;

pub use crate::domain::model::{Evaluation, Expression, NumeralSystem, Operator};
pub use crate::domain::ports::{ConfigProvider, NumeralCodec, ShellMode};
pub use crate::utils::error::Result;
