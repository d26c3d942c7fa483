use crate::utils::error::EvalError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Roman,
    Arabic,
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralSystem::Roman => write!(f, "roman"),
            NumeralSystem::Arabic => write!(f, "arabic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(EvalError::InvalidOperator),
        }
    }
}

/// One tokenized input line. The operator stays a raw token until the
/// operands have been classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    pub lhs: &'a str,
    pub operator: &'a str,
    pub rhs: &'a str,
}

impl<'a> Expression<'a> {
    pub fn parse(input: &'a str) -> Result<Self, EvalError> {
        let mut tokens = input.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(lhs), Some(operator), Some(rhs), None) => Ok(Self { lhs, operator, rhs }),
            _ => Err(EvalError::MalformedExpression),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub system: NumeralSystem,
    pub value: i64,
    pub rendered: String,
}
