use crate::core::classifier::{classify, ArabicCodec, RomanCodec};
use crate::domain::model::{Evaluation, Expression, NumeralSystem, Operator};
use crate::domain::ports::NumeralCodec;
use crate::utils::error::EvalError;

/// Evaluates `<operand> <operator> <operand>` and renders the result in the
/// operands' numeral system.
pub fn evaluate(input: &str) -> Result<String, EvalError> {
    evaluate_detailed(input).map(|evaluation| evaluation.rendered)
}

pub fn evaluate_detailed(input: &str) -> Result<Evaluation, EvalError> {
    let expr = Expression::parse(input)?;

    let system = classify(expr.lhs, expr.rhs).ok_or(EvalError::MixedOrInvalidOperands)?;
    tracing::debug!(lhs = expr.lhs, rhs = expr.rhs, %system, "classified operands");

    let evaluation = match system {
        NumeralSystem::Roman => compute(&RomanCodec, &expr),
        NumeralSystem::Arabic => compute(&ArabicCodec, &expr),
    }?;

    tracing::debug!(
        value = evaluation.value,
        rendered = %evaluation.rendered,
        "evaluated expression"
    );
    Ok(evaluation)
}

fn compute<C: NumeralCodec>(codec: &C, expr: &Expression<'_>) -> Result<Evaluation, EvalError> {
    // Classification already matched both tokens against this codec.
    let lhs = codec
        .decode(expr.lhs)
        .ok_or(EvalError::MixedOrInvalidOperands)?;
    let rhs = codec
        .decode(expr.rhs)
        .ok_or(EvalError::MixedOrInvalidOperands)?;

    let operator: Operator = expr.operator.parse()?;
    tracing::debug!(lhs, operator = operator.symbol(), rhs, "applying operator");
    let value = operator.apply(lhs, rhs)?;

    Ok(Evaluation {
        system: codec.system(),
        value,
        rendered: codec.encode(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_addition() {
        assert_eq!(evaluate("3 + 4").unwrap(), "7");
    }

    #[test]
    fn test_roman_addition() {
        assert_eq!(evaluate("III + IV").unwrap(), "VII");
    }

    #[test]
    fn test_operand_check_precedes_operator_check() {
        assert_eq!(evaluate("I % 2"), Err(EvalError::MixedOrInvalidOperands));
        assert_eq!(evaluate("1 % 2"), Err(EvalError::InvalidOperator));
        assert_eq!(evaluate("I % II"), Err(EvalError::InvalidOperator));
    }

    #[test]
    fn test_detailed_reports_system_and_value() {
        let evaluation = evaluate_detailed("VI * X").unwrap();
        assert_eq!(evaluation.system, NumeralSystem::Roman);
        assert_eq!(evaluation.value, 60);
        assert_eq!(evaluation.rendered, "LX");

        let evaluation = evaluate_detailed("2 - 9").unwrap();
        assert_eq!(evaluation.system, NumeralSystem::Arabic);
        assert_eq!(evaluation.value, -7);
        assert_eq!(evaluation.rendered, "-7");
    }
}
