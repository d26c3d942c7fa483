//! Numeral classification and the Roman conversion tables.
//!
//! Operands are recognized by exact table lookup only: `I`..`X` for Roman
//! and `1`..`10` for Arabic. Results on the Roman side can reach `C`, so the
//! integer-to-Roman direction composes tens and units up to 100.

use crate::domain::model::NumeralSystem;
use crate::domain::ports::NumeralCodec;
use crate::utils::error::EvalError;

pub const ARABIC_MIN: i64 = 1;
pub const ARABIC_MAX: i64 = 10;
pub const ROMAN_RESULT_MAX: i64 = 100;

/// `UNITS[n - 1]` spells `n` for 1..=10.
const UNITS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// `TENS[n / 10 - 1]` spells the tens multiple `n` for 10..=100.
const TENS: [&str; 10] = ["X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC", "C"];

pub fn is_roman(token: &str) -> bool {
    roman_to_int(token).is_some()
}

pub fn is_arabic(token: &str) -> bool {
    parse_arabic(token).is_some()
}

fn parse_arabic(token: &str) -> Option<i64> {
    token
        .parse::<i64>()
        .ok()
        .filter(|n| (ARABIC_MIN..=ARABIC_MAX).contains(n))
}

pub fn roman_to_int(token: &str) -> Option<i64> {
    UNITS
        .iter()
        .position(|&numeral| numeral == token)
        .map(|index| index as i64 + 1)
}

pub fn int_to_roman(n: i64) -> Result<String, EvalError> {
    if !(1..=ROMAN_RESULT_MAX).contains(&n) {
        return Err(EvalError::OutOfRange);
    }

    let tens = n / 10 * 10;
    let units = n % 10;

    if n <= 10 {
        return Ok(UNITS[(n - 1) as usize].to_string());
    }
    if units == 0 {
        return Ok(TENS[(tens / 10 - 1) as usize].to_string());
    }

    let mut numeral = String::from(TENS[(tens / 10 - 1) as usize]);
    numeral.push_str(UNITS[(units - 1) as usize]);
    Ok(numeral)
}

/// Both operands must belong to the same system.
pub fn classify(lhs: &str, rhs: &str) -> Option<NumeralSystem> {
    if is_roman(lhs) && is_roman(rhs) {
        Some(NumeralSystem::Roman)
    } else if is_arabic(lhs) && is_arabic(rhs) {
        Some(NumeralSystem::Arabic)
    } else {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RomanCodec;

impl NumeralCodec for RomanCodec {
    fn system(&self) -> NumeralSystem {
        NumeralSystem::Roman
    }

    fn decode(&self, token: &str) -> Option<i64> {
        roman_to_int(token)
    }

    fn encode(&self, value: i64) -> Result<String, EvalError> {
        if value < 1 {
            return Err(EvalError::RomanUnderflow);
        }
        int_to_roman(value)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ArabicCodec;

impl NumeralCodec for ArabicCodec {
    fn system(&self) -> NumeralSystem {
        NumeralSystem::Arabic
    }

    fn decode(&self, token: &str) -> Option<i64> {
        parse_arabic(token)
    }

    fn encode(&self, value: i64) -> Result<String, EvalError> {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_roman_is_table_lookup() {
        assert!(is_roman("I"));
        assert!(is_roman("VIII"));
        assert!(is_roman("X"));
        assert!(!is_roman("i"));
        assert!(!is_roman("XI"));
        assert!(!is_roman("IIII"));
        assert!(!is_roman("LXI"));
        assert!(!is_roman(""));
    }

    #[test]
    fn test_is_arabic_range() {
        assert!(is_arabic("1"));
        assert!(is_arabic("10"));
        assert!(is_arabic("+5"));
        assert!(!is_arabic("0"));
        assert!(!is_arabic("-3"));
        assert!(!is_arabic("11"));
        assert!(!is_arabic("2.5"));
        assert!(!is_arabic("V"));
    }

    #[test]
    fn test_roman_to_int() {
        assert_eq!(roman_to_int("IV"), Some(4));
        assert_eq!(roman_to_int("IX"), Some(9));
        assert_eq!(roman_to_int("X"), Some(10));
        assert_eq!(roman_to_int("XX"), None);
    }

    #[test]
    fn test_int_to_roman_samples() {
        assert_eq!(int_to_roman(1).unwrap(), "I");
        assert_eq!(int_to_roman(14).unwrap(), "XIV");
        assert_eq!(int_to_roman(20).unwrap(), "XX");
        assert_eq!(int_to_roman(47).unwrap(), "XLVII");
        assert_eq!(int_to_roman(60).unwrap(), "LX");
        assert_eq!(int_to_roman(99).unwrap(), "XCIX");
        assert_eq!(int_to_roman(100).unwrap(), "C");
    }

    #[test]
    fn test_int_to_roman_bounds() {
        assert_eq!(int_to_roman(0), Err(EvalError::OutOfRange));
        assert_eq!(int_to_roman(-4), Err(EvalError::OutOfRange));
        assert_eq!(int_to_roman(101), Err(EvalError::OutOfRange));
    }

    #[test]
    fn test_int_to_roman_round_trips_operand_range() {
        for n in 1..=10 {
            let numeral = int_to_roman(n).unwrap();
            assert_eq!(roman_to_int(&numeral), Some(n));
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("III", "IV"), Some(NumeralSystem::Roman));
        assert_eq!(classify("3", "4"), Some(NumeralSystem::Arabic));
        assert_eq!(classify("I", "2"), None);
        assert_eq!(classify("0", "XI"), None);
    }

    #[test]
    fn test_roman_codec_encode() {
        assert_eq!(RomanCodec.encode(0), Err(EvalError::RomanUnderflow));
        assert_eq!(RomanCodec.encode(-2), Err(EvalError::RomanUnderflow));
        assert_eq!(RomanCodec.encode(101), Err(EvalError::OutOfRange));
        assert_eq!(RomanCodec.encode(60).unwrap(), "LX");
    }
}
