use std::fmt;

/// A numeric schema value that remembers whether it was written as an
/// integer or a float literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    /// Integer literal above `i64::MAX`.
    UInt(u64),
    Float(f64),
}

impl Numeric {
    /// Value used when an optional numeric field is absent.
    pub const ABSENT: Self = Self::Float(0.0);

    /// Integer value, truncating floats toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate(self) -> i128 {
        match self {
            Self::Int(value) => value.into(),
            Self::UInt(value) => value.into(),
            Self::Float(value) => value.trunc() as i128,
        }
    }

    /// Non-negative integer value; negatives clamp to zero.
    pub fn as_count(self) -> usize {
        usize::try_from(self.truncate().max(0)).unwrap_or(usize::MAX)
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write_float(f, *value),
        }
    }
}

/// Shortest round-trip form with a trailing ".0" on integral values. An
/// exponent is signed and at least two digits wide (`1e-05`, `1.5e+16`).
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_literal_kind() {
        assert_eq!(Numeric::Int(-40).to_string(), "-40");
        assert_eq!(Numeric::Float(0.0).to_string(), "0.0");
        assert_eq!(Numeric::Float(-90.5).to_string(), "-90.5");
        assert_eq!(Numeric::ABSENT.to_string(), "0.0");
        assert_eq!(Numeric::UInt(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn exponents_are_signed_and_two_digits() {
        assert_eq!(Numeric::Float(1e-5).to_string(), "1e-05");
        assert_eq!(Numeric::Float(1e16).to_string(), "1e+16");
        assert_eq!(Numeric::Float(1.5e16).to_string(), "1.5e+16");
        assert_eq!(Numeric::Float(-2.5e-120).to_string(), "-2.5e-120");
        assert_eq!(Numeric::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Numeric::Float(1e15).to_string(), "1000000000000000.0");
    }

    #[test]
    fn truncate_rounds_toward_zero() {
        assert_eq!(Numeric::Float(-0.5).truncate(), 0);
        assert_eq!(Numeric::Float(32.9).truncate(), 32);
        assert_eq!(Numeric::Int(-3).as_count(), 0);
        assert_eq!(Numeric::UInt(u64::MAX).truncate(), i128::from(u64::MAX));
        assert_eq!(Numeric::Float(1e20).truncate(), 100_000_000_000_000_000_000);
    }
}
