//! Text coercion for declared animation values.
//!
//! Rules:
//! - components are comma separated, surrounding whitespace is ignored
//! - an optional `<...>` wrapper is accepted (the usual vector display form)
//! - a single component is broadcast to every axis for vectors
//! - quaternions always need four components
//! - non-finite numbers are rejected, and so is anything that overflows `f32`
//!
//! Anything rejected here never reaches a codec.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("empty value text")]
    Empty,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("number {0} is outside the single-precision range")]
    OutOfRange(String),
    #[error("expected {expected} components, found {found} in '{text}'")]
    ComponentCount {
        expected: String,
        found: usize,
        text: String,
    },
    #[error("invalid color '{0}'")]
    InvalidColor(String),
}

/// Narrow a finite `f64` to `f32`, rejecting magnitudes that would become infinite.
pub fn narrow(value: f64) -> Result<f32, ParseValueError> {
    let narrowed = value as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(ParseValueError::OutOfRange(format!("{value:e}")))
    }
}

fn components(text: &str) -> Result<Vec<f32>, ParseValueError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(trimmed);
    if inner.trim().is_empty() {
        return Err(ParseValueError::Empty);
    }
    inner
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<f64>() {
                Ok(v) if v.is_finite() => narrow(v),
                _ => Err(ParseValueError::InvalidNumber(part.to_string())),
            }
        })
        .collect()
}

fn broadcast<const N: usize>(text: &str) -> Result<[f32; N], ParseValueError> {
    let parts = components(text)?;
    match parts.len() {
        1 => Ok([parts[0]; N]),
        n if n == N => {
            let mut out = [0.0; N];
            out.copy_from_slice(&parts);
            Ok(out)
        }
        found => Err(ParseValueError::ComponentCount {
            expected: format!("1 or {N}"),
            found,
            text: text.to_string(),
        }),
    }
}

/// Parse a single number.
pub fn parse_scalar(text: &str) -> Result<f32, ParseValueError> {
    let parts = components(text)?;
    match parts.as_slice() {
        [v] => Ok(*v),
        _ => Err(ParseValueError::ComponentCount {
            expected: "1".into(),
            found: parts.len(),
            text: text.to_string(),
        }),
    }
}

/// Parse `"x, y"` or a single broadcast component.
pub fn parse_vector2(text: &str) -> Result<[f32; 2], ParseValueError> {
    broadcast::<2>(text)
}

/// Parse `"x, y, z"` or a single broadcast component.
pub fn parse_vector3(text: &str) -> Result<[f32; 3], ParseValueError> {
    broadcast::<3>(text)
}

/// Parse `"x, y, z, w"`.
pub fn parse_quaternion(text: &str) -> Result<[f32; 4], ParseValueError> {
    let parts = components(text)?;
    if parts.len() != 4 {
        return Err(ParseValueError::ComponentCount {
            expected: "4".into(),
            found: parts.len(),
            text: text.to_string(),
        });
    }
    Ok([parts[0], parts[1], parts[2], parts[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_accepts_whitespace() {
        assert_eq!(parse_scalar(" 0.25 ").unwrap(), 0.25);
        assert!(matches!(
            parse_scalar("1,2"),
            Err(ParseValueError::ComponentCount { found: 2, .. })
        ));
    }

    #[test]
    fn vectors_broadcast_single_component() {
        assert_eq!(parse_vector3("2").unwrap(), [2.0, 2.0, 2.0]);
        assert_eq!(parse_vector2("1.5").unwrap(), [1.5, 1.5]);
    }

    #[test]
    fn vectors_accept_bracket_form() {
        assert_eq!(parse_vector3("<1, 2, 3>").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(parse_vector2("10,-4").unwrap(), [10.0, -4.0]);
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(matches!(
            parse_vector3("1,2"),
            Err(ParseValueError::ComponentCount { found: 2, .. })
        ));
        assert!(matches!(
            parse_vector2("a,b"),
            Err(ParseValueError::InvalidNumber(_))
        ));
        assert_eq!(parse_vector3("   "), Err(ParseValueError::Empty));
        assert_eq!(parse_vector3("<>"), Err(ParseValueError::Empty));
        assert!(parse_scalar("NaN").is_err());
        assert!(parse_scalar("inf").is_err());
    }

    #[test]
    fn rejects_numbers_that_overflow_single_precision() {
        assert!(matches!(
            parse_scalar("1e300"),
            Err(ParseValueError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_vector3("1, -1e39, 0"),
            Err(ParseValueError::OutOfRange(_))
        ));
        assert_eq!(parse_scalar("3.4028235e38").unwrap(), f32::MAX);
        assert_eq!(narrow(-1e-50).unwrap(), 0.0);
    }

    #[test]
    fn quaternion_needs_four_components() {
        assert_eq!(parse_quaternion("0,0,0,1").unwrap(), [0.0, 0.0, 0.0, 1.0]);
        assert!(parse_quaternion("1").is_err());
    }
}
