//! Error-margin strings: a fixed glyph prefix followed by a magnitude.
//!
//! `"± 12.5"` splits into prefix `"± "` and magnitude `12.5`. The prefix is
//! counted in characters, so multi-byte glyphs are kept whole.

use std::fmt;

use crate::constants::RANGE_PREFIX_CHARS;
use crate::errors::RangeError;

/// A parsed `range` value, expressed in its measurement's current unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRange {
    pub prefix: String,
    pub magnitude: f64,
}

impl ErrorRange {
    /// Split a wire `range` string into glyph prefix and magnitude.
    pub fn parse(range: &str) -> Result<Self, RangeError> {
        let split = match range.char_indices().nth(RANGE_PREFIX_CHARS) {
            Some((idx, _)) => idx,
            None if range.chars().count() == RANGE_PREFIX_CHARS => range.len(),
            None => {
                return Err(RangeError::MissingPrefix {
                    range: range.to_string(),
                })
            }
        };
        let (prefix, rest) = range.split_at(split);
        let magnitude = rest
            .trim()
            .parse::<f64>()
            .map_err(|source| RangeError::MalformedMagnitude {
                range: range.to_string(),
                source,
            })?;
        Ok(Self {
            prefix: prefix.to_string(),
            magnitude,
        })
    }

    /// Rewrite the magnitude, keeping the prefix.
    pub fn map_magnitude(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self {
            magnitude: f(self.magnitude),
            ..self
        }
    }

    /// Re-encode into the wire form.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ErrorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multibyte_prefix() {
        let r = ErrorRange::parse("± 12.5").unwrap();
        assert_eq!(r.prefix, "± ");
        assert_eq!(r.magnitude, 12.5);
    }

    #[test]
    fn test_map_magnitude_reencodes_with_prefix() {
        let r = ErrorRange::parse("+/3").unwrap().map_magnitude(|m| m * 1000.0);
        assert_eq!(r.encode(), "+/3000");
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            ErrorRange::parse("±"),
            Err(RangeError::MissingPrefix { .. })
        ));
    }

    #[test]
    fn test_prefix_only_is_malformed() {
        assert!(matches!(
            ErrorRange::parse("± "),
            Err(RangeError::MalformedMagnitude { .. })
        ));
    }

    #[test]
    fn test_non_numeric_magnitude() {
        assert!(matches!(
            ErrorRange::parse("± abc"),
            Err(RangeError::MalformedMagnitude { .. })
        ));
    }
}
