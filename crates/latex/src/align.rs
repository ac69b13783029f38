//! Column alignment codes for the tabular environment.

use std::fmt;
use std::str::FromStr;

use crate::error::{LatexError, Result};

/// LaTeX column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Convert to LaTeX column specification character
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }

    /// Parse a column specification character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Alignment::Left),
            'c' => Some(Alignment::Center),
            'r' => Some(Alignment::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One alignment per column, e.g. `rll`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentSpec(Vec<Alignment>);

impl AlignmentSpec {
    /// First column right-aligned, every other column left-aligned.
    #[must_use]
    pub fn default_for(columns: usize) -> Self {
        let aligns = (0..columns)
            .map(|i| if i == 0 { Alignment::Right } else { Alignment::Left })
            .collect();
        AlignmentSpec(aligns)
    }

    /// Parse `spec` and check it covers exactly `columns` columns.
    pub fn parse_for(spec: &str, columns: usize) -> Result<Self> {
        let parsed: AlignmentSpec = spec.parse()?;
        if parsed.len() != columns {
            return Err(LatexError::AlignmentLengthMismatch {
                expected: columns,
                actual: parsed.len(),
                spec: spec.to_string(),
            });
        }
        Ok(parsed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alignment of column `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Alignment> {
        self.0.get(index).copied()
    }
}

impl FromStr for AlignmentSpec {
    type Err = LatexError;

    fn from_str(spec: &str) -> Result<Self> {
        spec.chars()
            .map(|code| {
                Alignment::from_char(code).ok_or_else(|| LatexError::InvalidAlignment {
                    code,
                    spec: spec.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(AlignmentSpec)
    }
}

impl fmt::Display for AlignmentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for align in &self.0 {
            write!(f, "{align}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alignment() {
        assert_eq!(AlignmentSpec::default_for(4).to_string(), "rlll");
        assert_eq!(AlignmentSpec::default_for(1).to_string(), "r");
    }

    #[test]
    fn test_parse_roundtrip() {
        let spec = AlignmentSpec::parse_for("rcl", 3).unwrap();
        assert_eq!(spec.get(1), Some(Alignment::Center));
        assert_eq!(spec.get(3), None);
        assert_eq!(spec.to_string(), "rcl");
    }

    #[test]
    fn test_length_mismatch() {
        let err = AlignmentSpec::parse_for("rl", 3).unwrap_err();
        assert!(matches!(
            err,
            LatexError::AlignmentLengthMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_code() {
        let err = AlignmentSpec::parse_for("rxl", 3).unwrap_err();
        assert!(matches!(err, LatexError::InvalidAlignment { code: 'x', .. }));
        assert!(err.to_string().contains("rxl"));
    }
}
