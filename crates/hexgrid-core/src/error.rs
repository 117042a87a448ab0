use std::fmt;

/// Errors raised when building a coordinate from raw components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Cube components do not sum to zero.
    InvalidCube { q: i32, r: i32, s: i32 },
    /// Doubled components have odd sum.
    InvalidDoubled { col: i32, row: i32 },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCube { q, r, s } => {
                write!(f, "invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")
            }
            Self::InvalidDoubled { col, row } => {
                write!(f, "invalid doubled coordinate ({col}, {row}): col + row must be even")
            }
        }
    }
}

impl std::error::Error for CoordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_components() {
        let e = CoordError::InvalidCube { q: 1, r: 2, s: 42 };
        assert_eq!(
            e.to_string(),
            "invalid cube coordinate (1, 2, 42): q + r + s must be 0"
        );
        let e = CoordError::InvalidDoubled { col: 1, row: 0 };
        assert!(e.to_string().contains("(1, 0)"));
    }
}
