//! Error types.

use std::fmt;

/// Error type for coordinate construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            CoordError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for CoordError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Coord;

    #[test]
    fn try_from_reports_offending_component() {
        let err = Coord::try_from((9, 0)).unwrap_err();
        assert_eq!(err, CoordError::FileOutOfBounds { file: 9 });
        assert!(err.to_string().contains('9'));

        let err = Coord::try_from((0, 12)).unwrap_err();
        assert_eq!(err, CoordError::RankOutOfBounds { rank: 12 });
        assert!(err.to_string().contains("12"));
    }
}
