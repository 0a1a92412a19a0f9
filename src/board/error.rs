//! Error types for notation parsing.
//!
//! Gameplay never fails: bad selections are ignored and degenerate boards
//! resolve to terminal states. Only text coming from outside is fallible.

use std::fmt;

/// Error type for algebraic cell parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Not a lowercase file letter followed by a rank number
    InvalidNotation { notation: String },
    /// Well-formed but outside the board
    OutOfBounds {
        notation: String,
        rows: i16,
        columns: i16,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellError::InvalidNotation { notation } => {
                write!(f, "Invalid cell notation '{notation}'")
            }
            CellError::OutOfBounds {
                notation,
                rows,
                columns,
            } => {
                write!(f, "Cell '{notation}' is outside the {columns}x{rows} board")
            }
        }
    }
}

impl std::error::Error for CellError {}

/// Error type for external move-suggestion replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// Reply was blank
    Empty,
    /// Reply did not contain a coordinate pair
    InvalidFormat { reply: String },
    /// One of the coordinates is not a cell on this board
    InvalidCell { source: CellError },
    /// No piece of the side to move stands on the origin cell
    NoPiece { cell: String },
    /// The piece has no legal move to the target cell
    NoMatchingMove { notation: String },
    /// Promotion letter is unknown or not offered by the variant
    InvalidPromotion { char: char },
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionError::Empty => write!(f, "Empty move suggestion"),
            SuggestionError::InvalidFormat { reply } => {
                write!(f, "Unrecognised move suggestion '{reply}'")
            }
            SuggestionError::InvalidCell { source } => {
                write!(f, "Bad cell in move suggestion: {source}")
            }
            SuggestionError::NoPiece { cell } => {
                write!(f, "No movable piece on '{cell}'")
            }
            SuggestionError::NoMatchingMove { notation } => {
                write!(f, "No legal move matches '{notation}'")
            }
            SuggestionError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for SuggestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuggestionError::InvalidCell { source } => Some(source),
            _ => None,
        }
    }
}

impl From<CellError> for SuggestionError {
    fn from(source: CellError) -> Self {
        SuggestionError::InvalidCell { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_error_invalid_notation() {
        let err = CellError::InvalidNotation {
            notation: "z0".to_string(),
        };
        assert!(err.to_string().contains("'z0'"));
    }

    #[test]
    fn test_cell_error_out_of_bounds() {
        let err = CellError::OutOfBounds {
            notation: "h9".to_string(),
            rows: 8,
            columns: 8,
        };
        assert!(err.to_string().contains("h9"));
        assert!(err.to_string().contains("8x8"));
    }

    #[test]
    fn test_suggestion_error_empty() {
        assert!(SuggestionError::Empty.to_string().contains("Empty"));
    }

    #[test]
    fn test_suggestion_error_wraps_cell_error() {
        use std::error::Error;

        let err: SuggestionError = CellError::InvalidNotation {
            notation: "x".to_string(),
        }
        .into();
        assert!(err.to_string().contains("'x'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_suggestion_error_no_match() {
        let err = SuggestionError::NoMatchingMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_suggestion_error_promotion() {
        let err = SuggestionError::InvalidPromotion { char: 'x' };
        assert!(err.to_string().contains("'x'"));
        assert_eq!(err.clone(), err);
    }
}
