//! Replies from external move suggesters.
//!
//! Accepts the engine-protocol form `bestmove <move> [ponder <move>]` or a
//! bare `<move>`, where a move is two algebraic cells and an optional
//! promotion letter (`e2e4`, `e7e8q`, `b10b9` on tall boards).

use crate::board::{Cell, Dimensions, PieceKind, SuggestionError};

/// A parsed move reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub from: Cell,
    pub to: Cell,
    pub promotion: Option<PieceKind>,
}

impl Suggestion {
    /// Back to coordinate notation.
    #[must_use]
    pub fn notation(&self, dims: Dimensions) -> String {
        let mut text = format!("{}{}", self.from.to_algebraic(dims), self.to.to_algebraic(dims));
        if let Some(kind) = self.promotion {
            text.push(kind.to_char());
        }
        text
    }
}

/// Split a leading `<file><rank>` off `text`.
fn split_cell(text: &str) -> Option<(&str, &str)> {
    let file = text.chars().next()?;
    if !file.is_ascii_lowercase() {
        return None;
    }
    let digits = text[1..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - 1);
    if digits == 0 {
        return None;
    }
    Some(text.split_at(1 + digits))
}

/// Parse `reply` against a board of `dims`.
pub fn parse_suggestion(reply: &str, dims: Dimensions) -> Result<Suggestion, SuggestionError> {
    let invalid = || SuggestionError::InvalidFormat {
        reply: reply.trim().to_string(),
    };
    let mut tokens = reply.split_whitespace();
    let first = tokens.next().ok_or(SuggestionError::Empty)?;
    let token = if first == "bestmove" {
        tokens.next()
    } else {
        Some(first)
    }
    .ok_or_else(invalid)?;

    let (from, rest) = split_cell(token).ok_or_else(invalid)?;
    let (to, rest) = split_cell(rest).ok_or_else(invalid)?;

    let mut letters = rest.chars();
    let promotion = match (letters.next(), letters.next()) {
        (None, _) => None,
        (Some(c), None) => match PieceKind::from_char(c) {
            Some(kind) if kind != PieceKind::Pawn && kind != PieceKind::Duck => Some(kind),
            _ => return Err(SuggestionError::InvalidPromotion { char: c }),
        },
        (Some(_), Some(_)) => return Err(invalid()),
    };

    Ok(Suggestion {
        from: Cell::from_algebraic(from, dims)?,
        to: Cell::from_algebraic(to, dims)?,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellError;

    const STD: Dimensions = Dimensions::STANDARD;

    #[test]
    fn test_bestmove_with_ponder() {
        let s = parse_suggestion("bestmove e2e4 ponder e7e5", STD).unwrap();
        assert_eq!(s.from, Cell::new(6, 4));
        assert_eq!(s.to, Cell::new(4, 4));
        assert_eq!(s.promotion, None);
    }

    #[test]
    fn test_bare_move_with_promotion() {
        let s = parse_suggestion("  e7e8q\n", STD).unwrap();
        assert_eq!(s.promotion, Some(PieceKind::Queen));
        assert_eq!(s.notation(STD), "e7e8q");
    }

    #[test]
    fn test_multi_digit_ranks() {
        let dims = Dimensions::new(10, 8);
        let s = parse_suggestion("a10b9", dims).unwrap();
        assert_eq!(s.from, Cell::new(0, 0));
        assert_eq!(s.to, Cell::new(1, 1));
    }

    #[test]
    fn test_rejects_malformed_replies() {
        assert_eq!(parse_suggestion("   ", STD), Err(SuggestionError::Empty));
        assert!(matches!(
            parse_suggestion("bestmove", STD),
            Err(SuggestionError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_suggestion("bestmove (none)", STD),
            Err(SuggestionError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_suggestion("e2", STD),
            Err(SuggestionError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_suggestion("e7e8qq", STD),
            Err(SuggestionError::InvalidFormat { .. })
        ));
        assert_eq!(
            parse_suggestion("e7e8x", STD),
            Err(SuggestionError::InvalidPromotion { char: 'x' })
        );
    }

    #[test]
    fn test_off_board_cell() {
        assert!(matches!(
            parse_suggestion("e2e9", STD),
            Err(SuggestionError::InvalidCell {
                source: CellError::OutOfBounds { .. }
            })
        ));
    }
}
