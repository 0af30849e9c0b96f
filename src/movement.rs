use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{
    piece::{ParsePieceKindError, PieceKind},
    position::{ParsePositionError, Position},
};

/// A request to move whatever stands on `start` to `end`. `promotion` is set
/// only for pawns reaching the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub promotion: Option<PieceKind>,
}
impl Move {
    pub fn new(start: Position, end: Position) -> Self {
        Move {
            start,
            end,
            promotion: None,
        }
    }
    pub fn with_promotion(start: Position, end: Position, promotion: PieceKind) -> Self {
        Move {
            start,
            end,
            promotion: Some(promotion),
        }
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.lowercase())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    InvalidChar,
    ParsePositionError(ParsePositionError),
    ParsePieceKindError(ParsePieceKindError),
    Unexpected(char),
}
impl From<ParsePositionError> for ParseMoveError {
    fn from(value: ParsePositionError) -> Self {
        ParseMoveError::ParsePositionError(value)
    }
}
impl From<ParsePieceKindError> for ParseMoveError {
    fn from(value: ParsePieceKindError) -> Self {
        ParseMoveError::ParsePieceKindError(value)
    }
}
impl Display for ParseMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::InvalidChar => write!(f, "provided string contains invalid character")?,
            ParseMoveError::ParsePositionError(err) => write!(f, "{err}")?,
            ParseMoveError::ParsePieceKindError(err) => write!(f, "{err}")?,
            ParseMoveError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseMoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseMoveError::ParsePositionError(err) => Some(err),
            ParseMoveError::ParsePieceKindError(err) => Some(err),
            _ => None,
        }
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let start = s.get(0..2).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let end = s.get(2..4).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let mut rest = s
            .get(4..)
            .ok_or(ParseMoveError::InvalidChar)?
            .chars()
            .fuse();
        let promotion = rest.next().map(PieceKind::try_from).transpose()?;

        if let Some(c) = rest.next() {
            return Err(ParseMoveError::Unexpected(c));
        }
        Ok(Move {
            start,
            end,
            promotion,
        })
    }
}
