use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{
    board::Board,
    color::{Color, ParseColorError},
    game::Game,
    piece::{ParsePieceKindError, Piece},
    position::Position,
};

/// The placement and side-to-move fields of a FEN record. Castling and en
/// passant fields are accepted on input and written as `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fen {
    pub board: Board,
    pub turn: Color,
}
impl From<Fen> for Game {
    fn from(value: Fen) -> Self {
        Game::from_board(value.board, value.turn)
    }
}
impl From<&Game> for Fen {
    fn from(value: &Game) -> Self {
        Fen {
            board: *value.board(),
            turn: value.turn(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseFenError {
    NotEnoughRows,
    ExceedingRows,
    NotEnoughSquaresOnRow(u8),
    ExceedingSquaresOnRow(u8),
    InvalidPiece(ParsePieceKindError),
    MissingTurn,
    InvalidTurn(ParseColorError),
}
impl From<ParsePieceKindError> for ParseFenError {
    fn from(value: ParsePieceKindError) -> Self {
        ParseFenError::InvalidPiece(value)
    }
}
impl From<ParseColorError> for ParseFenError {
    fn from(value: ParseColorError) -> Self {
        ParseFenError::InvalidTurn(value)
    }
}
impl Display for ParseFenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseFenError::NotEnoughRows => write!(f, "found less than 8 rows")?,
            ParseFenError::ExceedingRows => write!(f, "found more than 8 rows")?,
            ParseFenError::NotEnoughSquaresOnRow(row) => {
                write!(f, "row {row} has less than 8 squares")?;
            }
            ParseFenError::ExceedingSquaresOnRow(row) => {
                write!(f, "row {row} has more than 8 squares")?;
            }
            ParseFenError::InvalidPiece(err) => write!(f, "{err}")?,
            ParseFenError::MissingTurn => write!(f, "side to move is missing")?,
            ParseFenError::InvalidTurn(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseFenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseFenError::InvalidPiece(err) => Some(err),
            ParseFenError::InvalidTurn(err) => Some(err),
            _ => None,
        }
    }
}
impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let placement = fields.next().unwrap_or_default();
        let mut board = Board::new();
        let mut rows = placement.split('/');
        for row in (1..=8).rev() {
            let text = rows.next().ok_or(ParseFenError::NotEnoughRows)?;
            let mut column = 0;
            for c in text.chars() {
                if matches!(c, '1'..='8') {
                    column += c as u8 - b'0';
                } else {
                    column += 1;
                    if column <= 8 {
                        board.add_piece(Position::new(row, column), Some(Piece::from_fen(c)?));
                    }
                }
                if column > 8 {
                    return Err(ParseFenError::ExceedingSquaresOnRow(row));
                }
            }
            if column < 8 {
                return Err(ParseFenError::NotEnoughSquaresOnRow(row));
            }
        }
        if rows.next().is_some() {
            return Err(ParseFenError::ExceedingRows);
        }
        let turn = fields.next().ok_or(ParseFenError::MissingTurn)?.parse()?;
        Ok(Fen { board, turn })
    }
}
impl Display for Fen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            let mut empty = 0;
            for column in 1..=8 {
                match self.board[Position::new(row, column)] {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.fen())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 1 {
                write!(f, "/")?;
            }
        }
        write!(f, " {} - - 0 1", self.turn.lowercase())?;
        Ok(())
    }
}
