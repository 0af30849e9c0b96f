use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{color::Color, movement::Move, piece::Piece, position::Position};

/// Why `Game::make_move` refused a move. The game is left untouched in
/// every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidMove {
    NoPiece(Position),
    NotYourTurn { piece: Piece, turn: Color },
    Illegal(Move),
}
impl Display for InvalidMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::NoPiece(position) => write!(f, "no piece found on {position}")?,
            InvalidMove::NotYourTurn { piece, turn } => {
                write!(f, "cannot move a {piece}, it is {turn}'s turn")?;
            }
            InvalidMove::Illegal(movement) => write!(f, "{movement} is an invalid move")?,
        }
        Ok(())
    }
}
impl Error for InvalidMove {}
