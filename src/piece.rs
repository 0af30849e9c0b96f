use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{
    board::Board,
    color::Color,
    movement::Move,
    position::{Position, Vector, pawn_home_row, pawn_promotion_row},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const PROMOTION_CHOICES: [Self; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
    pub fn lowercase(self) -> char {
        self.uppercase().to_ascii_lowercase()
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePieceKindError {
    Empty,
    UnknownSymbol(char),
    UnexpectedSymbol(char),
}
impl Display for ParsePieceKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePieceKindError::Empty => write!(f, "expected one character, found none instead")?,
            ParsePieceKindError::UnknownSymbol(c) => write!(
                f,
                "`{c}` is neither of `p`, `n`, `b`, `r`, `q`, `k`, or uppercase letter of any of these"
            )?,
            ParsePieceKindError::UnexpectedSymbol(c) => {
                write!(f, "unexpected `{c}`, only one character is expected")?;
            }
        }
        Ok(())
    }
}
impl Error for ParsePieceKindError {}

impl TryFrom<char> for PieceKind {
    type Error = ParsePieceKindError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let piece = match value {
            'p' | 'P' => PieceKind::Pawn,
            'n' | 'N' => PieceKind::Knight,
            'b' | 'B' => PieceKind::Bishop,
            'r' | 'R' => PieceKind::Rook,
            'q' | 'Q' => PieceKind::Queen,
            'k' | 'K' => PieceKind::King,
            c => return Err(ParsePieceKindError::UnknownSymbol(c)),
        };
        Ok(piece)
    }
}
impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        let piece = characters
            .next()
            .ok_or(ParsePieceKindError::Empty)?
            .try_into()?;

        if let Some(c) = characters.next() {
            return Err(ParsePieceKindError::UnexpectedSymbol(c));
        }
        Ok(piece)
    }
}

/// A piece as a value: two pieces of the same color and kind are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}
impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
    pub fn fen(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
    pub fn from_fen(c: char) -> Result<Self, ParsePieceKindError> {
        let kind = PieceKind::try_from(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(color, kind))
    }
    pub fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
    fn can_land_on(self, board: &Board, destination: Position) -> bool {
        board[destination].is_none_or(|piece| piece.color != self.color)
    }
    fn step_moves<'a>(
        self,
        board: &'a Board,
        position: Position,
        moves: &'static [Vector],
    ) -> impl Iterator<Item = Move> + 'a {
        moves
            .iter()
            .filter_map(move |movement| position.move_by(*movement))
            .filter(move |destination| self.can_land_on(board, *destination))
            .map(move |destination| Move::new(position, destination))
    }
    /// Walks one ray, keeping empty squares and stopping at the first
    /// occupied one, which is kept only when it holds an enemy.
    fn directional_moves<'a>(
        self,
        board: &'a Board,
        position: Position,
        direction: Vector,
    ) -> impl Iterator<Item = Move> + 'a {
        let mut resume = true;
        position
            .line(direction)
            .map_while(move |destination| {
                if !resume {
                    return None;
                }
                match board[destination] {
                    None => Some(Some(destination)),
                    Some(piece) => {
                        resume = false;
                        Some((piece.color != self.color).then_some(destination))
                    }
                }
            })
            .flatten()
            .map(move |destination| Move::new(position, destination))
    }
    fn all_directional_moves<'a>(
        self,
        board: &'a Board,
        position: Position,
        directions: &'static [Vector],
    ) -> impl Iterator<Item = Move> + 'a {
        directions
            .iter()
            .flat_map(move |direction| self.directional_moves(board, position, *direction))
    }
    fn pawn_moves<'a>(self, board: &'a Board, position: Position) -> impl Iterator<Item = Move> + 'a {
        static PROMOTION_CHOICES: [Option<PieceKind>; 4] = [
            Some(PieceKind::Queen),
            Some(PieceKind::Rook),
            Some(PieceKind::Bishop),
            Some(PieceKind::Knight),
        ];
        static NON_PROMOTION_CHOICES: [Option<PieceKind>; 1] = [None];
        let forward_jumps = if position.row() == pawn_home_row(self.color) {
            2
        } else {
            1
        };
        position
            .line(Vector::pawn_single_move(self.color))
            .take(forward_jumps)
            .take_while(move |destination| board[*destination].is_none())
            .chain(
                Vector::pawn_attacks(self.color)
                    .into_iter()
                    .filter_map(move |movement| position.move_by(movement))
                    .filter(move |destination| {
                        board[*destination].is_some_and(|piece| piece.color != self.color)
                    }),
            )
            .flat_map(move |destination| {
                let promotion_choices: &[_] =
                    if destination.row() == pawn_promotion_row(self.color) {
                        &PROMOTION_CHOICES
                    } else {
                        &NON_PROMOTION_CHOICES
                    };
                promotion_choices.iter().map(move |promotion| Move {
                    start: position,
                    end: destination,
                    promotion: *promotion,
                })
            })
    }
    /// Every destination this piece reaches from `position` by its own
    /// movement rule, whether or not the move leaves its king attacked.
    pub fn moves<'a>(self, board: &'a Board, position: Position) -> Box<dyn Iterator<Item = Move> + 'a> {
        match self.kind {
            PieceKind::Pawn => Box::new(self.pawn_moves(board, position)),
            PieceKind::Knight => Box::new(self.step_moves(board, position, &Vector::KNIGHT_MOVES)),
            PieceKind::Bishop => Box::new(self.all_directional_moves(
                board,
                position,
                &Vector::BISHOP_DIRECTIONS,
            )),
            PieceKind::Rook => Box::new(self.all_directional_moves(
                board,
                position,
                &Vector::ROOK_DIRECTIONS,
            )),
            PieceKind::Queen => Box::new(self.all_directional_moves(
                board,
                position,
                &Vector::QUEEN_DIRECTIONS,
            )),
            PieceKind::King => Box::new(self.step_moves(board, position, &Vector::KING_MOVES)),
        }
    }
    pub fn attacks(self, board: &Board, position: Position, target: Position) -> bool {
        self.moves(board, position)
            .any(|movement| movement.end == target)
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
