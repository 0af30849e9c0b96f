use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Mul,
    str::FromStr,
};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePositionError {
    InvalidFile(char),
    InvalidRank(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParsePositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePositionError::InvalidFile(file) => write!(
                f,
                "found `{file}`, characters from `a` to `h` were expected instead"
            )?,
            ParsePositionError::InvalidRank(rank) => write!(
                f,
                "found `{rank}`, characters from `1` to `8` were expected instead"
            )?,
            ParsePositionError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParsePositionError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParsePositionError {}

/// A square on the board. Row 1 is White's back rank and column 1 is the
/// `a` file; both are always within `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}
impl Position {
    /// # Panics
    ///
    /// Panics if either coordinate is outside of `1..=8`.
    pub fn new(row: u8, column: u8) -> Self {
        assert!(
            (1..=8).contains(&row) && (1..=8).contains(&column),
            "({row}, {column}) is outside of the board"
        );
        Position { row, column }
    }
    pub fn new_checked(row: i8, column: i8) -> Option<Self> {
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(Position {
                row: row.unsigned_abs(),
                column: column.unsigned_abs(),
            })
        } else {
            None
        }
    }
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParsePositionError> {
        let column = match file {
            'a'..='h' => file as u8 - b'a' + 1,
            _ => return Err(ParsePositionError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => rank as u8 - b'0',
            _ => return Err(ParsePositionError::InvalidRank(rank)),
        };
        Ok(Position::new(row, column))
    }
    pub fn row(self) -> u8 {
        self.row
    }
    pub fn column(self) -> u8 {
        self.column
    }
    /// Every square, row by row starting from row 1.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=8).flat_map(|row| (1..=8).map(move |column| Position { row, column }))
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Position::new_checked(
            self.row.cast_signed() + movement.row,
            self.column.cast_signed() + movement.column,
        )
    }
    /// Squares along `direction`, excluding this one, up to the board edge.
    pub fn line(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..).map_while(move |distance| self.move_by(direction * distance))
    }
    /// Colour of the square itself; `a1` is dark.
    pub fn color(self) -> Color {
        match (self.row + self.column) % 2 {
            0 => Color::Black,
            _ => Color::White,
        }
    }
}
pub fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 8,
    }
}
pub fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}
pub fn pawn_promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
    }
}
pub fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.column - 1 + b'a') as char;
        write!(f, "{file}{}", self.row)?;
        Ok(())
    }
}
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(file) = chars.next() else {
            return Err(ParsePositionError::NotEnoughCharacter(0));
        };
        let Some(rank) = chars.next() else {
            return Err(ParsePositionError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParsePositionError::Unexpected(c));
        }
        Position::from_chars(file, rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub row: i8,
    pub column: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { row: 0, column: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { row: 1, column: 2 },
        Vector { row: 2, column: 1 },
        Vector { row: -1, column: 2 },
        Vector { row: -2, column: 1 },
        Vector { row: -1, column: -2 },
        Vector { row: -2, column: -1 },
        Vector { row: 1, column: -2 },
        Vector { row: 2, column: -1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { row: 1, column: 1 },
        Vector { row: 1, column: -1 },
        Vector { row: -1, column: 1 },
        Vector { row: -1, column: -1 },
        Vector { row: 1, column: 0 },
        Vector { row: 0, column: 1 },
        Vector { row: -1, column: 0 },
        Vector { row: 0, column: -1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { row: 1, column: 1 },
        Vector { row: 1, column: -1 },
        Vector { row: -1, column: 1 },
        Vector { row: -1, column: -1 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { row: 1, column: 0 },
        Vector { row: 0, column: 1 },
        Vector { row: -1, column: 0 },
        Vector { row: 0, column: -1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;

    pub fn pawn_single_move(color: Color) -> Self {
        Vector {
            row: pawn_direction(color),
            column: 0,
        }
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|column| Vector {
            row: pawn_direction(color),
            column,
        })
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            row: self.row * rhs,
            column: self.column * rhs,
        }
    }
}
