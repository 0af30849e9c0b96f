use std::fmt::{self, Display, Formatter};

use crate::{color::Color, piece::Piece, position::Position};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const ORIGIN: &str = "\x1b[30;102m";
const RESET: &str = "\x1b[0m";

pub trait IndexableBoard {
    fn index(&self, position: Position) -> Option<Piece>;
}
impl<T> IndexableBoard for &T
where
    T: IndexableBoard,
{
    fn index(&self, position: Position) -> Option<Piece> {
        T::index(self, position)
    }
}
/// Renders a board as coloured terminal squares, seen from `view`'s side,
/// with `info` lines printed to the right of the rows.
pub struct BoardDisplay<'a, 'b, T> {
    pub board: T,
    pub view: Color,
    pub show_coordinates: bool,
    pub origin: Option<Position>,
    pub highlighted: &'a [Position],
    pub info: &'b str,
}
impl<T> BoardDisplay<'_, '_, T> {
    pub fn new(board: T) -> Self {
        BoardDisplay {
            board,
            view: Color::White,
            show_coordinates: false,
            origin: None,
            highlighted: &[],
            info: "",
        }
    }
}
impl<T> Display for BoardDisplay<'_, '_, T>
where
    T: IndexableBoard,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for index in 0..8 {
            let row = match self.view {
                Color::White => 8 - index,
                Color::Black => 1 + index,
            };
            for index in 0..8 {
                let column = match self.view {
                    Color::White => 1 + index,
                    Color::Black => 8 - index,
                };
                let position = Position::new(row, column);
                let color = if self.origin == Some(position) {
                    ORIGIN
                } else if self.highlighted.contains(&position) {
                    HIGHLIGHTED
                } else {
                    match position.color() {
                        Color::White => WHITE,
                        Color::Black => BLACK,
                    }
                };
                let figurine = self.board.index(position).map_or(' ', Piece::figurine);
                write!(f, "{color}{figurine} {RESET}")?;
            }
            if self.show_coordinates {
                write!(f, "{row}")?;
            }
            if let Some(line) = lines.next() {
                write!(f, " {line}")?;
            }
            writeln!(f)?;
        }
        if self.show_coordinates {
            match self.view {
                Color::White => write!(f, "a b c d e f g h")?,
                Color::Black => write!(f, "h g f e d c b a")?,
            }
            if let Some(line) = lines.next() {
                write!(f, "   {line}")?;
            }
            writeln!(f)?;
        }
        for line in lines {
            writeln!(f, "                  {line}")?;
        }
        Ok(())
    }
}
