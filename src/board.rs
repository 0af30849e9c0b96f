use std::ops::{Index, IndexMut};

use crate::{
    board_display::IndexableBoard,
    color::Color,
    piece::{Piece, PieceKind},
    position::{Position, home_row, pawn_home_row},
};

/// An 8x8 grid of optional pieces. The grid is stored inline, so every copy
/// is fully independent of the board it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board::default()
    }
    pub fn starting_position() -> Self {
        let mut board = Board::new();
        board.reset_board();
        board
    }
    pub fn get_piece(&self, position: Position) -> Option<Piece> {
        self[position]
    }
    /// Sets or clears a square, replacing whatever stood there.
    pub fn add_piece(&mut self, position: Position, piece: Option<Piece>) {
        self[position] = piece;
    }
    pub fn reset_board(&mut self) {
        *self = Board::new();
        for color in Color::ALL {
            for (column, kind) in (1..).zip(PieceKind::STARTING_CONFIGURATION) {
                self[Position::new(home_row(color), column)] = Some(Piece::new(color, kind));
                self[Position::new(pawn_home_row(color), column)] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
    }
    pub fn copy(&self) -> Self {
        *self
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| self[position].map(|piece| (position, piece)))
    }
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
    pub fn king_of(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
}
impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Position) -> &Self::Output {
        &self.0[index.row() as usize - 1][index.column() as usize - 1]
    }
}
impl IndexMut<Position> for Board {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self.0[index.row() as usize - 1][index.column() as usize - 1]
    }
}
impl IndexableBoard for Board {
    fn index(&self, position: Position) -> Option<Piece> {
        self[position]
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        piece::{Piece, PieceKind},
        position::Position,
    };

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.get_piece("e1".parse().unwrap()),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get_piece("d8".parse().unwrap()),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.get_piece("h7".parse().unwrap()),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(board.get_piece("e4".parse().unwrap()), None);
    }
    #[test]
    fn reset_clears_stray_pieces() {
        let mut board = Board::new();
        board.add_piece(
            Position::new(4, 4),
            Some(Piece::new(Color::White, PieceKind::Queen)),
        );
        board.reset_board();
        assert_eq!(board, Board::starting_position());
    }
    #[test]
    fn add_piece_overwrites_and_clears() {
        let mut board = Board::new();
        let position = Position::new(3, 3);
        board.add_piece(position, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.add_piece(position, Some(Piece::new(Color::Black, PieceKind::Bishop)));
        assert_eq!(
            board.get_piece(position),
            Some(Piece::new(Color::Black, PieceKind::Bishop))
        );
        board.add_piece(position, None);
        assert_eq!(board.get_piece(position), None);
    }
    #[test]
    fn copy_is_independent() {
        let original = Board::starting_position();
        let mut copy = original.copy();
        copy.add_piece(Position::new(2, 5), None);
        copy.add_piece(
            Position::new(5, 5),
            Some(Piece::new(Color::White, PieceKind::Pawn)),
        );
        assert_eq!(original, Board::starting_position());
        assert_ne!(original, copy);
    }
    #[test]
    fn finds_kings() {
        let board = Board::starting_position();
        assert_eq!(board.king_of(Color::White), Some(Position::new(1, 5)));
        assert_eq!(board.king_of(Color::Black), Some(Position::new(8, 5)));
        assert_eq!(Board::new().king_of(Color::White), None);
    }
}
