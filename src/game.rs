use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    color::Color,
    end_state::EndState,
    error::InvalidMove,
    movement::Move,
    piece::{Piece, PieceKind},
    position::Position,
};

/// A board together with whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
}
impl Game {
    /// The standard starting position with White to move.
    pub fn new() -> Self {
        Game {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Replaces the board without any validation.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }
    /// The board as it would be after `movement`, with the piece on the
    /// start square swapped for its promotion when a pawn promotes.
    fn board_after(&self, movement: Move, piece: Piece) -> Board {
        let mut board = self.board.copy();
        board.add_piece(movement.start, None);
        board.add_piece(movement.end, Some(promoted(piece, movement)));
        board
    }
    /// Legal moves of the piece on `position`.
    ///
    /// Returns `None` when the square is empty, and an empty set when there
    /// is a piece that cannot move.
    pub fn valid_moves(&self, position: Position) -> Option<FxHashSet<Move>> {
        let piece = self.board[position]?;
        let moves = piece
            .moves(&self.board, position)
            .filter(|movement| {
                let probe = Game {
                    board: self.board_after(*movement, piece),
                    turn: self.turn,
                };
                !probe.is_in_check(piece.color)
            })
            .collect();
        Some(moves)
    }
    pub fn make_move(&mut self, movement: Move) -> Result<(), InvalidMove> {
        let piece = self.board[movement.start].ok_or(InvalidMove::NoPiece(movement.start))?;
        if piece.color != self.turn {
            return Err(InvalidMove::NotYourTurn {
                piece,
                turn: self.turn,
            });
        }
        if !self
            .valid_moves(movement.start)
            .is_some_and(|moves| moves.contains(&movement))
        {
            return Err(InvalidMove::Illegal(movement));
        }
        self.board = self.board_after(movement, piece);
        self.turn = !self.turn;
        Ok(())
    }
    /// Whether any piece of the other color could move onto `color`'s king.
    /// A board without that king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.board.king_of(color) else {
            return false;
        };
        self.board
            .pieces_of(!color)
            .any(|(position, piece)| piece.attacks(&self.board, position, king))
    }
    fn has_valid_moves(&self, color: Color) -> bool {
        self.board.pieces_of(color).any(|(position, _)| {
            self.valid_moves(position)
                .is_some_and(|moves| !moves.is_empty())
        })
    }
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_valid_moves(color)
    }
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_valid_moves(color)
    }
    /// How the game ended for the side to move, if it did.
    pub fn end_state(&self) -> Option<EndState> {
        if self.has_valid_moves(self.turn) {
            None
        } else if self.is_in_check(self.turn) {
            Some(EndState::Win(!self.turn))
        } else {
            Some(EndState::Draw)
        }
    }
}
impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
fn promoted(piece: Piece, movement: Move) -> Piece {
    match (piece.kind, movement.promotion) {
        (PieceKind::Pawn, Some(kind)) => Piece::new(piece.color, kind),
        _ => piece,
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        end_state::EndState,
        error::InvalidMove,
        game::Game,
        movement::Move,
        piece::{Piece, PieceKind},
        position::Position,
    };

    fn at(s: &str) -> Position {
        s.parse().unwrap()
    }
    fn play(game: &mut Game, moves: &[&str]) {
        for movement in moves {
            game.make_move(movement.parse().unwrap()).unwrap();
        }
    }

    #[test]
    fn twenty_moves_at_start() {
        let game = Game::new();
        let count: usize = game
            .board()
            .pieces_of(Color::White)
            .map(|(position, _)| game.valid_moves(position).unwrap().len())
            .sum();
        assert_eq!(count, 20);
    }
    #[test]
    fn empty_square_is_distinct_from_stuck_piece() {
        let game = Game::new();
        assert_eq!(game.valid_moves(at("e4")), None);
        assert_eq!(game.valid_moves(at("a1")).map(|moves| moves.len()), Some(0));
    }
    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut board = Board::new();
        board.add_piece(at("e1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.add_piece(at("e2"), Some(Piece::new(Color::White, PieceKind::Knight)));
        board.add_piece(at("e7"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        board.add_piece(at("e8"), Some(Piece::new(Color::Black, PieceKind::King)));
        let game = Game::from_board(board, Color::White);
        assert_eq!(game.valid_moves(at("e2")).map(|moves| moves.len()), Some(0));
    }
    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::new();
        board.add_piece(at("a1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.add_piece(at("b8"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        let game = Game::from_board(board, Color::White);
        assert_eq!(
            game.valid_moves(at("a1")).unwrap(),
            [Move::new(at("a1"), at("a2"))].into_iter().collect()
        );
    }
    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Color::White);
        play(&mut game, &["e2e4"]);
        assert_eq!(game.turn(), Color::Black);
        play(&mut game, &["e7e5"]);
        assert_eq!(game.turn(), Color::White);
    }
    #[test]
    fn rejects_moves_without_touching_the_game() {
        let mut game = Game::new();
        let before = game;
        assert_eq!(
            game.make_move(Move::new(at("e4"), at("e5"))),
            Err(InvalidMove::NoPiece(at("e4")))
        );
        assert_eq!(
            game.make_move(Move::new(at("e7"), at("e5"))),
            Err(InvalidMove::NotYourTurn {
                piece: Piece::new(Color::Black, PieceKind::Pawn),
                turn: Color::White,
            })
        );
        let illegal = Move::new(at("e2"), at("e5"));
        assert_eq!(game.make_move(illegal), Err(InvalidMove::Illegal(illegal)));
        assert_eq!(game, before);
    }
    #[test]
    fn promotion_requires_a_choice() {
        let mut board = Board::new();
        board.add_piece(at("a7"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.add_piece(at("h1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.add_piece(at("h8"), Some(Piece::new(Color::Black, PieceKind::King)));
        let mut game = Game::from_board(board, Color::White);
        let plain = Move::new(at("a7"), at("a8"));
        assert_eq!(game.make_move(plain), Err(InvalidMove::Illegal(plain)));
        game.make_move(Move::with_promotion(at("a7"), at("a8"), PieceKind::Knight))
            .unwrap();
        assert_eq!(
            game.board().get_piece(at("a8")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(game.board().get_piece(at("a7")), None);
    }
    #[test]
    fn check_without_king_is_false() {
        let mut board = Board::new();
        board.add_piece(at("d4"), Some(Piece::new(Color::Black, PieceKind::Queen)));
        let game = Game::from_board(board, Color::White);
        assert!(!game.is_in_check(Color::White));
    }
    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(game.is_in_check(Color::White));
        assert!(game.is_in_checkmate(Color::White));
        assert!(!game.is_in_stalemate(Color::White));
        assert!(!game.is_in_checkmate(Color::Black));
        assert_eq!(game.end_state(), Some(EndState::Win(Color::Black)));
    }
    #[test]
    fn queen_mate_on_the_open_diagonal() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);
        assert!(game.is_in_check(Color::Black));
        assert!(game.is_in_checkmate(Color::Black));
    }
    #[test]
    fn check_that_can_be_escaped_is_not_mate() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "f7f6", "d1h5"]);
        assert!(game.is_in_check(Color::Black));
        assert!(!game.is_in_checkmate(Color::Black));
        assert_eq!(game.end_state(), None);
    }
    #[test]
    fn lone_king_stalemate() {
        let mut board = Board::new();
        board.add_piece(at("a8"), Some(Piece::new(Color::Black, PieceKind::King)));
        board.add_piece(at("b6"), Some(Piece::new(Color::White, PieceKind::Queen)));
        board.add_piece(at("c1"), Some(Piece::new(Color::White, PieceKind::King)));
        let game = Game::from_board(board, Color::Black);
        assert!(!game.is_in_check(Color::Black));
        assert!(game.is_in_stalemate(Color::Black));
        assert!(!game.is_in_checkmate(Color::Black));
        assert_eq!(game.end_state(), Some(EndState::Draw));
    }
}
