#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

//! Chess rules without castling, en passant or draw rules: move generation,
//! legality filtering, check, checkmate and stalemate detection.

pub mod board;
pub mod board_display;
pub mod color;
pub mod end_state;
pub mod error;
pub mod fen;
pub mod game;
pub mod movement;
pub mod piece;
pub mod position;
pub mod record;
pub mod repl;
