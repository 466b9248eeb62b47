//! Core chess types: board representation, move generation, and game rules.

mod board;
mod castling_rights;
mod check;
mod chess_move;
mod error;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod side;

pub mod perft;

pub use board::{Board, PrettyBoard};
pub use castling_rights::CastlingRights;
pub use chess_move::Move;
pub use error::BoardError;
pub use make_move::MoveUndo;
pub use movegen::MoveList;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{BOARD_SIZE, Position};
pub use side::Side;
