use std::str::FromStr;
use chess::{MoveGen, Piece};
use crate::board::{Board, CastlingRights};
use crate::error::{CodecError, Result};
use crate::r#move::Move;
use crate::utils::{flip_vertical, Bitboard, Color, PieceType, Square};

/// A `chess` crate board seen either as is or reflected top-to-bottom with the colors swapped.
///
/// Mirroring only toggles the view, so it is cheap and cannot fail. Every query maps
/// through the view: pieces and castling rights of a color come from the other color of
/// the underlying board, and squares are reflected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChessPosition {
    board: chess::Board,
    mirrored: bool,
}

const fn to_chess_color(color: Color) -> chess::Color {
    match color {
        Color::White => chess::Color::White,
        Color::Black => chess::Color::Black,
    }
}

const fn from_chess_color(color: chess::Color) -> Color {
    match color {
        chess::Color::White => Color::White,
        chess::Color::Black => Color::Black,
    }
}

const fn to_chess_piece(piece_type: PieceType) -> Piece {
    match piece_type {
        PieceType::Pawn => Piece::Pawn,
        PieceType::Rook => Piece::Rook,
        PieceType::Bishop => Piece::Bishop,
        PieceType::Knight => Piece::Knight,
        PieceType::Queen => Piece::Queen,
        PieceType::King => Piece::King,
    }
}

fn from_chess_square(square: chess::Square) -> Square {
    Square::from_masked(square.to_index() as u8)
}

fn from_chess_move(chess_move: &chess::ChessMove) -> Move {
    Move::new(from_chess_square(chess_move.get_source()), from_chess_square(chess_move.get_dest()))
}

/// Under-promotions share their squares with the queen promotion, so only the latter is kept.
fn is_distinct_move(chess_move: &chess::ChessMove) -> bool {
    matches!(chess_move.get_promotion(), None | Some(Piece::Queen))
}

impl ChessPosition {
    pub fn new(board: chess::Board) -> ChessPosition {
        ChessPosition { board, mirrored: false }
    }

    pub fn initial() -> ChessPosition {
        ChessPosition::new(chess::Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<ChessPosition> {
        chess::Board::from_str(fen.trim())
            .map(ChessPosition::new)
            .map_err(|_| CodecError::InvalidFen(fen.to_string()))
    }

    /// The underlying board, unaffected by the mirrored view.
    pub fn inner(&self) -> &chess::Board {
        &self.board
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Plays a legal move given in the coordinates of this view.
    pub fn play(&self, mv: Move) -> Result<ChessPosition> {
        let underlying_move = if self.mirrored { mv.mirrored() } else { mv };
        let chess_move = MoveGen::new_legal(&self.board)
            .filter(|chess_move| from_chess_move(chess_move) == underlying_move)
            .max_by_key(|chess_move| chess_move.get_promotion() == Some(Piece::Queen))
            .ok_or_else(|| CodecError::InvalidMove(mv.uci()))?;
        Ok(ChessPosition {
            board: self.board.make_move_new(chess_move),
            mirrored: self.mirrored,
        })
    }
}

impl Default for ChessPosition {
    fn default() -> Self {
        ChessPosition::initial()
    }
}

impl Board for ChessPosition {
    fn pieces(&self, piece_type: PieceType, color: Color) -> Bitboard {
        let underlying_color = if self.mirrored { color.flip() } else { color };
        let mask = (*self.board.pieces(to_chess_piece(piece_type))
            & *self.board.color_combined(to_chess_color(underlying_color))).0;
        if self.mirrored { flip_vertical(mask) } else { mask }
    }

    fn side_to_move(&self) -> Color {
        let side_to_move = from_chess_color(self.board.side_to_move());
        if self.mirrored { side_to_move.flip() } else { side_to_move }
    }

    fn castling_rights(&self) -> CastlingRights {
        let white = self.board.castle_rights(chess::Color::White);
        let black = self.board.castle_rights(chess::Color::Black);
        let rights = CastlingRights {
            white_kingside: white.has_kingside(),
            white_queenside: white.has_queenside(),
            black_kingside: black.has_kingside(),
            black_queenside: black.has_queenside(),
        };
        if self.mirrored { rights.mirrored() } else { rights }
    }

    fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(&self.board)
            .filter(is_distinct_move)
            .map(|chess_move| {
                let mv = from_chess_move(&chess_move);
                if self.mirrored { mv.mirrored() } else { mv }
            })
            .collect()
    }

    fn mirror(&self) -> Self {
        ChessPosition { board: self.board, mirrored: !self.mirrored }
    }
}
