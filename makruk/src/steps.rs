use crate::bitboard::Bitboard;
use crate::types::{Color, Coord};

#[inline]
const fn bb(val: u64) -> Bitboard {
    Bitboard::from_raw(val)
}

include!(concat!(env!("OUT_DIR"), "/steps.rs"));

#[inline]
pub fn king(coord: Coord) -> Bitboard {
    KING_STEPS[coord.index()]
}

#[inline]
pub fn counselor(coord: Coord) -> Bitboard {
    COUNSELOR_STEPS[coord.index()]
}

#[inline]
pub fn noble(color: Color, coord: Coord) -> Bitboard {
    match color {
        Color::White => WHITE_NOBLE_STEPS[coord.index()],
        Color::Black => BLACK_NOBLE_STEPS[coord.index()],
    }
}

#[inline]
pub fn knight(coord: Coord) -> Bitboard {
    KNIGHT_STEPS[coord.index()]
}

#[inline]
pub fn pawn_captures(color: Color, coord: Coord) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[coord.index()],
        Color::Black => BLACK_PAWN_CAPTURES[coord.index()],
    }
}
