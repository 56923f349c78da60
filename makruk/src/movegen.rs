//! Destination generation for a single piece

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry;
use crate::steps;
use crate::types::{Cell, Color, Coord, Piece};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Orthogonal ray directions as `(delta_file, delta_rank)`, towards file `a`, file `h`, rank 8
/// and rank 1
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions as `(delta_file, delta_rank)`
pub const DIAG_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// Ordered list of destination squares
///
/// No piece can produce more than 32 candidate squares, so the list is stored inline.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Coord, 32>);

impl Deref for MoveList {
    type Target = ArrayVec<Coord, 32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }

    pub fn as_bitboard(&self) -> Bitboard {
        self.0.iter().copied().collect()
    }
}

pub trait CoordPush {
    fn push(&mut self, c: Coord);
}

impl CoordPush for MoveList {
    fn push(&mut self, c: Coord) {
        self.0.push(c);
    }
}

impl CoordPush for Vec<Coord> {
    fn push(&mut self, c: Coord) {
        Vec::push(self, c);
    }
}

impl CoordPush for Bitboard {
    fn push(&mut self, c: Coord) {
        self.set(c);
    }
}

fn push_set<P: CoordPush>(dst: &mut P, set: Bitboard) {
    for c in set {
        dst.push(c);
    }
}

/// Walks from `origin` in direction `(delta_file, delta_rank)` for a piece of color `color`
///
/// Every empty square is pushed. The walk stops at the first occupied square, which is pushed
/// only if it holds an enemy piece.
pub fn cast_ray<P: CoordPush>(
    b: &Board,
    origin: Coord,
    color: Color,
    delta_file: isize,
    delta_rank: isize,
    dst: &mut P,
) {
    let mut cur = origin;
    while let Some(next) = cur.shift(delta_file, delta_rank) {
        match b.get(next).color() {
            None => dst.push(next),
            Some(c) if c == color => break,
            Some(_) => {
                dst.push(next);
                break;
            }
        }
        cur = next;
    }
}

pub fn gen_line_rays<P: CoordPush>(b: &Board, origin: Coord, color: Color, dst: &mut P) {
    for (delta_file, delta_rank) in LINE_DIRECTIONS {
        cast_ray(b, origin, color, delta_file, delta_rank, dst);
    }
}

// No Makruk piece slides diagonally, this is kept for variants which need a bishop-like piece.
pub fn gen_diag_rays<P: CoordPush>(b: &Board, origin: Coord, color: Color, dst: &mut P) {
    for (delta_file, delta_rank) in DIAG_DIRECTIONS {
        cast_ray(b, origin, color, delta_file, delta_rank, dst);
    }
}

fn gen_pawn<P: CoordPush>(b: &Board, origin: Coord, color: Color, dst: &mut P) {
    if let Some(forward) = origin.shift(0, geometry::forward_delta(color)) {
        if b.get(forward).is_empty() {
            dst.push(forward);
        }
    }
    push_set(dst, steps::pawn_captures(color, origin) & b.color_set(color.inv()));
}

/// Pushes all the candidate destinations for `piece` of color `color` standing on `origin`
///
/// Step pieces push every square they can reach on the board, so the output may contain squares
/// occupied by friendly pieces. Use [`possible_moves()`] or [`destinations()`] to get filtered
/// results.
pub fn gen_raw<P: CoordPush>(b: &Board, color: Color, piece: Piece, origin: Coord, dst: &mut P) {
    match piece {
        Piece::King => push_set(dst, steps::king(origin)),
        Piece::Counselor => push_set(dst, steps::counselor(origin)),
        Piece::Noble => push_set(dst, steps::noble(color, origin)),
        Piece::Knight => push_set(dst, steps::knight(origin)),
        Piece::Rook => gen_line_rays(b, origin, color, dst),
        Piece::Pawn => gen_pawn(b, origin, color, dst),
    }
}

/// Returns every square that `cell` standing on `origin` can move to
///
/// Squares with enemy pieces are included (they are captures), squares with friendly pieces are
/// not. The list is empty if `cell` is empty. It doesn't matter whether `cell` actually stands on
/// `origin` in `b`.
///
/// # Example
///
/// ```
/// # use makruk::{movegen, Board, Coord};
/// # use std::str::FromStr;
/// #
/// let b = Board::from_layout("8/8/3p4/8/3R4/8/8/8").unwrap();
/// let d4 = Coord::from_str("d4").unwrap();
/// let moves = movegen::possible_moves(&b, b.get(d4), d4);
///
/// assert!(moves.contains(&Coord::from_str("d5").unwrap()));
/// assert!(moves.contains(&Coord::from_str("d6").unwrap()));
/// assert!(!moves.contains(&Coord::from_str("d7").unwrap()));
/// ```
pub fn possible_moves(b: &Board, cell: Cell, origin: Coord) -> MoveList {
    let mut res = MoveList::new();
    if let Some((color, piece)) = cell.parts() {
        gen_raw(b, color, piece, origin, &mut res);
        res.retain(|c| b.get(*c).color() != Some(color));
    }
    res
}

/// Same as [`possible_moves()`], but returns the destinations as a set
pub fn destinations(b: &Board, cell: Cell, origin: Coord) -> Bitboard {
    match cell.parts() {
        Some((color, piece)) => {
            let mut res = Bitboard::EMPTY;
            gen_raw(b, color, piece, origin, &mut res);
            res & !b.color_set(color)
        }
        None => Bitboard::EMPTY,
    }
}

/// Returns `true` if `color` has at least one piece that can move
pub fn has_moves(b: &Board, color: Color) -> bool {
    b.color_set(color)
        .into_iter()
        .any(|c| destinations(b, b.get(c), c).is_nonempty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};
    use std::str::FromStr;

    fn coord(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    fn coords(list: &[&str]) -> Vec<Coord> {
        list.iter().map(|s| coord(s)).collect()
    }

    fn moves_at(b: &Board, s: &str) -> Vec<Coord> {
        let c = coord(s);
        possible_moves(b, b.get(c), c).to_vec()
    }

    #[test]
    fn test_rook_ray() {
        let b = Board::from_layout("8/8/3p4/8/3R4/8/8/8").unwrap();
        let d4 = coord("d4");
        let mut up: Vec<Coord> = Vec::new();
        cast_ray(&b, d4, Color::White, 0, -1, &mut up);
        assert_eq!(up, coords(&["d5", "d6"]));

        assert_eq!(
            moves_at(&b, "d4"),
            coords(&["c4", "b4", "a4", "e4", "f4", "g4", "h4", "d5", "d6", "d3", "d2", "d1"])
        );
    }

    #[test]
    fn test_rook_blocked() {
        let b = Board::from_layout("8/8/8/3P4/2PRp3/8/8/8").unwrap();
        assert_eq!(moves_at(&b, "d4"), coords(&["e4", "d3", "d2", "d1"]));
    }

    #[test]
    fn test_diag_rays() {
        let b = Board::from_layout("8/8/5p2/8/3R4/4P3/8/8").unwrap();
        let mut res: Vec<Coord> = Vec::new();
        gen_diag_rays(&b, coord("d4"), Color::White, &mut res);
        assert_eq!(res, coords(&["c5", "b6", "a7", "c3", "b2", "a1", "e5", "f6"]));
    }

    #[test]
    fn test_pawn() {
        // White pawn on b3, enemy on a4, friend on c4
        let b = Board::from_layout("8/8/8/8/p1P5/1P6/8/8").unwrap();
        assert_eq!(moves_at(&b, "b3"), coords(&["b4", "a4"]));

        // Blocked by an enemy ahead, no diagonal moves onto empty squares
        let b = Board::from_layout("8/8/8/8/1p6/1P6/8/8").unwrap();
        assert_eq!(moves_at(&b, "b3"), Vec::new());

        // Blocked by a friend ahead
        let b = Board::from_layout("8/8/8/8/1P6/1P6/8/8").unwrap();
        assert_eq!(moves_at(&b, "b3"), Vec::new());

        // Black moves down the board
        let b = Board::from_layout("8/8/2p5/1P1P4/8/8/8/8").unwrap();
        assert_eq!(moves_at(&b, "c6"), coords(&["c5", "b5", "d5"]));

        // Last rank, nowhere to go
        let b = Board::from_layout("P7/8/8/8/8/8/8/8").unwrap();
        assert_eq!(moves_at(&b, "a8"), Vec::new());
    }

    #[test]
    fn test_noble() {
        let b = Board::from_layout("8/8/8/8/3S4/8/8/8").unwrap();
        let mut res = moves_at(&b, "d4");
        res.sort_by_key(|c| c.index());
        assert_eq!(res, coords(&["c5", "d5", "e5", "c3", "e3"]));

        let b = Board::from_layout("8/8/8/3P4/3S4/2p5/8/8").unwrap();
        let mut res = moves_at(&b, "d4");
        res.sort_by_key(|c| c.index());
        assert_eq!(res, coords(&["c5", "e5", "c3", "e3"]));

        let b = Board::from_layout("8/8/8/8/3s4/3P4/8/8").unwrap();
        let mut res = moves_at(&b, "d4");
        res.sort_by_key(|c| c.index());
        assert_eq!(res, coords(&["c5", "e5", "c3", "d3", "e3"]));
    }

    #[test]
    fn test_step_pieces() {
        let b = Board::from_layout("8/8/8/8/8/8/1P6/K7").unwrap();
        let mut res = moves_at(&b, "a1");
        res.sort_by_key(|c| c.index());
        assert_eq!(res, coords(&["a2", "b1"]));

        let b = Board::from_layout("8/8/8/8/8/1p6/2P5/N7").unwrap();
        assert_eq!(moves_at(&b, "a1"), coords(&["b3"]));

        let b = Board::from_layout("8/8/8/2p1P3/3m4/8/8/8").unwrap();
        let mut res = moves_at(&b, "d4");
        res.sort_by_key(|c| c.index());
        assert_eq!(res, coords(&["e5", "c3", "e3"]));
    }

    #[test]
    fn test_empty_cell() {
        let b = Board::initial();
        assert!(possible_moves(&b, Cell::EMPTY, coord("e4")).is_empty());
        assert!(destinations(&b, Cell::EMPTY, coord("e4")).is_empty());
    }

    #[test]
    fn test_initial_moves() {
        let b = Board::initial();
        assert_eq!(moves_at(&b, "a3"), coords(&["a4"]));
        assert_eq!(moves_at(&b, "f6"), coords(&["f5"]));
        assert_eq!(moves_at(&b, "b1"), coords(&["d2"]));
        assert_eq!(moves_at(&b, "a1"), coords(&["a2"]));
        assert!(has_moves(&b, Color::White));
        assert!(has_moves(&b, Color::Black));
    }

    #[test]
    fn test_containment() {
        let boards = [
            Board::initial(),
            Board::from_layout("r3k2r/1p2s1p1/p1nm1pPp/3Pp3/2SpP1n1/PP1N1s2/2M2PR1/R3K3").unwrap(),
        ];
        for b in &boards {
            for origin in Coord::iter() {
                for color in Color::iter() {
                    for piece in Piece::iter() {
                        let cell = Cell::from_parts(color, piece);
                        let moves = possible_moves(b, cell, origin);
                        for c in &moves {
                            assert_ne!(b.get(*c).color(), Some(color));
                            assert_ne!(*c, origin);
                        }
                        assert_eq!(moves.as_bitboard(), destinations(b, cell, origin));
                        assert_eq!(moves.as_bitboard().len() as usize, moves.len());
                    }
                }
            }
        }
    }

    #[test]
    fn test_rank_files() {
        let b = Board::empty();
        let h8 = Coord::from_parts(File::H, Rank::R8);
        let rook = Cell::from_parts(Color::Black, Piece::Rook);
        assert_eq!(possible_moves(&b, rook, h8).len(), 14);
    }
}
