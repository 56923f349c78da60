//! Moves and their text form

use crate::types::{Cell, Color, Coord, CoordParseError, Piece};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a move in coordinate form
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
}

/// Source and destination squares, as typed by a user
///
/// The text form is two squares without separators, e.g. `a3a4`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SquarePair {
    /// Source square
    pub src: Coord,
    /// Destination square
    pub dst: Coord,
}

impl FromStr for SquarePair {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<SquarePair, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::BadLength);
        }
        let src = Coord::from_str(&s[0..2]).map_err(MoveParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(MoveParseError::BadDst)?;
        Ok(SquarePair { src, dst })
    }
}

impl fmt::Display for SquarePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

/// Completed move
///
/// Moves are produced by [`Game`](crate::game::Game) after they are applied, so they always
/// describe something that really happened on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Cell,
    src: Coord,
    dst: Coord,
    captured: Cell,
    promoted: bool,
}

impl Move {
    #[inline]
    pub(crate) const fn new(
        piece: Cell,
        src: Coord,
        dst: Coord,
        captured: Cell,
        promoted: bool,
    ) -> Move {
        Move {
            piece,
            src,
            dst,
            captured,
            promoted,
        }
    }

    /// Returns the piece that has moved, as it stood on the source square
    #[inline]
    pub const fn piece(&self) -> Cell {
        self.piece
    }

    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Returns the captured piece, or [`Cell::EMPTY`] if the move is not a capture
    #[inline]
    pub const fn captured(&self) -> Cell {
        self.captured
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_occupied()
    }

    /// Returns `true` if the move captured the enemy king
    #[inline]
    pub fn is_king_capture(&self) -> bool {
        self.captured.piece() == Some(Piece::King)
    }

    /// Returns `true` if a pawn was promoted to counselor by this move
    #[inline]
    pub const fn is_promote(&self) -> bool {
        self.promoted
    }

    #[inline]
    pub const fn side(&self) -> Option<Color> {
        self.piece.color()
    }

    #[inline]
    pub const fn squares(&self) -> SquarePair {
        SquarePair {
            src: self.src,
            dst: self.dst,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.squares())?;
        if self.promoted {
            write!(f, "=M")?;
        }
        Ok(())
    }
}
