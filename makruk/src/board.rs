//! Board and related things

use crate::bitboard::Bitboard;
use crate::geometry;
use crate::types::{Cell, Color, Coord, File, Piece, Rank};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Board validation error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// Too many pieces of given color
    ///
    /// No more than 16 pieces of each color is allowed.
    #[error("too many pieces of color {0:?}")]
    TooManyPieces(Color),
    /// One of the sides has more than one king
    #[error("more than one king of color {0:?}")]
    TooManyKings(Color),
}

/// Error parsing the piece layout of the board
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LayoutParseError {
    /// Layout contains non-ASCII characters
    #[error("non-ASCII data in layout")]
    NonAscii,
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Makruk board
///
/// The board only knows which piece stands on which square. It doesn't check whether the
/// position makes sense, so it can be used to set up arbitrary positions. Turn, selection and
/// captures are tracked by [`Game`](crate::game::Game).
///
/// # Example
///
/// ```
/// # use makruk::{Board, Cell, Color, File, Piece, Rank};
/// #
/// let mut board = Board::empty();
/// board.put2(File::D, Rank::R4, Cell::from_parts(Color::White, Piece::Rook));
/// board.put2(File::D, Rank::R6, Cell::from_parts(Color::Black, Piece::Pawn));
///
/// assert_eq!(board.as_layout(), "8/8/3p4/8/3R4/8/8/8");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// Returns a board without pieces
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
        }
    }

    /// Returns a board with the initial position
    ///
    /// Back ranks hold rook, knight, noble, counselor, king, noble, knight, rook from file `a`
    /// to file `h`. Pawns start on the third rank of their side, i.e. on rank 3 for White and on
    /// rank 6 for Black.
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for color in Color::iter() {
            let rank = geometry::home_rank(color);
            res.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            res.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::C, rank, Cell::from_parts(color, Piece::Noble));
            res.put2(File::D, rank, Cell::from_parts(color, Piece::Counselor));
            res.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            res.put2(File::F, rank, Cell::from_parts(color, Piece::Noble));
            res.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
            for file in File::iter() {
                res.put2(
                    file,
                    geometry::pawn_rank(color),
                    Cell::from_parts(color, Piece::Pawn),
                );
            }
        }
        res
    }

    /// Parses a board from its layout
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_layout(s: &str) -> Result<Board, LayoutParseError> {
        Board::from_str(s)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `cell` to the square with coordinate `c`
    ///
    /// Putting [`Cell::EMPTY`] clears the square. No legality checks are performed.
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    /// Puts `cell` to the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Clears the square with coordinate `c` and returns its previous contents
    #[inline]
    pub fn take(&mut self, c: Coord) -> Cell {
        let cell = self.get(c);
        self.put(c, Cell::EMPTY);
        cell
    }

    /// Returns the set of squares occupied by pieces of color `c`
    pub fn color_set(&self, c: Color) -> Bitboard {
        Coord::iter()
            .filter(|&coord| self.get(coord).color() == Some(c))
            .collect()
    }

    /// Returns the set of all occupied squares
    pub fn occupied(&self) -> Bitboard {
        Coord::iter()
            .filter(|&coord| self.get(coord).is_occupied())
            .collect()
    }

    /// Returns the number of pieces of color `c`
    pub fn count(&self, c: Color) -> usize {
        self.cells.iter().filter(|cell| cell.color() == Some(c)).count()
    }

    /// Returns the position of the king of color `c`, or `None` if it was captured
    pub fn king_pos(&self, c: Color) -> Option<Coord> {
        let king = Cell::from_parts(c, Piece::King);
        Coord::iter().find(|&coord| self.get(coord) == king)
    }

    /// Checks that the board doesn't contain more pieces than a game can produce
    pub fn validate(&self) -> Result<(), ValidateError> {
        for color in Color::iter() {
            if self.count(color) > 16 {
                return Err(ValidateError::TooManyPieces(color));
            }
            let king = Cell::from_parts(color, Piece::King);
            if self.cells.iter().filter(|&&cell| cell == king).count() > 1 {
                return Err(ValidateError::TooManyKings(color));
            }
        }
        Ok(())
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use makruk::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnsmksnr
    /// 7|........
    /// 6|pppppppp
    /// 5|........
    /// 4|........
    /// 3|PPPPPPPP
    /// 2|........
    /// 1|RNSMKSNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            board: self,
            side: None,
            style,
        }
    }

    /// Same as [`Board::pretty()`], but also shows the side to move in the lower left corner
    #[inline]
    pub fn pretty_with_side(&self, style: PrettyStyle, side: Color) -> Pretty<'_> {
        Pretty {
            board: self,
            side: Some(side),
            style,
        }
    }

    /// Converts the board into a layout string
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this function instead of
    /// `to_string()` for better readability.
    #[inline]
    pub fn as_layout(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    side: Option<Color>,
    style: PrettyStyle,
}

fn parse_cells(s: &str) -> Result<[Cell; 64], LayoutParseError> {
    type Error = LayoutParseError;

    let mut file = 0_usize;
    let mut rank = 0_usize;
    let mut pos = 0_usize;
    let mut cells = [Cell::EMPTY; 64];
    for b in s.bytes() {
        match b {
            b'1'..=b'8' => {
                let add = (b - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                file += add;
                pos += add;
            }
            b'/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(Rank::from_index(rank)));
                }
                rank += 1;
                file = 0;
                if rank >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                cells[pos] = match Cell::from_char(b as char) {
                    Some(cell) if cell.is_occupied() => cell,
                    _ => return Err(Error::UnexpectedChar(b as char)),
                };
                file += 1;
                pos += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(Rank::from_index(rank)));
    }
    if rank < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for Board {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        if !s.is_ascii() {
            return Err(LayoutParseError::NonAscii);
        }
        Ok(Board {
            cells: parse_cells(s.trim())?,
        })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            if rank.index() != 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                let cell = self.get2(file, rank);
                if cell.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty != 0 {
                    write!(f, "{}", (b'0' + empty) as char)?;
                    empty = 0;
                }
                write!(f, "{}", cell)?;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const WHITE_INDICATOR: char;
    const BLACK_INDICATOR: char;

    fn cell(c: Cell) -> char;

    fn indicator(c: Option<Color>) -> char {
        match c {
            Some(Color::White) => Self::WHITE_INDICATOR,
            Some(Color::Black) => Self::BLACK_INDICATOR,
            None => ' ',
        }
    }

    fn fmt(b: &Board, side: Option<Color>, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(b.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, "{}{}", Self::indicator(side), Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const WHITE_INDICATOR: char = 'W';
    const BLACK_INDICATOR: char = 'B';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const WHITE_INDICATOR: char = '○';
    const BLACK_INDICATOR: char = '●';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, self.side, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, self.side, f),
        }
    }
}
