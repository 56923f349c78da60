//! Turn-driven selection, move and capture workflow

use crate::board::{Board, Pretty, PrettyStyle, ValidateError};
use crate::config::{FirstMover, GameConfig, Promotion, StaleClick};
use crate::geometry;
use crate::movegen::{self, MoveList};
use crate::moves::{Move, MoveParseError, SquarePair};
use crate::types::{Cell, Color, Coord, Piece};

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

/// Result of a single click
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClickOutcome {
    /// Nothing has changed
    Ignored,
    /// Piece on the given square is now selected
    Selected(Coord),
    /// Selection was dropped after a click on an unrelated square
    ///
    /// Only happens with [`StaleClick::Clear`].
    Deselected,
    /// Move was made, and the game goes on
    Moved(Move),
    /// Move captured the enemy king, so the game is over
    Won { mv: Move, winner: Color },
}

impl ClickOutcome {
    /// Returns the move made by the click, if any
    #[inline]
    pub fn mv(&self) -> Option<Move> {
        match *self {
            ClickOutcome::Moved(mv) | ClickOutcome::Won { mv, .. } => Some(mv),
            _ => None,
        }
    }
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ClickOutcome::Ignored => write!(f, "ignored"),
            ClickOutcome::Selected(c) => write!(f, "selected {}", c),
            ClickOutcome::Deselected => write!(f, "deselected"),
            ClickOutcome::Moved(mv) => match mv.piece().parts() {
                Some((color, piece)) => write!(
                    f,
                    "{} {} moved from {} to {}",
                    color.name(),
                    piece.name(),
                    mv.src(),
                    mv.dst()
                ),
                None => write!(f, "moved from {} to {}", mv.src(), mv.dst()),
            },
            ClickOutcome::Won { winner, .. } => write!(f, "{} wins", winner.name()),
        }
    }
}

/// Error returned by [`Game::play()`] and [`Game::play_str()`]
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum PlayError {
    /// Source square doesn't hold a piece of the side to move
    #[error("no piece of the side to move on {0}")]
    NotSelectable(Coord),
    /// Destination is not reachable by the selected piece
    #[error("illegal move {0}")]
    Illegal(SquarePair),
    /// Game already has a winner
    #[error("game is finished")]
    Finished,
    /// Cannot parse the move
    #[error("cannot parse move: {0}")]
    Parse(#[from] MoveParseError),
}

/// Running game
///
/// The game is driven by square clicks. Clicking a piece of the side to move selects it, and
/// clicking one of its destinations afterwards makes the move. The side to move changes only
/// after a completed move.
///
/// # Example
///
/// ```
/// # use makruk::{ClickOutcome, FirstMover, Game, Color, Coord};
/// # use std::str::FromStr;
/// #
/// let mut game = Game::new_game(FirstMover::White);
/// let a3 = Coord::from_str("a3").unwrap();
/// let a4 = Coord::from_str("a4").unwrap();
///
/// assert_eq!(game.click(a3), ClickOutcome::Selected(a3));
/// assert_eq!(game.legal_moves(), &[a4]);
///
/// let outcome = game.click(a4);
/// assert_eq!(outcome.to_string(), "White pawn moved from a3 to a4");
/// assert_eq!(game.current_turn(), Color::Black);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side: Color,
    selected: Option<Coord>,
    moves: MoveList,
    captures: Vec<Cell>,
    winner: Option<Color>,
    config: GameConfig,
}

impl Game {
    /// Starts a new game from the initial position
    ///
    /// The random first mover, if requested, is drawn from [`rand::thread_rng()`].
    pub fn new(config: GameConfig) -> Game {
        Game::with_rng(config, &mut rand::thread_rng())
    }

    /// Same as [`Game::new()`], but draws the random first mover from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Game {
        let side = config.first_mover.resolve(rng);
        Game::from_parts(Board::initial(), side, config)
    }

    /// Starts a new game with default configuration and the given first mover
    pub fn new_game(first_mover: FirstMover) -> Game {
        Game::new(GameConfig::default().with_first_mover(first_mover))
    }

    /// Starts a game from an arbitrary board
    ///
    /// `config.first_mover` is not used, the side to move is `side`.
    pub fn from_board(board: Board, side: Color, config: GameConfig) -> Result<Game, ValidateError> {
        board.validate()?;
        Ok(Game::from_parts(board, side, config))
    }

    fn from_parts(board: Board, side: Color, config: GameConfig) -> Game {
        Game {
            board,
            side,
            selected: None,
            moves: MoveList::new(),
            captures: Vec::new(),
            winner: None,
            config,
        }
    }

    /// Restarts the game from the initial position, keeping the configuration
    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rand::thread_rng());
    }

    /// Same as [`Game::reset()`], but draws the random first mover from `rng`
    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Game::with_rng(self.config, rng);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the side to move
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.side
    }

    /// Returns the piece on `c`, or `None` if the square is empty
    #[inline]
    pub fn occupant_at(&self, c: Coord) -> Option<Cell> {
        let cell = self.board.get(c);
        if cell.is_occupied() {
            Some(cell)
        } else {
            None
        }
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Coord> {
        self.selected
    }

    /// Returns the destinations of the selected piece, or an empty slice if nothing is selected
    #[inline]
    pub fn legal_moves(&self) -> &[Coord] {
        &self.moves
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the captured pieces, in order of capture
    #[inline]
    pub fn captures(&self) -> &[Cell] {
        &self.captures
    }

    /// Drops the current selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.moves.clear();
    }

    /// Selects the piece on `c` and caches its destinations
    ///
    /// Any previous selection is replaced. Returns `false` and leaves the game unchanged if `c`
    /// doesn't hold a piece of the side to move, or if the game is finished.
    pub fn select(&mut self, c: Coord) -> bool {
        if self.winner.is_some() || self.board.get(c).color() != Some(self.side) {
            return false;
        }
        self.select_unchecked(c);
        true
    }

    fn select_unchecked(&mut self, c: Coord) {
        self.selected = Some(c);
        self.moves = movegen::possible_moves(&self.board, self.board.get(c), c);
    }

    /// Handles a click on the square with column `col` and row `row`
    ///
    /// Columns go from file `a` to file `h`, rows go from rank 8 to rank 1. Clicks outside the
    /// board are ignored.
    pub fn on_square_clicked(&mut self, col: usize, row: usize) -> ClickOutcome {
        match Coord::from_xy(col, row) {
            Some(c) => self.click(c),
            None => ClickOutcome::Ignored,
        }
    }

    /// Handles a click on the square `c`
    pub fn click(&mut self, c: Coord) -> ClickOutcome {
        if self.winner.is_some() {
            return ClickOutcome::Ignored;
        }
        if self.select(c) {
            return ClickOutcome::Selected(c);
        }
        match self.selected {
            Some(src) if self.moves.contains(&c) => self.apply(src, c),
            Some(_) if self.config.stale_click == StaleClick::Clear => {
                self.clear_selection();
                ClickOutcome::Deselected
            }
            _ => ClickOutcome::Ignored,
        }
    }

    /// Selects `src` and moves it to `dst`
    ///
    /// Unlike [`Game::click()`], the game is not changed at all if the move cannot be made.
    pub fn play(&mut self, src: Coord, dst: Coord) -> Result<Move, PlayError> {
        if self.winner.is_some() {
            return Err(PlayError::Finished);
        }
        let cell = self.board.get(src);
        if cell.color() != Some(self.side) {
            return Err(PlayError::NotSelectable(src));
        }
        if !movegen::possible_moves(&self.board, cell, src).contains(&dst) {
            return Err(PlayError::Illegal(SquarePair { src, dst }));
        }
        self.select_unchecked(src);
        match self.apply(src, dst).mv() {
            Some(mv) => Ok(mv),
            None => Err(PlayError::Illegal(SquarePair { src, dst })),
        }
    }

    /// Parses a move like `a3a4` and plays it with [`Game::play()`]
    pub fn play_str(&mut self, s: &str) -> Result<Move, PlayError> {
        let pair = SquarePair::from_str(s)?;
        self.play(pair.src, pair.dst)
    }

    /// Wraps the board to allow pretty-printing, with the side to move shown
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        self.board.pretty_with_side(style, self.side)
    }

    fn apply(&mut self, src: Coord, dst: Coord) -> ClickOutcome {
        let piece = self.board.take(src);
        let captured = self.board.get(dst);
        let promoted = self.config.promotion == Promotion::Counselor
            && piece.piece() == Some(Piece::Pawn)
            && dst.rank() == geometry::promote_rank(self.side);
        let placed = if promoted {
            Cell::from_parts(self.side, Piece::Counselor)
        } else {
            piece
        };
        self.board.put(dst, placed);

        let mv = Move::new(piece, src, dst, captured, promoted);
        if captured.is_occupied() {
            self.captures.push(captured);
            if mv.is_king_capture() {
                self.winner = Some(self.side);
            }
        }
        self.clear_selection();
        let mover = self.side;
        self.side = self.side.inv();

        match self.winner {
            Some(winner) => {
                debug_assert_eq!(winner, mover);
                ClickOutcome::Won { mv, winner }
            }
            None => ClickOutcome::Moved(mv),
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new(GameConfig::default())
    }
}
