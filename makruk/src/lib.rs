//! # Makruk rules engine
//!
//! This crate implements the rules of Makruk (Thai chess): board representation, move generation
//! for every piece kind, and a click-driven game workflow which selects pieces, makes moves,
//! records captures and detects the winner once a king is captured.
//!
//! Rendering and input polling are left to the caller. A frontend reports clicked squares to
//! [`Game::on_square_clicked()`] and reads the state back through queries like
//! [`Game::selected_square()`] and [`Game::legal_moves()`].
//!
//! # Example
//!
//! ```
//! use makruk::{ClickOutcome, Color, FirstMover, Game};
//!
//! let mut game = Game::new_game(FirstMover::White);
//!
//! // Select the pawn on a3 (column 0, row 5) and push it to a4 (column 0, row 4)
//! assert!(matches!(game.on_square_clicked(0, 5), ClickOutcome::Selected(_)));
//! assert!(matches!(game.on_square_clicked(0, 4), ClickOutcome::Moved(_)));
//! assert_eq!(game.current_turn(), Color::Black);
//!
//! // Moves can be also made from text
//! let mv = game.play_str("h6h5").unwrap();
//! assert_eq!(mv.to_string(), "h6h5");
//! assert_eq!(game.current_turn(), Color::White);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod movegen;
pub mod moves;

mod steps;

pub use makruk_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::Board;
pub use config::{FirstMover, GameConfig, Promotion, StaleClick};
pub use game::{ClickOutcome, Game, PlayError};
pub use moves::Move;
pub use types::{Cell, Color, Coord, File, Piece, Rank};
