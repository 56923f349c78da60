//! Game configuration

use crate::types::Color;

use rand::Rng;

/// Which side makes the first move
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FirstMover {
    White,
    Black,
    /// Side is drawn at random with equal probability
    Random,
}

impl FirstMover {
    /// Resolves the first mover into a concrete color, using `rng` for [`FirstMover::Random`]
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Color {
        match self {
            FirstMover::White => Color::White,
            FirstMover::Black => Color::Black,
            FirstMover::Random => {
                if rng.gen_bool(0.5) {
                    Color::White
                } else {
                    Color::Black
                }
            }
        }
    }
}

impl Default for FirstMover {
    #[inline]
    fn default() -> Self {
        FirstMover::Random
    }
}

impl From<Color> for FirstMover {
    #[inline]
    fn from(c: Color) -> Self {
        match c {
            Color::White => FirstMover::White,
            Color::Black => FirstMover::Black,
        }
    }
}

/// What happens to the selection after a click that neither selects nor moves
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StaleClick {
    /// Selection stays, so the player may pick another target
    Keep,
    /// Selection is dropped and the piece must be selected again
    Clear,
}

impl Default for StaleClick {
    #[inline]
    fn default() -> Self {
        StaleClick::Keep
    }
}

/// Pawn promotion rule
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Promotion {
    /// Pawns never promote
    Disabled,
    /// Pawn turns into a counselor upon reaching the rank where enemy pawns start
    Counselor,
}

impl Default for Promotion {
    #[inline]
    fn default() -> Self {
        Promotion::Disabled
    }
}

/// Parameters of a single game
///
/// # Example
///
/// ```
/// # use makruk::{GameConfig, FirstMover, Promotion, StaleClick};
/// let config = GameConfig::default()
///     .with_first_mover(FirstMover::White)
///     .with_promotion(Promotion::Counselor);
/// assert_eq!(config.first_mover, FirstMover::White);
/// assert_eq!(config.stale_click, StaleClick::Keep);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub first_mover: FirstMover,
    pub stale_click: StaleClick,
    pub promotion: Promotion,
}

impl GameConfig {
    #[inline]
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    #[inline]
    pub fn with_stale_click(mut self, stale_click: StaleClick) -> Self {
        self.stale_click = stale_click;
        self
    }

    #[inline]
    pub fn with_promotion(mut self, promotion: Promotion) -> Self {
        self.promotion = promotion;
        self
    }
}
