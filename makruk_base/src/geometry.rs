use crate::types::{Color, Rank};

/// Row delta of one step forward for `c`
///
/// White moves up the board (towards row 0), Black moves down.
pub const fn forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub const fn home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

pub const fn pawn_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R3,
        Color::Black => Rank::R6,
    }
}

/// Rank on which a pawn of color `c` gets promoted, if promotion is enabled
///
/// It is the rank where the opponent's pawns start.
pub const fn promote_rank(c: Color) -> Rank {
    pawn_rank(c.inv())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks() {
        for c in Color::iter() {
            let home = home_rank(c).index() as isize;
            let pawns = pawn_rank(c).index() as isize;
            assert_eq!(pawns - home, 2 * forward_delta(c));
            assert_eq!(promote_rank(c), pawn_rank(c.inv()));
        }
    }
}
