//! Player identification.
//!
//! The game is strictly two-player. Player One always opens a match and
//! turns alternate after every accepted move.

use serde::{Deserialize, Serialize};

/// One of the two players in a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Opens every match.
    #[default]
    One,
    /// Moves second.
    Two,
}

impl Player {
    /// The player who moves after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number, as shown to users.
    ///
    /// ```
    /// use rust_linegame::core::Player;
    ///
    /// assert_eq!(Player::One.number(), 1);
    /// assert_eq!(Player::Two.number(), 2);
    /// ```
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
