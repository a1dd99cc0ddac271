//! Compass directions and the movement vocabulary.
//!
//! Every direction has two spellings: the canonical compass name
//! (`north`, `south`, `east`, `west`) and the movement alias players
//! type at the prompt (`up`, `down`, `right`, `left`). Both parse; the
//! alias is what gets displayed.

use std::fmt;

/// A compass direction connecting two rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// North, typed as `up`.
    North,
    /// South, typed as `down`.
    South,
    /// East, typed as `right`.
    East,
    /// West, typed as `left`.
    West,
}

impl Direction {
    /// All directions, in display order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the opposite direction.
    ///
    /// Opposites are an involution: `d.opposite().opposite() == d`.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the canonical compass spelling.
    #[must_use]
    pub const fn compass_name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Returns the movement alias shown to players.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::North => "up",
            Self::South => "down",
            Self::East => "right",
            Self::West => "left",
        }
    }

    /// Parses a word into a direction, accepting the compass name or the
    /// movement alias, ASCII-case-insensitively.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_token(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| {
            word.eq_ignore_ascii_case(direction.compass_name())
                || word.eq_ignore_ascii_case(direction.alias())
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}
