//! Match (game), MatchSide, Side and MatchStatus.

use crate::models::participant::{Participant, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match, assigned at generation time.
pub type MatchId = Uuid;

/// Display name of the bye placeholder.
pub const BYE_NAME: &str = "BYE";

/// Which side of a match (player1 or player2).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// Lifecycle of a single match. Only moves forward.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Finished,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Upcoming => write!(f, "UPCOMING"),
            MatchStatus::Live => write!(f, "LIVE"),
            MatchStatus::Finished => write!(f, "FINISHED"),
        }
    }
}

/// One side of a match: a user reference and the name to display.
/// The bye placeholder has no user.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSide {
    pub user: Option<UserId>,
    pub name: String,
}

impl MatchSide {
    pub fn bye() -> Self {
        Self {
            user: None,
            name: BYE_NAME.to_string(),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.user.is_none()
    }
}

impl From<&Participant> for MatchSide {
    fn from(p: &Participant) -> Self {
        Self {
            user: Some(p.user),
            name: p.display_name().to_string(),
        }
    }
}

/// A single scheduled contest between two sides.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub player1: MatchSide,
    pub player2: MatchSide,
    pub score1: u32,
    pub score2: u32,
    pub status: MatchStatus,
    /// 1-based round number.
    pub round: u32,
    /// Label computed once at generation time.
    pub round_name: String,
    /// Set only when `status` is `Finished`.
    pub winner: Option<UserId>,
}

impl GameMatch {
    pub fn new(player1: MatchSide, player2: MatchSide, round: u32, round_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1,
            player2,
            score1: 0,
            score2: 0,
            status: MatchStatus::Upcoming,
            round,
            round_name: round_name.into(),
            winner: None,
        }
    }

    /// Automatic advance for the unpaired participant: already finished, 1-0.
    pub fn bye(recipient: &Participant, round: u32, round_name: impl Into<String>) -> Self {
        Self {
            score1: 1,
            status: MatchStatus::Finished,
            winner: Some(recipient.user),
            ..Self::new(recipient.into(), MatchSide::bye(), round, round_name)
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player2.is_bye()
    }

    pub fn side(&self, side: Side) -> &MatchSide {
        match side {
            Side::One => &self.player1,
            Side::Two => &self.player2,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::One => self.score1,
            Side::Two => self.score2,
        }
    }

    /// Which side the given user plays on, if any.
    pub fn side_of(&self, user: UserId) -> Option<Side> {
        if self.player1.user == Some(user) {
            Some(Side::One)
        } else if self.player2.user == Some(user) {
            Some(Side::Two)
        } else {
            None
        }
    }

    /// True if the user plays in this match.
    pub fn involves(&self, user: UserId) -> bool {
        self.side_of(user).is_some()
    }
}
