//! Cumulative point totals awarded to match winners.

use crate::models::participant::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Points credited to a user each time they are newly assigned as a match winner.
pub const WIN_POINTS: u32 = 10;

/// A pending credit produced by a winner assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsAward {
    pub user: UserId,
    pub points: u32,
}

impl PointsAward {
    pub fn win(user: UserId) -> Self {
        Self {
            user,
            points: WIN_POINTS,
        }
    }
}

/// One row of the leaderboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsEntry {
    pub user: UserId,
    pub points: u32,
}

/// Per-user point totals across all tournaments.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PointsLedger {
    totals: HashMap<UserId, u32>,
}

impl PointsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, award: PointsAward) {
        *self.totals.entry(award.user).or_insert(0) += award.points;
    }

    pub fn points(&self, user: UserId) -> u32 {
        self.totals.get(&user).copied().unwrap_or(0)
    }

    /// All users with points, highest first (ties broken by id for a stable order).
    pub fn leaderboard(&self) -> Vec<PointsEntry> {
        let mut rows: Vec<PointsEntry> = self
            .totals
            .iter()
            .map(|(&user, &points)| PointsEntry { user, points })
            .collect();
        rows.sort_by(|a, b| b.points.cmp(&a.points).then(a.user.cmp(&b.user)));
        rows
    }
}
