//! Participant and Registration data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user (owner reference of a participant).
pub type UserId = Uuid;

/// A player entered into a tournament roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user: UserId,
    pub name: String,
    /// Team identity for team/doubles tournaments; shown instead of `name` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl Participant {
    /// Create a participant with a fresh user id and no team.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_user(Uuid::new_v4(), name)
    }

    pub fn with_user(user: UserId, name: impl Into<String>) -> Self {
        Self {
            user,
            name: name.into(),
            team_name: None,
        }
    }

    /// Builder-style team assignment.
    pub fn team(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    /// Name shown in matches: team name takes priority over the individual name.
    pub fn display_name(&self) -> &str {
        match self.team_name.as_deref() {
            Some(team) if !team.trim().is_empty() => team,
            _ => &self.name,
        }
    }
}

/// A participant's entry in a tournament, with check-in state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub participant: Participant,
    pub checked_in: bool,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            checked_in: false,
            registered_at: Utc::now(),
        }
    }
}
