//! Tournament, TournamentFormat, TournamentStatus and TournamentError.

use crate::models::game::{GameMatch, MatchId, MatchStatus};
use crate::models::participant::{Participant, Registration, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 participants to generate a bracket from.
    InsufficientPlayers { found: usize },
    /// No match at the given index or with the given id.
    MatchNotFound,
    /// User is not registered in this tournament.
    ParticipantNotFound(UserId),
    /// User is already registered in this tournament.
    DuplicateParticipant(UserId),
    /// Participant name is empty.
    InvalidParticipant,
    /// Registration would exceed `max_participants`.
    TournamentFull { max: usize },
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Requested tournament status change is not allowed from the current status.
    InvalidTransition {
        from: TournamentStatus,
        to: TournamentStatus,
    },
    /// Match status can only move forward.
    InvalidMatchTransition { from: MatchStatus, to: MatchStatus },
    /// A match cannot be finished without a winner.
    WinnerRequired,
    /// Winner supplied for a match that is not finished.
    WinnerOnUnfinishedMatch,
    /// Winner is not one of the match's sides.
    InvalidWinner(UserId),
    /// Winner has the lower score (only under `ResultPolicy::ScoreConsistent`).
    InconsistentWinner(UserId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientPlayers { .. } => {
                write!(f, "At least 2 checked-in players are required")
            }
            TournamentError::MatchNotFound => write!(f, "Match not found"),
            TournamentError::ParticipantNotFound(_) => write!(f, "Participant not found"),
            TournamentError::DuplicateParticipant(_) => {
                write!(f, "This user is already registered for the tournament")
            }
            TournamentError::InvalidParticipant => write!(f, "Participant name must not be empty"),
            TournamentError::TournamentFull { max } => {
                write!(f, "Tournament is full ({} participants)", max)
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::InvalidTransition { from, to } => {
                write!(f, "Cannot change status from {} to {}", from, to)
            }
            TournamentError::InvalidMatchTransition { from, to } => {
                write!(f, "Cannot change match status from {} to {}", from, to)
            }
            TournamentError::WinnerRequired => write!(f, "A winner is required to finish a match"),
            TournamentError::WinnerOnUnfinishedMatch => {
                write!(f, "A winner can only be set on a finished match")
            }
            TournamentError::InvalidWinner(_) => write!(f, "Winner must be one of the match players"),
            TournamentError::InconsistentWinner(_) => {
                write!(f, "Winner must not have the lower score")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Bracket format declared by the organizer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentFormat {
    /// Single elimination; only round 1 is generated.
    #[default]
    Knockout,
    /// Everyone plays everyone once.
    RoundRobin,
}

impl TournamentFormat {
    /// Parse the stored format label. Unknown or missing labels fall back to `Knockout`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_uppercase()) {
            Some(l) if l == "ROUND_ROBIN" => TournamentFormat::RoundRobin,
            _ => TournamentFormat::Knockout,
        }
    }
}

/// How strictly a declared winner is checked against the scores.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultPolicy {
    /// Any side of the match may be declared winner.
    #[default]
    Permissive,
    /// The declared winner must not have a strictly lower score.
    ScoreConsistent,
}

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    /// Accepting registrations and check-ins; no matches yet.
    #[default]
    RegistrationOpen,
    /// Bracket generated; matches being played.
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentStatus::RegistrationOpen => write!(f, "REGISTRATION_OPEN"),
            TournamentStatus::InProgress => write!(f, "IN_PROGRESS"),
            TournamentStatus::Completed => write!(f, "COMPLETED"),
            TournamentStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Addresses a match either by position (client compatibility) or by stable id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchRef {
    Index(usize),
    Id(MatchId),
}

/// Full tournament state: settings, registrations, matches, and status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub sport: Option<String>,
    pub format: TournamentFormat,
    pub status: TournamentStatus,
    pub result_policy: ResultPolicy,
    /// None means unlimited.
    pub max_participants: Option<usize>,
    /// Registrations in sign-up order.
    pub registrations: Vec<Registration>,
    /// Generated once when the tournament starts; only field-level updates afterward.
    pub matches: Vec<GameMatch>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Create a new tournament open for registration.
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sport: None,
            format,
            status: TournamentStatus::RegistrationOpen,
            result_policy: ResultPolicy::default(),
            max_participants: None,
            registrations: Vec::new(),
            matches: Vec::new(),
            created_at: Utc::now(),
            started_at: None,
        }
    }

    fn require_registration_open(&self) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::RegistrationOpen {
            return Err(TournamentError::InvalidState);
        }
        Ok(())
    }

    fn registration_mut(&mut self, user: UserId) -> Result<&mut Registration, TournamentError> {
        self.registrations
            .iter_mut()
            .find(|r| r.participant.user == user)
            .ok_or(TournamentError::ParticipantNotFound(user))
    }

    /// Look up a registration by user id.
    pub fn registration(&self, user: UserId) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.participant.user == user)
    }

    /// Register a participant (RegistrationOpen only). One registration per user.
    pub fn register(&mut self, mut participant: Participant) -> Result<(), TournamentError> {
        self.require_registration_open()?;
        let name = participant.name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidParticipant);
        }
        participant.name = name.to_string();
        participant.team_name = participant
            .team_name
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        if self.registration(participant.user).is_some() {
            return Err(TournamentError::DuplicateParticipant(participant.user));
        }
        if let Some(max) = self.max_participants {
            if self.registrations.len() >= max {
                return Err(TournamentError::TournamentFull { max });
            }
        }
        self.registrations.push(Registration::new(participant));
        Ok(())
    }

    /// Remove a registration (RegistrationOpen only).
    pub fn withdraw(&mut self, user: UserId) -> Result<(), TournamentError> {
        self.require_registration_open()?;
        let idx = self
            .registrations
            .iter()
            .position(|r| r.participant.user == user)
            .ok_or(TournamentError::ParticipantNotFound(user))?;
        self.registrations.remove(idx);
        Ok(())
    }

    /// Mark a registered participant as present.
    pub fn check_in(&mut self, user: UserId) -> Result<(), TournamentError> {
        self.set_checked_in(user, true)
    }

    pub fn undo_check_in(&mut self, user: UserId) -> Result<(), TournamentError> {
        self.set_checked_in(user, false)
    }

    fn set_checked_in(&mut self, user: UserId, checked_in: bool) -> Result<(), TournamentError> {
        self.require_registration_open()?;
        self.registration_mut(user)?.checked_in = checked_in;
        Ok(())
    }

    /// Checked-in participants in registration order: the bracket roster.
    pub fn checked_in_roster(&self) -> Vec<Participant> {
        self.registrations
            .iter()
            .filter(|r| r.checked_in)
            .map(|r| r.participant.clone())
            .collect()
    }

    /// Resolve a match reference to a position in `matches`.
    pub fn match_index(&self, target: MatchRef) -> Result<usize, TournamentError> {
        match target {
            MatchRef::Index(i) if i < self.matches.len() => Ok(i),
            MatchRef::Index(_) => Err(TournamentError::MatchNotFound),
            MatchRef::Id(id) => self
                .matches
                .iter()
                .position(|m| m.id == id)
                .ok_or(TournamentError::MatchNotFound),
        }
    }

    pub fn get_match(&self, target: MatchRef) -> Result<&GameMatch, TournamentError> {
        let idx = self.match_index(target)?;
        Ok(&self.matches[idx])
    }

    pub fn get_match_mut(&mut self, target: MatchRef) -> Result<&mut GameMatch, TournamentError> {
        let idx = self.match_index(target)?;
        Ok(&mut self.matches[idx])
    }

    /// True once every match has been finished (byes included).
    pub fn all_matches_finished(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(|m| m.status == MatchStatus::Finished)
    }
}
