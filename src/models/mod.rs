//! Data structures for sports tournaments: participants, matches, points, tournament state.

mod game;
mod participant;
mod points;
mod tournament;

pub use game::{GameMatch, MatchId, MatchSide, MatchStatus, Side, BYE_NAME};
pub use participant::{Participant, Registration, UserId};
pub use points::{PointsAward, PointsEntry, PointsLedger, WIN_POINTS};
pub use tournament::{
    MatchRef, ResultPolicy, Tournament, TournamentError, TournamentFormat, TournamentId,
    TournamentStatus,
};
