//! Force Sports tournament brackets: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    generate_matches, generate_matches_with_thread_rng, increment_score, knockout_round_count,
    read_roster_csv, round_name, start_tournament, update_match, update_status, MatchUpdate,
    RosterError, MIN_PLAYERS,
};
pub use models::{
    GameMatch, MatchId, MatchRef, MatchSide, MatchStatus, Participant, PointsAward, PointsEntry,
    PointsLedger, Registration, ResultPolicy, Side, Tournament, TournamentError, TournamentFormat,
    TournamentId, TournamentStatus, UserId, BYE_NAME, WIN_POINTS,
};
