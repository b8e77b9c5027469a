//! Tournament business logic: bracket generation, round names, match updates, lifecycle.

mod bracket;
mod match_updates;
mod roster;
mod round_names;
mod setup;

pub use bracket::{generate_matches, generate_matches_with_thread_rng, MIN_PLAYERS};
pub use match_updates::{increment_score, update_match, MatchUpdate};
pub use roster::{read_roster_csv, RosterError};
pub use round_names::{knockout_round_count, round_name};
pub use setup::{start_tournament, update_status};
