//! Round labels ("Final", "Semi Final", ...) derived at generation time.

use crate::models::TournamentFormat;

/// Number of knockout rounds needed for `total_players`: ceil(log2(n)), 0 for n <= 1.
pub fn knockout_round_count(total_players: usize) -> u32 {
    if total_players <= 1 {
        return 0;
    }
    total_players.next_power_of_two().trailing_zeros()
}

/// Label for `round` (1-based) given the format and the roster size at generation time.
///
/// Round-robin rounds are always "Round N". Knockout rounds are named by how many
/// rounds remain including this one; beyond the round of 32 they fall back to "Round N".
pub fn round_name(format: TournamentFormat, total_players: usize, round: u32) -> String {
    if format == TournamentFormat::RoundRobin {
        return format!("Round {}", round);
    }
    let remaining = i64::from(knockout_round_count(total_players)) - i64::from(round) + 1;
    match remaining {
        1 => "Final".to_string(),
        2 => "Semi Final".to_string(),
        3 => "Quarter Final".to_string(),
        4 => "Round of 16".to_string(),
        5 => "Round of 32".to_string(),
        _ => format!("Round {}", round),
    }
}
