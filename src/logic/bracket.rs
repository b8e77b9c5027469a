//! Bracket generation: turn a roster into the initial match list for a format.

use crate::logic::round_names::round_name;
use crate::models::{GameMatch, MatchSide, Participant, TournamentError, TournamentFormat};
use rand::seq::SliceRandom;
use rand::Rng;

/// Minimum roster size for any format.
pub const MIN_PLAYERS: usize = 2;

/// Generate the initial matches for `roster` in the given `format`.
///
/// Fails with `InsufficientPlayers` for fewer than 2 participants; otherwise returns
/// the complete list, round-major. Duplicate participants are not checked here.
/// The shuffle uses `rng`, so a seeded rng gives a reproducible knockout draw.
pub fn generate_matches<R: Rng + ?Sized>(
    roster: &[Participant],
    format: TournamentFormat,
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    if roster.len() < MIN_PLAYERS {
        return Err(TournamentError::InsufficientPlayers { found: roster.len() });
    }
    let matches = match format {
        TournamentFormat::Knockout => knockout_matches(roster, rng),
        TournamentFormat::RoundRobin => round_robin_matches(roster),
    };
    log::debug!(
        "Generated {} {:?} match(es) for {} participant(s)",
        matches.len(),
        format,
        roster.len()
    );
    Ok(matches)
}

/// `generate_matches` with the thread-local rng.
pub fn generate_matches_with_thread_rng(
    roster: &[Participant],
    format: TournamentFormat,
) -> Result<Vec<GameMatch>, TournamentError> {
    generate_matches(roster, format, &mut rand::thread_rng())
}

/// Round 1 of a single-elimination bracket.
///
/// 1. Shuffle a copy of the roster.
/// 2. Pair consecutive entries: (0, 1), (2, 3), ...
/// 3. With an odd count the last entry gets a finished 1-0 bye.
fn knockout_matches<R: Rng + ?Sized>(roster: &[Participant], rng: &mut R) -> Vec<GameMatch> {
    const ROUND: u32 = 1;
    let name = round_name(TournamentFormat::Knockout, roster.len(), ROUND);

    let mut shuffled: Vec<&Participant> = roster.iter().collect();
    shuffled.shuffle(rng);

    let pairs = shuffled.chunks_exact(2);
    let unpaired = pairs.remainder().first().copied();

    let mut matches: Vec<GameMatch> = pairs
        .map(|pair| GameMatch::new(pair[0].into(), pair[1].into(), ROUND, name.clone()))
        .collect();

    if let Some(p) = unpaired {
        log::debug!("Bye awarded to {}", p.display_name());
        matches.push(GameMatch::bye(p, ROUND, name));
    }
    matches
}

/// Every pair (i < j) once, in index order. Rounds group every floor(n/2) matches
/// in sequence; this does not prevent a participant playing twice in one round.
fn round_robin_matches(roster: &[Participant]) -> Vec<GameMatch> {
    let n = roster.len();
    let per_round = (n / 2).max(1);
    let mut matches = Vec::with_capacity(n * (n - 1) / 2);

    for (i, a) in roster.iter().enumerate() {
        for b in &roster[i + 1..] {
            let seq = matches.len() + 1;
            let round = seq.div_ceil(per_round) as u32;
            matches.push(GameMatch::new(
                MatchSide::from(a),
                MatchSide::from(b),
                round,
                round_name(TournamentFormat::RoundRobin, n, round),
            ));
        }
    }
    matches
}
