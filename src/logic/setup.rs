//! Tournament status transitions; starting a tournament generates its bracket.

use crate::logic::bracket::generate_matches;
use crate::models::{Tournament, TournamentError, TournamentStatus};
use chrono::Utc;
use rand::Rng;

/// Move the tournament to `next`.
///
/// - RegistrationOpen -> InProgress: generates the bracket from the checked-in roster,
///   but only while `matches` is empty, so a bracket is never generated twice.
///   With fewer than 2 checked-in players the tournament is left unchanged.
/// - InProgress -> Completed.
/// - RegistrationOpen | InProgress -> Cancelled.
pub fn update_status<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    next: TournamentStatus,
    rng: &mut R,
) -> Result<(), TournamentError> {
    use TournamentStatus::*;
    match (tournament.status, next) {
        (RegistrationOpen, InProgress) => start_tournament(tournament, rng),
        (InProgress, Completed) | (RegistrationOpen, Cancelled) | (InProgress, Cancelled) => {
            log::info!("Tournament {}: {} -> {}", tournament.id, tournament.status, next);
            tournament.status = next;
            Ok(())
        }
        (from, to) => Err(TournamentError::InvalidTransition { from, to }),
    }
}

/// Start the tournament: RegistrationOpen -> InProgress, generating round 1.
pub fn start_tournament<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::RegistrationOpen {
        return Err(TournamentError::InvalidState);
    }
    if tournament.matches.is_empty() {
        let roster = tournament.checked_in_roster();
        tournament.matches = generate_matches(&roster, tournament.format, rng)?;
    }
    tournament.status = TournamentStatus::InProgress;
    tournament.started_at = Some(Utc::now());
    log::info!(
        "Tournament {} started with {} match(es)",
        tournament.id,
        tournament.matches.len()
    );
    Ok(())
}
