//! Match lifecycle: score, status and winner updates on a generated match.

use crate::models::{
    GameMatch, MatchRef, MatchStatus, PointsAward, ResultPolicy, Side, Tournament, TournamentError,
    TournamentStatus, UserId,
};
use serde::{Deserialize, Serialize};

/// Field-level changes to one match. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchUpdate {
    #[serde(default)]
    pub score1: Option<u32>,
    #[serde(default)]
    pub score2: Option<u32>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub winner: Option<UserId>,
}

/// Apply `update` to the match addressed by `target`.
///
/// Scores are written first, then the status, then the winner. Returns a
/// `PointsAward` when the winner changes to a new user; the caller credits it once.
pub fn update_match(
    tournament: &mut Tournament,
    target: MatchRef,
    update: &MatchUpdate,
) -> Result<Option<PointsAward>, TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let policy = tournament.result_policy;
    let m = tournament.get_match_mut(target)?;

    // Validate everything on a copy so a rejected update leaves the match untouched.
    let mut next = m.clone();
    if let Some(s) = update.score1 {
        next.score1 = s;
    }
    if let Some(s) = update.score2 {
        next.score2 = s;
    }
    if let Some(status) = update.status {
        check_transition(next.status, status)?;
        next.status = status;
    }
    // A winner only exists on finished matches.
    if update.winner.is_some() && next.status != MatchStatus::Finished {
        return Err(TournamentError::WinnerOnUnfinishedMatch);
    }
    if next.status == MatchStatus::Finished && update.winner.or(next.winner).is_none() {
        return Err(TournamentError::WinnerRequired);
    }

    let award = match update.winner {
        Some(winner) if next.winner != Some(winner) => {
            next.winner = Some(winner);
            Some(PointsAward::win(winner))
        }
        _ => None,
    };
    // Re-checked on every update so score-only edits cannot leave a lower-scored winner.
    if let Some(winner) = next.winner {
        check_winner(&next, winner, policy)?;
    }

    *m = next;
    if let Some(a) = award {
        log::info!("Match {} won by {} (+{} points)", m.id, a.user, a.points);
    }
    Ok(award)
}

/// Add one point to a side's score. Scores saturate at `u32::MAX`.
pub fn increment_score(
    tournament: &mut Tournament,
    target: MatchRef,
    side: Side,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let policy = tournament.result_policy;
    let m = tournament.get_match_mut(target)?;
    let mut next = m.clone();
    match side {
        Side::One => next.score1 = next.score1.saturating_add(1),
        Side::Two => next.score2 = next.score2.saturating_add(1),
    }
    if let Some(winner) = next.winner {
        check_winner(&next, winner, policy)?;
    }
    *m = next;
    Ok(())
}

/// Status only moves forward; staying in the same status is a no-op.
fn check_transition(from: MatchStatus, to: MatchStatus) -> Result<(), TournamentError> {
    if to < from {
        return Err(TournamentError::InvalidMatchTransition { from, to });
    }
    Ok(())
}

fn check_winner(m: &GameMatch, winner: UserId, policy: ResultPolicy) -> Result<(), TournamentError> {
    let side = m.side_of(winner).ok_or(TournamentError::InvalidWinner(winner))?;
    if policy == ResultPolicy::ScoreConsistent {
        let other = match side {
            Side::One => Side::Two,
            Side::Two => Side::One,
        };
        if m.score(side) < m.score(other) {
            return Err(TournamentError::InconsistentWinner(winner));
        }
    }
    Ok(())
}
