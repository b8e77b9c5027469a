//! Integration tests for registration, check-in and starting a tournament.

use force_sports::{
    update_status, MatchRef, Participant, Tournament, TournamentError, TournamentFormat,
    TournamentStatus,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tournament_with_players(n: usize, format: TournamentFormat) -> (Tournament, Vec<Participant>) {
    let mut t = Tournament::new("Spring Open", format);
    let players: Vec<Participant> = (0..n).map(|i| Participant::new(format!("P{i}"))).collect();
    for p in &players {
        t.register(p.clone()).unwrap();
    }
    (t, players)
}

#[test]
fn register_rejects_duplicates_and_blank_names() {
    let (mut t, players) = tournament_with_players(2, TournamentFormat::Knockout);
    let user = players[0].user;
    assert_eq!(
        t.register(Participant::with_user(user, "Again")),
        Err(TournamentError::DuplicateParticipant(user))
    );
    assert_eq!(
        t.register(Participant::new("   ")),
        Err(TournamentError::InvalidParticipant)
    );
    assert_eq!(t.registrations.len(), 2);
}

#[test]
fn register_respects_capacity() {
    let (mut t, _) = tournament_with_players(0, TournamentFormat::Knockout);
    t.max_participants = Some(1);
    t.register(Participant::new("First")).unwrap();
    assert_eq!(
        t.register(Participant::new("Second")),
        Err(TournamentError::TournamentFull { max: 1 })
    );
}

#[test]
fn blank_team_name_is_dropped() {
    let (mut t, _) = tournament_with_players(0, TournamentFormat::Knockout);
    let p = Participant::new(" Dana ").team("  ");
    let user = p.user;
    t.register(p).unwrap();
    let reg = t.registration(user).unwrap();
    assert_eq!(reg.participant.name, "Dana");
    assert_eq!(reg.participant.team_name, None);
}

#[test]
fn only_checked_in_players_enter_the_bracket() {
    let (mut t, players) = tournament_with_players(5, TournamentFormat::Knockout);
    for p in &players[..4] {
        t.check_in(p.user).unwrap();
    }
    t.undo_check_in(players[3].user).unwrap();

    update_status(&mut t, TournamentStatus::InProgress, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(t.status, TournamentStatus::InProgress);
    assert!(t.started_at.is_some());
    // 3 checked in -> 1 pair + 1 bye
    assert_eq!(t.matches.len(), 2);
    for m in &t.matches {
        assert!(!m.involves(players[3].user));
        assert!(!m.involves(players[4].user));
    }
}

#[test]
fn start_with_too_few_check_ins_leaves_tournament_unchanged() {
    let (mut t, players) = tournament_with_players(3, TournamentFormat::RoundRobin);
    t.check_in(players[0].user).unwrap();

    let err = update_status(&mut t, TournamentStatus::InProgress, &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert_eq!(err, TournamentError::InsufficientPlayers { found: 1 });
    assert_eq!(err.to_string(), "At least 2 checked-in players are required");
    assert_eq!(t.status, TournamentStatus::RegistrationOpen);
    assert!(t.matches.is_empty());
    assert!(t.started_at.is_none());
}

#[test]
fn round_robin_start_generates_all_pairs() {
    let (mut t, players) = tournament_with_players(4, TournamentFormat::RoundRobin);
    for p in &players {
        t.check_in(p.user).unwrap();
    }
    update_status(&mut t, TournamentStatus::InProgress, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(t.matches.len(), 6);
}

#[test]
fn bracket_is_generated_only_once() {
    let (mut t, players) = tournament_with_players(4, TournamentFormat::Knockout);
    for p in &players {
        t.check_in(p.user).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(4);
    update_status(&mut t, TournamentStatus::InProgress, &mut rng).unwrap();
    let first: Vec<_> = t.matches.iter().map(|m| m.id).collect();

    assert_eq!(
        update_status(&mut t, TournamentStatus::InProgress, &mut rng),
        Err(TournamentError::InvalidTransition {
            from: TournamentStatus::InProgress,
            to: TournamentStatus::InProgress,
        })
    );
    let second: Vec<_> = t.matches.iter().map(|m| m.id).collect();
    assert_eq!(first, second);
}

#[test]
fn registration_closes_once_started() {
    let (mut t, players) = tournament_with_players(2, TournamentFormat::Knockout);
    for p in &players {
        t.check_in(p.user).unwrap();
    }
    update_status(&mut t, TournamentStatus::InProgress, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(t.register(Participant::new("Late")), Err(TournamentError::InvalidState));
    assert_eq!(t.withdraw(players[0].user), Err(TournamentError::InvalidState));
    assert_eq!(t.check_in(players[0].user), Err(TournamentError::InvalidState));
}

#[test]
fn withdraw_and_unknown_participant() {
    let (mut t, players) = tournament_with_players(2, TournamentFormat::Knockout);
    t.withdraw(players[0].user).unwrap();
    assert_eq!(t.registrations.len(), 1);
    assert_eq!(
        t.withdraw(players[0].user),
        Err(TournamentError::ParticipantNotFound(players[0].user))
    );
    assert_eq!(
        t.check_in(players[0].user),
        Err(TournamentError::ParticipantNotFound(players[0].user))
    );
}

#[test]
fn complete_and_cancel_transitions() {
    let (mut t, players) = tournament_with_players(2, TournamentFormat::Knockout);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        update_status(&mut t, TournamentStatus::Completed, &mut rng),
        Err(TournamentError::InvalidTransition { .. })
    ));
    for p in &players {
        t.check_in(p.user).unwrap();
    }
    update_status(&mut t, TournamentStatus::InProgress, &mut rng).unwrap();
    update_status(&mut t, TournamentStatus::Completed, &mut rng).unwrap();
    assert_eq!(t.status, TournamentStatus::Completed);
    assert!(update_status(&mut t, TournamentStatus::Cancelled, &mut rng).is_err());

    let (mut other, _) = tournament_with_players(1, TournamentFormat::Knockout);
    update_status(&mut other, TournamentStatus::Cancelled, &mut rng).unwrap();
    assert_eq!(other.status, TournamentStatus::Cancelled);
}

#[test]
fn bye_is_prefinished_but_bracket_is_not() {
    let (mut t, players) = tournament_with_players(3, TournamentFormat::Knockout);
    for p in &players {
        t.check_in(p.user).unwrap();
    }
    update_status(&mut t, TournamentStatus::InProgress, &mut StdRng::seed_from_u64(8)).unwrap();
    let bye_idx = t.matches.iter().position(|m| m.is_bye()).unwrap();
    assert!(t.get_match(MatchRef::Index(bye_idx)).unwrap().winner.is_some());
    assert!(!t.all_matches_finished());
}
