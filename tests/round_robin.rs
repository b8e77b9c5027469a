//! Integration tests for round-robin generation.

use force_sports::{generate_matches, MatchStatus, Participant, TournamentFormat};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(n: usize) -> Vec<Participant> {
    (0..n).map(|i| Participant::new(format!("P{i}"))).collect()
}

#[test]
fn every_pair_plays_once() {
    let mut rng = StdRng::seed_from_u64(0);
    for n in 2..=10 {
        let players = roster(n);
        let matches = generate_matches(&players, TournamentFormat::RoundRobin, &mut rng).unwrap();
        assert_eq!(matches.len(), n * (n - 1) / 2, "n = {n}");

        let mut pairs = HashSet::new();
        for m in &matches {
            let a = m.player1.user.unwrap();
            let b = m.player2.user.unwrap();
            assert_ne!(a, b);
            let key = if a < b { (a, b) } else { (b, a) };
            assert!(pairs.insert(key), "pair repeated for n = {n}");
            assert_eq!(m.status, MatchStatus::Upcoming);
        }
    }
}

#[test]
fn pairs_follow_roster_order() {
    let players = roster(4);
    let mut rng = StdRng::seed_from_u64(0);
    let matches = generate_matches(&players, TournamentFormat::RoundRobin, &mut rng).unwrap();
    let order: Vec<_> = matches
        .iter()
        .map(|m| (m.player1.user.unwrap(), m.player2.user.unwrap()))
        .collect();
    let u = |i: usize| players[i].user;
    assert_eq!(
        order,
        vec![(u(0), u(1)), (u(0), u(2)), (u(0), u(3)), (u(1), u(2)), (u(1), u(3)), (u(2), u(3))]
    );
}

#[test]
fn rounds_group_floor_half_matches_each() {
    let mut rng = StdRng::seed_from_u64(0);

    // n = 4: 6 matches, 2 per round -> rounds 1,1,2,2,3,3
    let four = generate_matches(&roster(4), TournamentFormat::RoundRobin, &mut rng).unwrap();
    let rounds: Vec<_> = four.iter().map(|m| m.round).collect();
    assert_eq!(rounds, vec![1, 1, 2, 2, 3, 3]);

    // n = 5: 10 matches, 2 per round -> 5 rounds
    let five = generate_matches(&roster(5), TournamentFormat::RoundRobin, &mut rng).unwrap();
    let rounds: Vec<_> = five.iter().map(|m| m.round).collect();
    assert_eq!(rounds, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);

    // n = 3: 3 matches, 1 per round
    let three = generate_matches(&roster(3), TournamentFormat::RoundRobin, &mut rng).unwrap();
    let rounds: Vec<_> = three.iter().map(|m| m.round).collect();
    assert_eq!(rounds, vec![1, 2, 3]);

    // n = 2: single match
    let two = generate_matches(&roster(2), TournamentFormat::RoundRobin, &mut rng).unwrap();
    assert_eq!(two.len(), 1);
    assert_eq!(two[0].round, 1);
}

#[test]
fn round_names_are_plain_round_numbers() {
    let mut rng = StdRng::seed_from_u64(0);
    let matches = generate_matches(&roster(6), TournamentFormat::RoundRobin, &mut rng).unwrap();
    for m in &matches {
        assert_eq!(m.round_name, format!("Round {}", m.round));
    }
}

#[test]
fn team_names_are_used() {
    let players = vec![
        Participant::new("Ann").team("Falcons"),
        Participant::new("Ben").team("Hawks"),
        Participant::new("Cat"),
    ];
    let mut rng = StdRng::seed_from_u64(0);
    let matches = generate_matches(&players, TournamentFormat::RoundRobin, &mut rng).unwrap();
    assert_eq!(matches[0].player1.name, "Falcons");
    assert_eq!(matches[0].player2.name, "Hawks");
    assert_eq!(matches[1].player2.name, "Cat");
}
