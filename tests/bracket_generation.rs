//! Integration tests for bracket generation.
//!
//! These tests verify the complete round-generation contract across all
//! supported formats, including bye handling, round labels, and the
//! fail-fast validation policies.

use bracket_engine::{
    Bracket, BracketError, Format, Match, Participant, generate_rounds,
};
use std::collections::BTreeSet;

fn roster(n: usize) -> Vec<Participant> {
    (1..=n)
        .map(|i| Participant::new(format!("player{i}")))
        .collect()
}

fn round_names(matches: &[Match]) -> Vec<String> {
    matches
        .iter()
        .flat_map(|m| m.participants().into_iter().map(|p| p.display_name.clone()))
        .collect()
}

#[test]
fn test_round_robin_round_counts_even() {
    // (participants, expected rounds, expected matches per round)
    let test_cases = vec![(2, 1, 1), (4, 3, 2), (6, 5, 3), (8, 7, 4), (16, 15, 8)];

    for (n, expected_rounds, expected_matches) in test_cases {
        let participants = roster(n);
        let rounds = generate_rounds(n, &participants, Format::RoundRobin).unwrap();

        assert_eq!(
            rounds.len(),
            expected_rounds,
            "{n} participants should play {expected_rounds} rounds"
        );
        for round in &rounds {
            assert_eq!(
                round.matches.len(),
                expected_matches,
                "{n} participants should have {expected_matches} matches per round"
            );
        }
    }
}

#[test]
fn test_round_robin_every_participant_every_round() {
    for n in [2, 4, 6, 10, 12] {
        let participants = roster(n);
        let rounds = generate_rounds(n, &participants, Format::RoundRobin).unwrap();

        for (i, round) in rounds.iter().enumerate() {
            let names = round_names(&round.matches);
            let distinct: BTreeSet<&String> = names.iter().collect();
            assert_eq!(
                distinct.len(),
                n,
                "round {} of {n} participants should field everyone exactly once",
                i + 1
            );
        }
    }
}

#[test]
fn test_round_robin_odd_roster_bye_rotation() {
    for n in [3, 5, 7] {
        let participants = roster(n);
        let rounds = generate_rounds(n, &participants, Format::RoundRobin).unwrap();

        // Odd N plays N rounds (effective roster is N+1 after the bye).
        assert_eq!(rounds.len(), n);

        for round in &rounds {
            let bye_duels = round.matches.iter().filter(|m| m.involves_bye()).count();
            assert_eq!(bye_duels, 1, "each round sits out exactly one participant");
        }
    }
}

#[test]
fn test_round_robin_all_pairings_exactly_once() {
    for n in [4, 5, 8, 9] {
        let participants = roster(n);
        let rounds = generate_rounds(n, &participants, Format::RoundRobin).unwrap();

        let mut pairings = BTreeSet::new();
        for round in &rounds {
            for m in &round.matches {
                let mut names: Vec<String> = m
                    .participants()
                    .into_iter()
                    .filter(|p| !p.is_bye())
                    .map(|p| p.display_name.clone())
                    .collect();
                if names.len() < 2 {
                    continue; // bye duel
                }
                names.sort();
                assert!(
                    pairings.insert((names[0].clone(), names[1].clone())),
                    "pairing {names:?} repeated in {n}-roster tournament"
                );
            }
        }
        assert_eq!(pairings.len(), n * (n - 1) / 2);
    }
}

#[test]
fn test_free_for_all_sixteen_in_groups_of_eight() {
    let participants = roster(16);
    let rounds = generate_rounds(16, &participants, Format::FreeForAll).unwrap();

    assert_eq!(rounds[0].label, "Fase 1");
    assert_eq!(rounds[0].matches.len(), 2);
    for m in &rounds[0].matches {
        assert_eq!(m.participants().len(), 8);
    }

    let last = rounds.last().unwrap();
    assert_eq!(last.label, "Final");
    assert_eq!(last.matches.len(), 1);
}

#[test]
fn test_free_for_all_phase_shapes() {
    // (participants, expected (label, matches) per round)
    let test_cases: Vec<(usize, Vec<(&str, usize)>)> = vec![
        (8, vec![("Final", 1)]),
        (9, vec![("Fase 1", 2), ("Final", 1)]),
        (64, vec![("Fase 1", 8), ("Final", 1)]),
        (65, vec![("Fase 1", 9), ("Fase 2", 2), ("Final", 1)]),
    ];

    for (n, expected) in test_cases {
        let participants = roster(n);
        let rounds = generate_rounds(n, &participants, Format::FreeForAll).unwrap();
        let shape: Vec<(&str, usize)> = rounds
            .iter()
            .map(|r| (r.label.as_str(), r.matches.len()))
            .collect();
        assert_eq!(shape, expected, "{n} participants");
    }
}

#[test]
fn test_free_for_all_first_phase_is_contiguous_input_order() {
    let participants = roster(16);
    let rounds = generate_rounds(16, &participants, Format::FreeForAll).unwrap();

    let first_group = round_names(&rounds[0].matches[..1]);
    let expected: Vec<String> = (1..=8).map(|i| format!("player{i}")).collect();
    assert_eq!(first_group, expected);
}

#[test]
fn test_single_participant_each_format() {
    let participants = roster(1);

    // Round-robin degenerates to one round against the bye.
    let rounds = generate_rounds(1, &participants, Format::RoundRobin).unwrap();
    assert_eq!(rounds.len(), 1);
    assert!(rounds[0].matches[0].involves_bye());

    // Free-for-all degenerates to a one-player final.
    let rounds = generate_rounds(1, &participants, Format::FreeForAll).unwrap();
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].label, "Final");
    assert_eq!(rounds[0].matches[0].participants().len(), 1);

    // Elimination degenerates to a final against the bye.
    let rounds = generate_rounds(1, &participants, Format::Elimination).unwrap();
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].label, "Final");
    assert!(rounds[0].matches[0].involves_bye());
}

#[test]
fn test_zero_participants_each_format() {
    for format in [Format::RoundRobin, Format::FreeForAll, Format::Elimination] {
        let rounds = generate_rounds(0, &[], format).unwrap();
        assert!(rounds.is_empty(), "{format} with no roster should be empty");
    }
}

#[test]
fn test_unknown_format_fails_fast() {
    for bad in ["swiss", "double-elimination", "", "ROUND-ROBIN"] {
        let err = bad.parse::<Format>().unwrap_err();
        assert_eq!(err, BracketError::InvalidFormat(bad.to_string()));
    }
}

#[test]
fn test_wire_format_strings() {
    assert_eq!("round-robin".parse::<Format>().unwrap(), Format::RoundRobin);
    assert_eq!("free-for-all".parse::<Format>().unwrap(), Format::FreeForAll);
    assert_eq!("elimination".parse::<Format>().unwrap(), Format::Elimination);
}

#[test]
fn test_count_mismatch_is_a_contract_violation() {
    let participants = roster(6);
    let err = Bracket::generate(8, &participants, Format::RoundRobin).unwrap_err();
    assert_eq!(
        err,
        BracketError::ParticipantCountMismatch {
            declared: 8,
            actual: 6,
        }
    );
}

#[test]
fn test_bracket_wrapper_records_format() {
    let participants = roster(4);
    let bracket = Bracket::generate(4, &participants, Format::RoundRobin).unwrap();
    assert_eq!(bracket.format, Format::RoundRobin);
    assert_eq!(bracket.round_count(), 3);
    assert!(!bracket.is_empty());
}

#[test]
fn test_generation_is_idempotent() {
    let participants = roster(9);
    for format in [Format::RoundRobin, Format::FreeForAll, Format::Elimination] {
        let first = generate_rounds(9, &participants, format).unwrap();
        let second = generate_rounds(9, &participants, format).unwrap();
        assert_eq!(first, second, "{format} generation should be idempotent");
    }
}

#[test]
fn test_bracket_serde_round_trip() {
    // Callers persist generated brackets as JSON; the structure must
    // survive the trip unchanged.
    let participants = roster(5);
    let bracket = Bracket::generate(5, &participants, Format::FreeForAll).unwrap();

    let json = serde_json::to_string(&bracket).unwrap();
    let restored: Bracket = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bracket);
}

#[test]
fn test_bye_matches_are_filterable_for_standings() {
    let participants = roster(5);
    let rounds = generate_rounds(5, &participants, Format::RoundRobin).unwrap();

    for round in &rounds {
        let scored: Vec<&Match> = round
            .matches
            .iter()
            .filter(|m| !m.involves_bye())
            .collect();
        // Effective roster of 6 gives 3 duels per round, one of them a bye.
        assert_eq!(scored.len(), 2);
    }
}
