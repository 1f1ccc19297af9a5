//! Round generation for every supported tournament format.
//!
//! All generation is synchronous and side-effect free: rounds are computed
//! from the caller-supplied roster and returned by value. Persistence of
//! the result belongs to the caller.

use super::{
    errors::{BracketError, BracketResult},
    grouping::{GroupingStrategy, Seeding},
    models::{Format, FreeForAllConfig, Match, Participant, Round},
};

/// Generate the ordered round sequence for a roster and format.
///
/// Uses the default free-for-all configuration (groups of 8) and the
/// deterministic input-order seeding, so identical inputs always produce
/// identical rounds.
///
/// `participant_count` must match `participants.len()`; a mismatch is a
/// caller contract violation and fails fast.
pub fn generate_rounds(
    participant_count: usize,
    participants: &[Participant],
    format: Format,
) -> BracketResult<Vec<Round>> {
    let config = FreeForAllConfig::default();
    let mut strategy = GroupingStrategy::default();
    generate_rounds_with(participant_count, participants, format, &config, &mut strategy)
}

/// Generate rounds with an explicit free-for-all configuration and seeding
/// strategy.
///
/// The strategy decides the seeding order used for free-for-all groups and
/// elimination pairings; round-robin always schedules over input order
/// since every pairing occurs exactly once regardless.
pub fn generate_rounds_with(
    participant_count: usize,
    participants: &[Participant],
    format: Format,
    config: &FreeForAllConfig,
    strategy: &mut GroupingStrategy,
) -> BracketResult<Vec<Round>> {
    config.validate()?;
    validate_roster(participant_count, participants)?;

    if participants.is_empty() {
        return Ok(Vec::new());
    }

    log::debug!(
        "generating {format} rounds for {} participants",
        participants.len()
    );

    let rounds = match format {
        Format::RoundRobin => round_robin_rounds(participants),
        Format::FreeForAll => free_for_all_rounds(participants, config, strategy),
        Format::Elimination => elimination_rounds(participants, strategy),
    };
    Ok(rounds)
}

fn validate_roster(participant_count: usize, participants: &[Participant]) -> BracketResult<()> {
    if participant_count != participants.len() {
        return Err(BracketError::ParticipantCountMismatch {
            declared: participant_count,
            actual: participants.len(),
        });
    }
    for (index, participant) in participants.iter().enumerate() {
        if participant.display_name.trim().is_empty() {
            return Err(BracketError::UnnamedParticipant { index });
        }
    }
    Ok(())
}

/// Circle-method round robin.
///
/// The first participant stays fixed while the rest rotate one position
/// per round; pairing head-to-head across the circle guarantees that no
/// pairing repeats and that every participant plays in every round. An
/// odd roster gets a bye sentinel appended, so one participant sits out
/// each round.
fn round_robin_rounds(participants: &[Participant]) -> Vec<Round> {
    let mut circle = participants.to_vec();
    if circle.len() % 2 == 1 {
        log::debug!("odd roster of {}, inserting bye", circle.len());
        circle.push(Participant::bye());
    }

    let n = circle.len();
    let total_rounds = n - 1;
    let half = n / 2;

    let mut rounds = Vec::with_capacity(total_rounds);
    for number in 1..=total_rounds {
        let matches = (0..half)
            .map(|i| Match::duel(circle[i].clone(), circle[n - 1 - i].clone()))
            .collect();
        rounds.push(Round::new(format!("Ronda {number}"), matches));
        circle[1..].rotate_right(1);
    }
    rounds
}

/// Free-for-all phases.
///
/// Phase 1 slices the seeded roster into contiguous groups of
/// `group_capacity`. Each later phase holds one pending group per
/// `group_capacity` winners of the previous phase (one winner advances per
/// group), collapsing to a single match labelled "Final".
fn free_for_all_rounds(
    participants: &[Participant],
    config: &FreeForAllConfig,
    strategy: &mut GroupingStrategy,
) -> Vec<Round> {
    let capacity = config.group_capacity;
    let seeded = strategy.seed(participants);

    let first_phase: Vec<Match> = seeded
        .chunks(capacity)
        .map(|group| Match::group(group.to_vec(), capacity))
        .collect();

    if first_phase.len() == 1 {
        return vec![Round::new("Final", first_phase)];
    }

    let mut advancing = first_phase.len();
    let mut rounds = vec![Round::new("Fase 1", first_phase)];
    let mut phase = 2;
    loop {
        let groups = advancing.div_ceil(capacity);
        if groups == 1 {
            rounds.push(Round::new("Final", vec![Match::pending_group(capacity)]));
            break;
        }
        let matches = (0..groups).map(|_| Match::pending_group(capacity)).collect();
        rounds.push(Round::new(format!("Fase {phase}"), matches));
        advancing = groups;
        phase += 1;
    }
    rounds
}

/// Single elimination.
///
/// The seeded roster is padded with byes up to the next power of two and
/// paired head-to-head across the seeding (top seed against the last
/// slot), which places every bye against a top seed and never pairs two
/// byes. Later rounds hold pending duels decided by earlier results.
fn elimination_rounds(participants: &[Participant], strategy: &mut GroupingStrategy) -> Vec<Round> {
    let seeded = strategy.seed(participants);
    let slots = seeded.len().next_power_of_two().max(2);

    let mut entries = seeded;
    entries.resize_with(slots, Participant::bye);

    let total_rounds = slots.trailing_zeros() as usize;
    let mut rounds = Vec::with_capacity(total_rounds);
    for number in 1..=total_rounds {
        let matches: Vec<Match> = if number == 1 {
            (0..slots / 2)
                .map(|i| Match::duel(entries[i].clone(), entries[slots - 1 - i].clone()))
                .collect()
        } else {
            (0..(slots >> number)).map(|_| Match::pending_duel()).collect()
        };
        rounds.push(Round::new(elimination_label(number, total_rounds), matches));
    }
    rounds
}

fn elimination_label(number: usize, total_rounds: usize) -> String {
    if number == total_rounds {
        "Final".to_string()
    } else if number == total_rounds - 1 {
        "Semifinal".to_string()
    } else {
        format!("Ronda {number}")
    }
}
