//! Single-elimination bracket: seeded first round plus empty later rounds.

use crate::error::{EngineError, EngineResult};
use crate::logic::validation::check_participant_count;
use crate::models::{GameMatch, ParticipantId, Tournament, TournamentFormat};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate the full bracket (N - 1 matches). Seeds randomly from `rng`.
///
/// 1. Shuffle the roster and split it into two halves.
/// 2. Stage 0 pairs the i-th participant of each half.
/// 3. Every later stage has half as many matches, both slots TBD.
pub fn generate_knockout_matches<R: Rng + ?Sized>(
    tournament: &Tournament,
    rng: &mut R,
) -> EngineResult<Vec<GameMatch>> {
    let n = tournament.participant_count();
    check_participant_count(TournamentFormat::Knockout, n)?;

    let mut ids = tournament.participants.clone();
    ids.shuffle(rng);
    let (group_a, group_b) = ids.split_at(n / 2);

    let mut matches: Vec<GameMatch> = group_a
        .iter()
        .zip(group_b)
        .enumerate()
        .map(|(serial, (&a, &b))| {
            GameMatch::in_tournament(tournament, 0, serial as u32, Some(a), Some(b))
        })
        .collect();

    let mut per_stage = n / 2;
    for stage in 1..stage_count(n) {
        per_stage /= 2;
        matches.extend(
            (0..per_stage as u32)
                .map(|serial| GameMatch::in_tournament(tournament, stage, serial, None, None)),
        );
    }
    Ok(matches)
}

/// Rounds in a bracket of `participants` (a power of two).
pub fn stage_count(participants: usize) -> u32 {
    participants.trailing_zeros()
}

/// Bracket position the winner of (stage, serial) moves to.
pub fn next_slot(stage: u32, serial_number: u32) -> (u32, u32) {
    (stage + 1, serial_number / 2)
}

/// Put `winner` into the first free slot of `next`: player A, then player B.
pub(crate) fn seat_winner(next: &mut GameMatch, winner: ParticipantId) -> EngineResult<()> {
    if next.player_a.is_none() {
        next.player_a = Some(winner);
    } else if next.player_b.is_none() {
        next.player_b = Some(winner);
    } else {
        return Err(EngineError::BracketSlotTaken {
            stage: next.stage,
            serial: next.serial_number,
        });
    }
    Ok(())
}
