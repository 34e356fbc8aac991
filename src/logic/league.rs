//! League stage: round-robin schedule by the circle method.

use crate::error::EngineResult;
use crate::logic::validation::check_participant_count;
use crate::models::{GameMatch, Tournament, TournamentFormat};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate every league match, fully seeded. Order of the roster is shuffled with `rng`.
///
/// Even rosters play N - 1 stages of N / 2 matches. Odd rosters play N stages of (N - 1) / 2
/// matches and each participant rests in exactly one of them.
pub fn generate_league_matches<R: Rng + ?Sized>(
    tournament: &Tournament,
    rng: &mut R,
) -> EngineResult<Vec<GameMatch>> {
    check_participant_count(TournamentFormat::League, tournament.participant_count())?;

    let mut ids = tournament.participants.clone();
    ids.shuffle(rng);

    let matches = circle_schedule(&ids)
        .into_iter()
        .enumerate()
        .flat_map(|(stage, pairs)| {
            pairs.into_iter().enumerate().map(move |(serial, (a, b))| {
                GameMatch::in_tournament(tournament, stage as u32, serial as u32, Some(a), Some(b))
            })
        })
        .collect();
    Ok(matches)
}

/// Round-robin pairings, one list per stage. Every unordered pair appears exactly once.
///
/// Stage pairs `ring[i]` with `ring[len - 1 - i]`; then the last element stays fixed and the rest
/// rotate by one. An odd roster gets an empty rest slot as the fixed element.
pub fn circle_schedule<T: Copy>(ids: &[T]) -> Vec<Vec<(T, T)>> {
    let mut ring: Vec<Option<T>> = ids.iter().copied().map(Some).collect();
    if ring.len() % 2 == 1 {
        ring.push(None);
    }
    let len = ring.len();
    if len < 2 {
        return Vec::new();
    }

    let mut stages = Vec::with_capacity(len - 1);
    for _ in 0..len - 1 {
        let pairs = (0..len / 2)
            .filter_map(|i| match (ring[i], ring[len - 1 - i]) {
                (Some(a), Some(b)) => Some((a, b)),
                _ => None,
            })
            .collect();
        stages.push(pairs);
        ring[..len - 1].rotate_right(1);
    }
    stages
}
