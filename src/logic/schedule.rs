//! Generate a tournament's schedule exactly once.

use crate::error::{EngineError, EngineResult};
use crate::logic::knockout::generate_knockout_matches;
use crate::logic::league::generate_league_matches;
use crate::models::{Actor, GameMatch, StandingEntry, TournamentFormat, TournamentId};
use crate::store::Repository;
use rand::Rng;

/// Build and store every match of the tournament, and a zeroed standing per participant.
///
/// The "already has matches" check and the insert run in one transaction, so two concurrent
/// calls cannot both succeed.
pub fn generate_matches<S, R>(
    repo: &S,
    tournament_id: TournamentId,
    actor: &Actor,
    rng: &mut R,
) -> EngineResult<Vec<GameMatch>>
where
    S: Repository,
    R: Rng + ?Sized,
{
    repo.transaction(|tx| {
        let tournament = tx.tournament(tournament_id)?;
        if !actor.can_manage(tournament.author_id) {
            return Err(EngineError::Forbidden);
        }
        if tx.has_matches(tournament_id) {
            return Err(EngineError::AlreadyHasMatches(tournament_id));
        }

        let matches = match tournament.format {
            TournamentFormat::Knockout => generate_knockout_matches(&tournament, rng)?,
            TournamentFormat::League => generate_league_matches(&tournament, rng)?,
        };

        for &participant_id in &tournament.participants {
            tx.upsert_standing(StandingEntry::new(tournament.id, participant_id));
        }
        tx.insert_matches(matches.clone());

        log::info!(
            "Generated {} {} matches for tournament '{}' ({} participants)",
            matches.len(),
            tournament.format,
            tournament.name,
            tournament.participant_count()
        );
        Ok(matches)
    })
}
