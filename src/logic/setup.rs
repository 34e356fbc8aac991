//! Setup phase: open tournaments, register and enroll participants, stand-alone matches.

use crate::error::{EngineError, EngineResult};
use crate::logic::roster::parse_roster;
use crate::models::{
    Actor, GameMatch, MatchFormat, Participant, ParticipantId, Tournament, TournamentId,
};
use crate::store::{Repository, Transaction};
use std::io::Read;

/// Store a new tournament authored by `actor` (directors and administrators only).
/// A pre-filled roster goes through the same checks as [`enroll_participant`]: every id must
/// exist and appear once, and names stay unique.
pub fn create_tournament<S: Repository>(
    repo: &S,
    mut tournament: Tournament,
    actor: &Actor,
) -> EngineResult<Tournament> {
    if !actor.can_organize() {
        return Err(EngineError::Forbidden);
    }
    tournament.author_id = actor.id;
    tournament.winner = None;
    repo.transaction(|tx| {
        for id in std::mem::take(&mut tournament.participants) {
            let existing = tx.participant(id)?;
            enroll(tx, &mut tournament, existing)?;
        }
        tx.insert_tournament(tournament.clone());
        log::info!("Created {} tournament '{}'", tournament.format, tournament.name);
        Ok(tournament)
    })
}

/// Register a participant who is not (yet) part of any tournament.
pub fn register_participant<S: Repository>(
    repo: &S,
    participant: Participant,
) -> EngineResult<Participant> {
    let participant = normalized(participant)?;
    repo.transaction(|tx| {
        tx.insert_participant(participant.clone());
        Ok(participant)
    })
}

/// Add a participant to the tournament roster (author or administrator, before matches exist).
///
/// An already registered participant (same id) is reused; otherwise the participant is created.
/// Names are unique within a roster, case-insensitive.
pub fn enroll_participant<S: Repository>(
    repo: &S,
    tournament_id: TournamentId,
    participant: Participant,
    actor: &Actor,
) -> EngineResult<Participant> {
    repo.transaction(|tx| {
        let mut tournament = open_roster(tx, tournament_id, actor)?;
        let enrolled = enroll(tx, &mut tournament, participant)?;
        tx.update_tournament(tournament)?;
        Ok(enrolled)
    })
}

/// Enroll every row of a CSV roster. Either all rows are enrolled or none.
pub fn import_roster<S: Repository, R: Read>(
    repo: &S,
    tournament_id: TournamentId,
    reader: R,
    actor: &Actor,
) -> EngineResult<Vec<Participant>> {
    let rows = parse_roster(reader)?;
    repo.transaction(|tx| {
        let mut tournament = open_roster(tx, tournament_id, actor)?;
        let enrolled = rows
            .into_iter()
            .map(|p| enroll(tx, &mut tournament, p))
            .collect::<EngineResult<Vec<_>>>()?;
        tx.update_tournament(tournament)?;
        Ok(enrolled)
    })
}

/// Create a match outside any tournament between two registered participants.
pub fn create_standalone_match<S: Repository>(
    repo: &S,
    player_a: ParticipantId,
    player_b: ParticipantId,
    format: MatchFormat,
    end_condition: u32,
    actor: &Actor,
) -> EngineResult<GameMatch> {
    if !actor.can_organize() {
        return Err(EngineError::Forbidden);
    }
    if player_a == player_b {
        return Err(EngineError::SameParticipant);
    }
    repo.transaction(|tx| {
        tx.participant(player_a)?;
        tx.participant(player_b)?;
        let game =
            GameMatch::standalone(actor.id, Some(player_a), Some(player_b), format, end_condition);
        tx.insert_matches(vec![game.clone()]);
        Ok(game)
    })
}

/// Load a tournament whose roster `actor` may still change.
fn open_roster(
    tx: &dyn Transaction,
    tournament_id: TournamentId,
    actor: &Actor,
) -> EngineResult<Tournament> {
    let tournament = tx.tournament(tournament_id)?;
    if !actor.can_manage(tournament.author_id) {
        return Err(EngineError::Forbidden);
    }
    if tx.has_matches(tournament_id) {
        return Err(EngineError::AlreadyHasMatches(tournament_id));
    }
    Ok(tournament)
}

fn enroll(
    tx: &mut dyn Transaction,
    tournament: &mut Tournament,
    participant: Participant,
) -> EngineResult<Participant> {
    let (participant, is_new) = match tx.participant(participant.id) {
        Ok(existing) => (existing, false),
        Err(EngineError::NotFound(..)) => (normalized(participant)?, true),
        Err(e) => return Err(e),
    };

    for &id in &tournament.participants {
        let other = tx.participant(id)?;
        if id == participant.id || other.name.eq_ignore_ascii_case(&participant.name) {
            return Err(EngineError::DuplicateParticipant(participant.name));
        }
    }

    if is_new {
        tx.insert_participant(participant.clone());
    }
    tournament.participants.push(participant.id);
    log::info!(
        "Enrolled '{}' in '{}' ({} participants)",
        participant.name,
        tournament.name,
        tournament.participant_count()
    );
    Ok(participant)
}

fn normalized(mut participant: Participant) -> EngineResult<Participant> {
    let name = participant.name.trim();
    if name.is_empty() {
        return Err(EngineError::Roster("participant name is empty".to_string()));
    }
    participant.name = name.to_string();
    Ok(participant)
}
