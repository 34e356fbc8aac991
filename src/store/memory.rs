//! In-memory repository: all tables behind one RwLock, transactions staged on a copy.

use crate::error::{EngineError, EngineResult, EntityKind};
use crate::models::{
    GameMatch, MatchId, Participant, ParticipantId, StandingEntry, Tournament, TournamentId,
};
use crate::store::{Repository, Transaction};
use std::collections::HashMap;
use std::sync::RwLock;

type BracketKey = (TournamentId, u32, u32);

#[derive(Clone, Debug, Default)]
struct Tables {
    tournaments: HashMap<TournamentId, Tournament>,
    participants: HashMap<ParticipantId, Participant>,
    matches: HashMap<MatchId, GameMatch>,
    /// (tournament, stage, serial) -> match, for winner propagation.
    bracket: HashMap<BracketKey, MatchId>,
    standings: HashMap<(TournamentId, ParticipantId), StandingEntry>,
}

impl Transaction for Tables {
    fn tournament(&self, id: TournamentId) -> EngineResult<Tournament> {
        self.tournaments
            .get(&id)
            .cloned()
            .ok_or(EngineError::NotFound(EntityKind::Tournament, id))
    }

    fn participant(&self, id: ParticipantId) -> EngineResult<Participant> {
        self.participants
            .get(&id)
            .cloned()
            .ok_or(EngineError::NotFound(EntityKind::Participant, id))
    }

    fn game(&self, id: MatchId) -> EngineResult<GameMatch> {
        self.matches
            .get(&id)
            .cloned()
            .ok_or(EngineError::NotFound(EntityKind::Match, id))
    }

    fn tournament_matches(&self, id: TournamentId) -> Vec<GameMatch> {
        let mut matches: Vec<_> = self
            .matches
            .values()
            .filter(|m| m.tournament_id == Some(id))
            .cloned()
            .collect();
        matches.sort_by_key(|m| (m.stage, m.serial_number));
        matches
    }

    fn bracket_match(&self, id: TournamentId, stage: u32, serial_number: u32) -> Option<GameMatch> {
        self.bracket
            .get(&(id, stage, serial_number))
            .and_then(|match_id| self.matches.get(match_id))
            .cloned()
    }

    fn standing(
        &self,
        tournament_id: TournamentId,
        participant_id: ParticipantId,
    ) -> Option<StandingEntry> {
        self.standings.get(&(tournament_id, participant_id)).cloned()
    }

    fn standings(&self, tournament_id: TournamentId) -> Vec<StandingEntry> {
        self.standings
            .values()
            .filter(|s| s.tournament_id == tournament_id)
            .cloned()
            .collect()
    }

    fn insert_tournament(&mut self, tournament: Tournament) {
        self.tournaments.insert(tournament.id, tournament);
    }

    fn update_tournament(&mut self, tournament: Tournament) -> EngineResult<()> {
        let row = self
            .tournaments
            .get_mut(&tournament.id)
            .ok_or(EngineError::NotFound(EntityKind::Tournament, tournament.id))?;
        *row = tournament;
        Ok(())
    }

    fn insert_participant(&mut self, participant: Participant) {
        self.participants.insert(participant.id, participant);
    }

    fn update_participant(&mut self, participant: Participant) -> EngineResult<()> {
        let row = self
            .participants
            .get_mut(&participant.id)
            .ok_or(EngineError::NotFound(EntityKind::Participant, participant.id))?;
        *row = participant;
        Ok(())
    }

    fn insert_matches(&mut self, matches: Vec<GameMatch>) {
        for m in matches {
            if let Some(tournament_id) = m.tournament_id {
                self.bracket
                    .insert((tournament_id, m.stage, m.serial_number), m.id);
            }
            self.matches.insert(m.id, m);
        }
    }

    fn update_match(&mut self, game: GameMatch) -> EngineResult<()> {
        let row = self
            .matches
            .get_mut(&game.id)
            .ok_or(EngineError::NotFound(EntityKind::Match, game.id))?;
        *row = game;
        Ok(())
    }

    fn upsert_standing(&mut self, entry: StandingEntry) {
        self.standings
            .insert((entry.tournament_id, entry.participant_id), entry);
    }
}

/// Process-local repository. A transaction holds the write lock for its whole duration, so
/// concurrent transactions are serialised.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for MemoryRepository {
    fn transaction<T, F>(&self, f: F) -> EngineResult<T>
    where
        F: FnOnce(&mut dyn Transaction) -> EngineResult<T>,
    {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| EngineError::Storage("lock error".to_string()))?;
        let mut staged = tables.clone();
        match f(&mut staged) {
            Ok(value) => {
                *tables = staged;
                Ok(value)
            }
            Err(e) => {
                log::warn!("Transaction rolled back: {}", e);
                Err(e)
            }
        }
    }

    fn read<T, F>(&self, f: F) -> EngineResult<T>
    where
        F: FnOnce(&dyn Transaction) -> EngineResult<T>,
    {
        let tables = self
            .tables
            .read()
            .map_err(|_| EngineError::Storage("lock error".to_string()))?;
        f(&*tables)
    }
}
