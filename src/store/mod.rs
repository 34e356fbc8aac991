//! Persistence seam. The engine reads and writes rows only through these traits.

mod memory;

pub use memory::MemoryRepository;

use crate::error::EngineResult;
use crate::models::{
    GameMatch, MatchId, Participant, ParticipantId, StandingEntry, Tournament, TournamentId,
};

/// Row-level reads and writes inside one unit of work.
pub trait Transaction {
    fn tournament(&self, id: TournamentId) -> EngineResult<Tournament>;
    fn participant(&self, id: ParticipantId) -> EngineResult<Participant>;
    fn game(&self, id: MatchId) -> EngineResult<GameMatch>;
    /// All matches of a tournament ordered by (stage, serial number).
    fn tournament_matches(&self, id: TournamentId) -> Vec<GameMatch>;
    /// The match at a given bracket position, if any.
    fn bracket_match(&self, id: TournamentId, stage: u32, serial_number: u32) -> Option<GameMatch>;
    fn standing(&self, tournament_id: TournamentId, participant_id: ParticipantId)
        -> Option<StandingEntry>;
    fn standings(&self, tournament_id: TournamentId) -> Vec<StandingEntry>;

    fn insert_tournament(&mut self, tournament: Tournament);
    fn update_tournament(&mut self, tournament: Tournament) -> EngineResult<()>;
    fn insert_participant(&mut self, participant: Participant);
    fn update_participant(&mut self, participant: Participant) -> EngineResult<()>;
    /// Bulk insert of freshly generated matches.
    fn insert_matches(&mut self, matches: Vec<GameMatch>);
    fn update_match(&mut self, game: GameMatch) -> EngineResult<()>;
    fn upsert_standing(&mut self, entry: StandingEntry);

    fn has_matches(&self, id: TournamentId) -> bool {
        !self.tournament_matches(id).is_empty()
    }
}

/// Source of transactions. Writes made inside `transaction` are committed only when the
/// closure returns `Ok`; on `Err` none of them are visible afterwards.
pub trait Repository {
    fn transaction<T, F>(&self, f: F) -> EngineResult<T>
    where
        F: FnOnce(&mut dyn Transaction) -> EngineResult<T>;

    /// Read-only access; no writes are possible.
    fn read<T, F>(&self, f: F) -> EngineResult<T>
    where
        F: FnOnce(&dyn Transaction) -> EngineResult<T>;
}
