//! Data structures for the tournament engine: participants, matches, standings, tournaments.

mod actor;
mod game;
mod participant;
mod standing;
mod tournament;

pub use actor::{Actor, Role, UserId};
pub use game::{GameMatch, MatchFormat, MatchId, MatchStatus, ResultCode};
pub use participant::{Participant, ParticipantId, ParticipantStats};
pub use standing::StandingEntry;
pub use tournament::{Tournament, TournamentFormat, TournamentId};
