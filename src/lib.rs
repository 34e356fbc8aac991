//! Tournament engine: knockout brackets, round-robin leagues, result processing and standings.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod store;

pub use error::{EngineError, EngineResult, EntityKind};
pub use logic::{
    apply_stats_after_match, check_participant_count, circle_schedule, create_standalone_match,
    create_tournament, enroll_participant, generate_knockout_matches, generate_league_matches,
    generate_matches, get_match, get_participant, import_roster, league_table, parse_roster, record_result,
    register_participant, reschedule_match, validate_participant_count,
};
pub use models::{
    Actor, GameMatch, MatchFormat, MatchId, MatchStatus, Participant, ParticipantId,
    ParticipantStats, ResultCode, Role, StandingEntry, Tournament, TournamentFormat, TournamentId,
    UserId,
};
pub use store::{MemoryRepository, Repository, Transaction};
