//! Errors returned by every engine operation.

use crate::models::{MatchId, ResultCode, TournamentFormat, TournamentId};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Which kind of row a lookup failed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Tournament,
    Participant,
    Match,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Tournament => write!(f, "Tournament"),
            EntityKind::Participant => write!(f, "Participant"),
            EntityKind::Match => write!(f, "Match"),
        }
    }
}

/// Errors that can occur during tournament operations. None of them is fatal.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EngineError {
    #[error("{1} tournament cannot be played with {0} participant(s)")]
    InvalidNumberOfPlayers(usize, TournamentFormat),

    #[error("Tournament {0} already has matches")]
    AlreadyHasMatches(TournamentId),

    #[error("Result {result} does not match the score {score_a}-{score_b}")]
    InconsistentResult {
        score_a: u32,
        score_b: u32,
        result: ResultCode,
    },

    #[error("Exactly one side must reach the score limit of {0}")]
    ScoreLimitViolation(u32),

    #[error("Invalid reschedule: {0}")]
    InvalidReschedule(String),

    #[error("{0} '{1}' not found")]
    NotFound(EntityKind, Uuid),

    #[error("Only the author or an administrator may do this")]
    Forbidden,

    #[error("Statistics for match {0} have already been applied")]
    AlreadyApplied(MatchId),

    #[error("Match {0} has no recorded result")]
    ResultNotRecorded(MatchId),

    #[error("Match {0} is still waiting for its participants")]
    MatchNotReady(MatchId),

    #[error("Knockout match {0} cannot end in a draw")]
    DrawNotAllowed(MatchId),

    #[error("Both slots of bracket match (stage {stage}, serial {serial}) are already filled")]
    BracketSlotTaken { stage: u32, serial: u32 },

    #[error("A participant named '{0}' is already enrolled")]
    DuplicateParticipant(String),

    #[error("A participant cannot play against themselves")]
    SameParticipant,

    #[error("{0} is out of range")]
    Overflow(&'static str),

    #[error("Invalid roster: {0}")]
    Roster(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::Roster(e.to_string())
    }
}
