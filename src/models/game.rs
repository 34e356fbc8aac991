//! Match (game), its outcome, format and lifecycle status.

use crate::models::actor::UserId;
use crate::models::participant::ParticipantId;
use crate::models::tournament::{Tournament, TournamentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// How a match ends: after a number of minutes, or when one side reaches a target score.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    #[default]
    TimeLimited,
    ScoreLimited,
}

/// Declared outcome of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    PlayerA,
    PlayerB,
    Draw,
    #[default]
    Unset,
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultCode::PlayerA => write!(f, "player A"),
            ResultCode::PlayerB => write!(f, "player B"),
            ResultCode::Draw => write!(f, "draw"),
            ResultCode::Unset => write!(f, "unset"),
        }
    }
}

/// Lifecycle of a match: `Scheduled -> ResultRecorded -> StatsApplied`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    ResultRecorded,
    StatsApplied,
}

/// A single match between two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// None for stand-alone matches.
    pub tournament_id: Option<TournamentId>,
    pub author_id: UserId,
    /// Round index, 0-based.
    pub stage: u32,
    /// Position within the stage.
    pub serial_number: u32,
    /// None means "to be decided" (later knockout rounds).
    pub player_a: Option<ParticipantId>,
    pub player_b: Option<ParticipantId>,
    pub score_a: u32,
    pub score_b: u32,
    pub result: ResultCode,
    pub format: MatchFormat,
    /// Minutes for time-limited matches, target points for score-limited ones.
    pub end_condition: u32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: MatchStatus,
}

impl GameMatch {
    /// A slot in a tournament's schedule. Players may be None (TBD).
    pub fn in_tournament(
        tournament: &Tournament,
        stage: u32,
        serial_number: u32,
        player_a: Option<ParticipantId>,
        player_b: Option<ParticipantId>,
    ) -> Self {
        Self {
            tournament_id: Some(tournament.id),
            stage,
            serial_number,
            player_a,
            player_b,
            ..Self::standalone(
                tournament.author_id,
                None,
                None,
                tournament.match_format,
                tournament.end_condition,
            )
        }
    }

    /// A match outside any tournament.
    pub fn standalone(
        author_id: UserId,
        player_a: Option<ParticipantId>,
        player_b: Option<ParticipantId>,
        format: MatchFormat,
        end_condition: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id: None,
            author_id,
            stage: 0,
            serial_number: 0,
            player_a,
            player_b,
            score_a: 0,
            score_b: 0,
            result: ResultCode::Unset,
            format,
            end_condition,
            start_time: None,
            end_time: None,
            status: MatchStatus::Scheduled,
        }
    }

    /// Both player slots filled.
    pub fn is_seeded(&self) -> bool {
        self.player_a.is_some() && self.player_b.is_some()
    }

    /// Winner and loser ids for a decisive result; None for draws, unset results or TBD slots.
    pub fn winner_and_loser(&self) -> Option<(ParticipantId, ParticipantId)> {
        let (a, b) = (self.player_a?, self.player_b?);
        match self.result {
            ResultCode::PlayerA => Some((a, b)),
            ResultCode::PlayerB => Some((b, a)),
            ResultCode::Draw | ResultCode::Unset => None,
        }
    }
}
