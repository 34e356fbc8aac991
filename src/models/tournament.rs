//! Tournament settings and roster.

use crate::config::{DEFAULT_DRAW_POINTS, DEFAULT_WIN_POINTS};
use crate::models::actor::UserId;
use crate::models::game::MatchFormat;
use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// How the schedule is built and how results progress.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Single elimination; winners advance through a bracket.
    #[default]
    Knockout,
    /// Round robin; points accumulate in a table.
    League,
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentFormat::Knockout => write!(f, "knockout"),
            TournamentFormat::League => write!(f, "league"),
        }
    }
}

/// A tournament row: settings plus the ids of enrolled participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    pub match_format: MatchFormat,
    /// Minutes (time-limited) or target points (score-limited), copied onto every match.
    pub end_condition: u32,
    /// League only.
    pub win_points: u32,
    /// League only.
    pub draw_points: u32,
    pub prize: u32,
    pub author_id: UserId,
    /// Enrolled participants, in enrollment order.
    pub participants: Vec<ParticipantId>,
    /// Set when the knockout final has been settled.
    pub winner: Option<ParticipantId>,
}

impl Tournament {
    /// Create a tournament with no participants and default league points.
    pub fn new(
        name: impl Into<String>,
        format: TournamentFormat,
        match_format: MatchFormat,
        end_condition: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            match_format,
            end_condition,
            win_points: DEFAULT_WIN_POINTS,
            draw_points: DEFAULT_DRAW_POINTS,
            prize: 0,
            author_id: Uuid::nil(),
            participants: Vec::new(),
            winner: None,
        }
    }

    pub fn with_points(mut self, win_points: u32, draw_points: u32) -> Self {
        self.win_points = win_points;
        self.draw_points = draw_points;
        self
    }

    pub fn with_prize(mut self, prize: u32) -> Self {
        self.prize = prize;
        self
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}
