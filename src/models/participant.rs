//! Participant and ParticipantStats data structures.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in matches and lookups).
pub type ParticipantId = Uuid;

/// Statistics view of a participant (for API / display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// A registered participant. Counters are aggregated across every match they play.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub country: Option<String>,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Participant {
    /// Create a new participant with the given name. Counters start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            country: None,
            matches_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Current counters as a separate struct (served by GET /api/participants/{id}).
    pub fn stats(&self) -> ParticipantStats {
        ParticipantStats {
            matches_played: self.matches_played,
            wins: self.wins,
            losses: self.losses,
            draws: self.draws,
        }
    }

    pub fn add_win(&mut self) -> EngineResult<()> {
        self.wins = self.played_one(self.wins, "wins")?;
        Ok(())
    }

    pub fn add_loss(&mut self) -> EngineResult<()> {
        self.losses = self.played_one(self.losses, "losses")?;
        Ok(())
    }

    pub fn add_draw(&mut self) -> EngineResult<()> {
        self.draws = self.played_one(self.draws, "draws")?;
        Ok(())
    }

    /// Count one more match; returns `counter + 1`. Nothing changes on overflow.
    fn played_one(&mut self, counter: u32, what: &'static str) -> EngineResult<u32> {
        let next = counter.checked_add(1).ok_or(EngineError::Overflow(what))?;
        self.matches_played = self
            .matches_played
            .checked_add(1)
            .ok_or(EngineError::Overflow("matches played"))?;
        Ok(next)
    }
}
