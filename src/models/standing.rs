//! Per-tournament standing of a participant.

use crate::models::participant::ParticipantId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};

/// League points and progress marker for one participant in one tournament.
///
/// In a league `score` accumulates points and `stage` counts matches settled. In a knockout
/// `stage` is the number of rounds the participant has won.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub tournament_id: TournamentId,
    pub participant_id: ParticipantId,
    pub score: u32,
    pub stage: u32,
}

impl StandingEntry {
    pub fn new(tournament_id: TournamentId, participant_id: ParticipantId) -> Self {
        Self {
            tournament_id,
            participant_id,
            score: 0,
            stage: 0,
        }
    }
}
