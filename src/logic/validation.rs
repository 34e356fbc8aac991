//! Participant-count rules per tournament format.

use crate::error::{EngineError, EngineResult};
use crate::models::{Tournament, TournamentFormat};

/// Legal knockout bracket sizes: powers of two from 4 to 1024. No byes.
pub const KNOCKOUT_SIZES: [usize; 9] = [4, 8, 16, 32, 64, 128, 256, 512, 1024];

/// Smallest league. Odd rosters are allowed; one participant rests each stage.
pub const MIN_LEAGUE_PARTICIPANTS: usize = 3;

/// Check that the tournament's roster size is legal for its format.
pub fn validate_participant_count(tournament: &Tournament) -> EngineResult<()> {
    check_participant_count(tournament.format, tournament.participant_count())
}

pub fn check_participant_count(format: TournamentFormat, count: usize) -> EngineResult<()> {
    let legal = match format {
        TournamentFormat::Knockout => KNOCKOUT_SIZES.contains(&count),
        TournamentFormat::League => count >= MIN_LEAGUE_PARTICIPANTS,
    };
    if legal {
        Ok(())
    } else {
        Err(EngineError::InvalidNumberOfPlayers(count, format))
    }
}
