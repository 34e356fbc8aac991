//! Result processing: record scores, reschedule, and apply a settled match to stats,
//! league points and the knockout bracket.

use crate::error::{EngineError, EngineResult};
use crate::logic::knockout::{next_slot, seat_winner};
use crate::models::{
    Actor, GameMatch, MatchFormat, MatchId, MatchStatus, Participant, ParticipantId, ResultCode,
    StandingEntry, Tournament, TournamentFormat, TournamentId,
};
use crate::store::{Repository, Transaction};
use chrono::{DateTime, Duration, Utc};
use std::cmp::{Ordering, Reverse};

/// Record the scores and declared result of a match.
///
/// The side with the strictly higher score must be the declared winner and `Draw` needs equal
/// scores. In a score-limited match exactly one side reaches the limit and nobody exceeds it.
/// A recorded result may be corrected until its stats are applied.
pub fn record_result<S: Repository>(
    repo: &S,
    match_id: MatchId,
    score_a: u32,
    score_b: u32,
    result: ResultCode,
    actor: &Actor,
) -> EngineResult<GameMatch> {
    repo.transaction(|tx| {
        let mut game = tx.game(match_id)?;
        if !actor.can_manage(game.author_id) {
            return Err(EngineError::Forbidden);
        }
        if game.status == MatchStatus::StatsApplied {
            return Err(EngineError::AlreadyApplied(match_id));
        }
        if !game.is_seeded() {
            return Err(EngineError::MatchNotReady(match_id));
        }

        check_result_matches_score(score_a, score_b, result)?;
        if game.format == MatchFormat::ScoreLimited {
            check_score_limit(score_a, score_b, game.end_condition)?;
        }
        if result == ResultCode::Draw && is_knockout(tx, game.tournament_id)? {
            return Err(EngineError::DrawNotAllowed(match_id));
        }

        game.score_a = score_a;
        game.score_b = score_b;
        game.result = result;
        game.status = MatchStatus::ResultRecorded;
        tx.update_match(game.clone())?;
        log::debug!("Match {} recorded {}-{} ({})", match_id, score_a, score_b, result);
        Ok(game)
    })
}

/// Move a scheduled match to a new start time.
///
/// Time-limited matches end `end_condition` minutes after the new start, whatever `new_end`
/// says. Score-limited matches take both times as given.
pub fn reschedule_match<S: Repository>(
    repo: &S,
    match_id: MatchId,
    new_start: DateTime<Utc>,
    new_end: Option<DateTime<Utc>>,
    actor: &Actor,
) -> EngineResult<GameMatch> {
    repo.transaction(|tx| {
        let mut game = tx.game(match_id)?;
        if !actor.can_manage(game.author_id) {
            return Err(EngineError::Forbidden);
        }
        if game.status != MatchStatus::Scheduled {
            return Err(EngineError::InvalidReschedule(
                "match has already been played".to_string(),
            ));
        }
        if let Some(current) = game.start_time {
            if new_start < current {
                return Err(EngineError::InvalidReschedule(format!(
                    "new start {} is before the current start {}",
                    new_start, current
                )));
            }
        }

        let end = match game.format {
            MatchFormat::TimeLimited => {
                let length = Duration::minutes(i64::from(game.end_condition));
                let end = new_start.checked_add_signed(length).ok_or_else(|| {
                    EngineError::InvalidReschedule(format!(
                        "a {} minute match starting {} ends out of range",
                        game.end_condition, new_start
                    ))
                })?;
                Some(end)
            }
            MatchFormat::ScoreLimited => {
                if let Some(end) = new_end.filter(|end| *end < new_start) {
                    return Err(EngineError::InvalidReschedule(format!(
                        "end {} is before start {}",
                        end, new_start
                    )));
                }
                new_end
            }
        };

        game.start_time = Some(new_start);
        game.end_time = end;
        tx.update_match(game.clone())?;
        log::debug!("Match {} moved to {}", match_id, new_start);
        Ok(game)
    })
}

/// Apply a recorded result once: participant counters, then league points or bracket
/// advancement. Every write happens in one transaction.
pub fn apply_stats_after_match<S: Repository>(
    repo: &S,
    match_id: MatchId,
    actor: &Actor,
) -> EngineResult<()> {
    repo.transaction(|tx| {
        let mut game = tx.game(match_id)?;
        if !actor.can_manage(game.author_id) {
            return Err(EngineError::Forbidden);
        }
        match game.status {
            MatchStatus::Scheduled => return Err(EngineError::ResultNotRecorded(match_id)),
            MatchStatus::StatsApplied => return Err(EngineError::AlreadyApplied(match_id)),
            MatchStatus::ResultRecorded => {}
        }

        update_counters(tx, &game)?;

        if let Some(tournament_id) = game.tournament_id {
            let tournament = tx.tournament(tournament_id)?;
            match tournament.format {
                TournamentFormat::League => award_league_points(tx, &tournament, &game)?,
                TournamentFormat::Knockout => advance_winner(tx, tournament, &game)?,
            }
        }

        game.status = MatchStatus::StatsApplied;
        tx.update_match(game)?;
        log::debug!("Applied stats for match {}", match_id);
        Ok(())
    })
}

/// League table of a tournament, highest score first.
pub fn league_table<S: Repository>(
    repo: &S,
    tournament_id: TournamentId,
) -> EngineResult<Vec<StandingEntry>> {
    repo.read(|tx| {
        tx.tournament(tournament_id)?;
        let mut table = tx.standings(tournament_id);
        table.sort_by_key(|s| (Reverse(s.score), s.participant_id));
        Ok(table)
    })
}

/// Look up a single match.
pub fn get_match<S: Repository>(repo: &S, match_id: MatchId) -> EngineResult<GameMatch> {
    repo.read(|tx| tx.game(match_id))
}

/// Look up a participant with their aggregated counters.
pub fn get_participant<S: Repository>(
    repo: &S,
    participant_id: ParticipantId,
) -> EngineResult<Participant> {
    repo.read(|tx| tx.participant(participant_id))
}

pub fn check_result_matches_score(
    score_a: u32,
    score_b: u32,
    result: ResultCode,
) -> EngineResult<()> {
    let expected = match score_a.cmp(&score_b) {
        Ordering::Greater => ResultCode::PlayerA,
        Ordering::Less => ResultCode::PlayerB,
        Ordering::Equal => ResultCode::Draw,
    };
    if result == expected {
        Ok(())
    } else {
        Err(EngineError::InconsistentResult {
            score_a,
            score_b,
            result,
        })
    }
}

pub fn check_score_limit(score_a: u32, score_b: u32, limit: u32) -> EngineResult<()> {
    let exceeded = score_a > limit || score_b > limit;
    let reached = (score_a == limit) != (score_b == limit);
    if reached && !exceeded {
        Ok(())
    } else {
        Err(EngineError::ScoreLimitViolation(limit))
    }
}

fn is_knockout(tx: &dyn Transaction, tournament_id: Option<TournamentId>) -> EngineResult<bool> {
    match tournament_id {
        Some(id) => Ok(tx.tournament(id)?.format == TournamentFormat::Knockout),
        None => Ok(false),
    }
}

fn seeded_players(game: &GameMatch) -> EngineResult<(ParticipantId, ParticipantId)> {
    match (game.player_a, game.player_b) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(EngineError::MatchNotReady(game.id)),
    }
}

fn update_counters(tx: &mut dyn Transaction, game: &GameMatch) -> EngineResult<()> {
    let (a_id, b_id) = seeded_players(game)?;
    let mut a = tx.participant(a_id)?;
    let mut b = tx.participant(b_id)?;
    match game.result {
        ResultCode::PlayerA => {
            a.add_win()?;
            b.add_loss()?;
        }
        ResultCode::PlayerB => {
            a.add_loss()?;
            b.add_win()?;
        }
        ResultCode::Draw => {
            a.add_draw()?;
            b.add_draw()?;
        }
        ResultCode::Unset => return Err(EngineError::ResultNotRecorded(game.id)),
    }
    tx.update_participant(a)?;
    tx.update_participant(b)?;
    Ok(())
}

fn next_stage(stage: u32) -> EngineResult<u32> {
    stage
        .checked_add(1)
        .ok_or(EngineError::Overflow("standing stage"))
}

fn standing_of(
    tx: &dyn Transaction,
    tournament_id: TournamentId,
    participant_id: ParticipantId,
) -> StandingEntry {
    tx.standing(tournament_id, participant_id)
        .unwrap_or_else(|| StandingEntry::new(tournament_id, participant_id))
}

/// Win points to the winner, draw points to both on a draw. Both sides' stage counter moves on.
fn award_league_points(
    tx: &mut dyn Transaction,
    tournament: &Tournament,
    game: &GameMatch,
) -> EngineResult<()> {
    let (a, b) = seeded_players(game)?;
    let (points_a, points_b) = match game.result {
        ResultCode::PlayerA => (tournament.win_points, 0),
        ResultCode::PlayerB => (0, tournament.win_points),
        ResultCode::Draw => (tournament.draw_points, tournament.draw_points),
        ResultCode::Unset => return Err(EngineError::ResultNotRecorded(game.id)),
    };
    for (participant_id, points) in [(a, points_a), (b, points_b)] {
        let mut standing = standing_of(tx, tournament.id, participant_id);
        standing.score = standing
            .score
            .checked_add(points)
            .ok_or(EngineError::Overflow("league score"))?;
        standing.stage = next_stage(standing.stage)?;
        tx.upsert_standing(standing);
    }
    Ok(())
}

/// Move the winner into the next bracket match, or crown them if this was the final.
fn advance_winner(
    tx: &mut dyn Transaction,
    mut tournament: Tournament,
    game: &GameMatch,
) -> EngineResult<()> {
    let (winner, _loser) = game
        .winner_and_loser()
        .ok_or(EngineError::DrawNotAllowed(game.id))?;

    let mut standing = standing_of(tx, tournament.id, winner);
    standing.stage = next_stage(standing.stage)?;
    tx.upsert_standing(standing);

    let (stage, serial) = next_slot(game.stage, game.serial_number);
    match tx.bracket_match(tournament.id, stage, serial) {
        Some(mut next) => {
            seat_winner(&mut next, winner)?;
            tx.update_match(next)?;
        }
        None => {
            tournament.winner = Some(winner);
            log::info!("Tournament '{}' decided", tournament.name);
            tx.update_tournament(tournament)?;
        }
    }
    Ok(())
}
