//! Tournament business logic: validation, schedule generation, results and standings.

mod knockout;
mod league;
mod results;
mod roster;
mod schedule;
mod setup;
mod validation;

pub use knockout::{generate_knockout_matches, next_slot, stage_count};
pub use league::{circle_schedule, generate_league_matches};
pub use results::{
    apply_stats_after_match, check_result_matches_score, check_score_limit, get_match,
    get_participant, league_table, record_result, reschedule_match,
};
pub use roster::parse_roster;
pub use schedule::generate_matches;
pub use setup::{
    create_standalone_match, create_tournament, enroll_participant, import_roster,
    register_participant,
};
pub use validation::{
    check_participant_count, validate_participant_count, KNOCKOUT_SIZES, MIN_LEAGUE_PARTICIPANTS,
};
