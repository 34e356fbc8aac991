//! Single binary web server exposing the tournament engine as a JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; override with env HOST and PORT.
//! Every mutating request carries the caller as `"actor": {"id": ..., "role": ...}`.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tournament_engine::config::{ServerConfig, DEFAULT_DRAW_POINTS, DEFAULT_WIN_POINTS};
use tournament_engine::{
    apply_stats_after_match, create_standalone_match, create_tournament, enroll_participant,
    generate_matches, get_match, get_participant, import_roster, league_table, record_result,
    reschedule_match, Actor, EngineError, EngineResult, GameMatch, MatchFormat, MatchId,
    MemoryRepository, Participant, ParticipantId, ParticipantStats, Repository, ResultCode,
    StandingEntry, Tournament, TournamentFormat, TournamentId,
};

type AppState = Data<MemoryRepository>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Tournament with its schedule and standings (GET /api/tournaments/{id}).
#[derive(Serialize)]
struct TournamentView {
    tournament: Tournament,
    matches: Vec<GameMatch>,
    standings: Vec<StandingEntry>,
}

/// Participant with their counters across every match (GET /api/participants/{id}).
#[derive(Serialize)]
struct ParticipantView {
    id: ParticipantId,
    name: String,
    country: Option<String>,
    stats: ParticipantStats,
}

impl From<Participant> for ParticipantView {
    fn from(p: Participant) -> Self {
        let stats = p.stats();
        Self {
            id: p.id,
            name: p.name,
            country: p.country,
            stats,
        }
    }
}

#[derive(Deserialize)]
struct ActorBody {
    actor: Actor,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    format: TournamentFormat,
    #[serde(default)]
    match_format: MatchFormat,
    end_condition: u32,
    #[serde(default = "default_win_points")]
    win_points: u32,
    #[serde(default = "default_draw_points")]
    draw_points: u32,
    #[serde(default)]
    prize: u32,
    actor: Actor,
}

fn default_win_points() -> u32 {
    DEFAULT_WIN_POINTS
}

fn default_draw_points() -> u32 {
    DEFAULT_DRAW_POINTS
}

#[derive(Deserialize)]
struct EnrollBody {
    name: String,
    #[serde(default)]
    country: Option<String>,
    actor: Actor,
}

#[derive(Deserialize)]
struct ImportRosterBody {
    /// CSV text with a `name,country` header.
    csv: String,
    actor: Actor,
}

#[derive(Deserialize)]
struct StandaloneMatchBody {
    player_a: ParticipantId,
    player_b: ParticipantId,
    #[serde(default)]
    format: MatchFormat,
    end_condition: u32,
    actor: Actor,
}

#[derive(Deserialize)]
struct RecordResultBody {
    score_a: u32,
    score_b: u32,
    result: ResultCode,
    actor: Actor,
}

#[derive(Deserialize)]
struct RescheduleBody {
    start_time: DateTime<Utc>,
    #[serde(default)]
    end_time: Option<DateTime<Utc>>,
    actor: Actor,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Path segment: participant id (e.g. /api/participants/{id})
#[derive(Deserialize)]
struct ParticipantPath {
    id: ParticipantId,
}

fn error_response(e: &EngineError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        EngineError::NotFound(..) => HttpResponse::NotFound().json(body),
        EngineError::Forbidden => HttpResponse::Forbidden().json(body),
        EngineError::AlreadyHasMatches(_)
        | EngineError::AlreadyApplied(_)
        | EngineError::BracketSlotTaken { .. }
        | EngineError::DuplicateParticipant(_) => HttpResponse::Conflict().json(body),
        EngineError::Storage(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn respond<T: Serialize>(result: EngineResult<T>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-engine",
    })
}

/// Create a tournament (directors and administrators).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let tournament = Tournament::new(body.name, body.format, body.match_format, body.end_condition)
        .with_points(body.win_points, body.draw_points)
        .with_prize(body.prize);
    respond(create_tournament(state.get_ref(), tournament, &body.actor))
}

/// Get a tournament with its matches and standings (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.read(|tx| {
        Ok(TournamentView {
            tournament: tx.tournament(path.id)?,
            matches: tx.tournament_matches(path.id),
            standings: tx.standings(path.id),
        })
    }))
}

/// Enroll one participant (before matches are generated).
#[post("/api/tournaments/{id}/participants")]
async fn api_enroll_participant(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<EnrollBody>,
) -> HttpResponse {
    let body = body.into_inner();
    let participant = match body.country {
        Some(country) => Participant::new(body.name).with_country(country),
        None => Participant::new(body.name),
    };
    respond(enroll_participant(state.get_ref(), path.id, participant, &body.actor))
}

/// Enroll a whole CSV roster at once.
#[post("/api/tournaments/{id}/participants/import")]
async fn api_import_roster(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<ImportRosterBody>,
) -> HttpResponse {
    respond(import_roster(state.get_ref(), path.id, body.csv.as_bytes(), &body.actor))
}

/// Generate the schedule (once per tournament).
#[post("/api/tournaments/{id}/matches/generate")]
async fn api_generate_matches(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<ActorBody>,
) -> HttpResponse {
    respond(generate_matches(state.get_ref(), path.id, &body.actor, &mut rand::thread_rng()))
}

/// League table, highest score first.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(league_table(state.get_ref(), path.id))
}

/// Get a participant and their win/loss/draw counters (404 if not found).
#[get("/api/participants/{id}")]
async fn api_get_participant(state: AppState, path: Path<ParticipantPath>) -> HttpResponse {
    respond(get_participant(state.get_ref(), path.id).map(ParticipantView::from))
}

/// Get a single match (404 if not found).
#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    respond(get_match(state.get_ref(), path.id))
}

/// Create a stand-alone match between two registered participants.
#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Json<StandaloneMatchBody>) -> HttpResponse {
    respond(create_standalone_match(
        state.get_ref(),
        body.player_a,
        body.player_b,
        body.format,
        body.end_condition,
        &body.actor,
    ))
}

/// Record scores and result for a match.
#[put("/api/matches/{id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<RecordResultBody>,
) -> HttpResponse {
    respond(record_result(
        state.get_ref(),
        path.id,
        body.score_a,
        body.score_b,
        body.result,
        &body.actor,
    ))
}

/// Move a match to a later start time.
#[put("/api/matches/{id}/schedule")]
async fn api_reschedule_match(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<RescheduleBody>,
) -> HttpResponse {
    respond(reschedule_match(
        state.get_ref(),
        path.id,
        body.start_time,
        body.end_time,
        &body.actor,
    ))
}

/// Apply a recorded result to stats, standings and the bracket (once).
#[post("/api/matches/{id}/apply")]
async fn api_apply_stats(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<ActorBody>,
) -> HttpResponse {
    match apply_stats_after_match(state.get_ref(), path.id, &body.actor) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(MemoryRepository::new());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_enroll_participant)
            .service(api_import_roster)
            .service(api_generate_matches)
            .service(api_standings)
            .service(api_get_participant)
            .service(api_create_match)
            .service(api_get_match)
            .service(api_record_result)
            .service(api_reschedule_match)
            .service(api_apply_stats)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
