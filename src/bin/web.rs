//! Single binary web server: tournament brackets and match updates via a JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080), RUST_LOG (e.g. debug).

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use force_sports::{
    read_roster_csv, update_match, update_status, MatchRef, MatchUpdate, Participant,
    PointsLedger, ResultPolicy, Tournament, TournamentError, TournamentFormat, TournamentId,
    TournamentStatus, UserId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: tournaments by ID plus the shared points ledger.
#[derive(Default)]
struct Store {
    tournaments: HashMap<TournamentId, TournamentEntry>,
    points: PointsLedger,
}

type AppState = Data<RwLock<Store>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// How often the cleanup task runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Server settings read from the environment at startup.
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Self { host, port }
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(default)]
    sport: Option<String>,
    /// Free-form label; anything but ROUND_ROBIN means knockout.
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    max_participants: Option<usize>,
    #[serde(default)]
    result_policy: ResultPolicy,
}

#[derive(Deserialize)]
struct RegisterBody {
    #[serde(default)]
    user: Option<UserId>,
    name: String,
    #[serde(default)]
    team_name: Option<String>,
}

#[derive(Deserialize)]
struct StatusBody {
    status: TournamentStatus,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and user id.
#[derive(Deserialize)]
struct ParticipantPath {
    id: TournamentId,
    user_id: UserId,
}

/// Path segments: tournament id and match position.
#[derive(Deserialize)]
struct MatchIndexPath {
    id: TournamentId,
    index: usize,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct MatchIdPath {
    id: TournamentId,
    match_id: Uuid,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

/// Map a domain error to a response: missing entities are 404, everything else 400.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::MatchNotFound | TournamentError::ParticipantNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Run `f` against a tournament (refreshing its activity time) and respond with the tournament.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament, &mut PointsLedger) -> Result<(), TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Store { tournaments, points } = &mut *g;
    let entry = match tournaments.get_mut(&id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match f(&mut *t, &mut *points) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "force-sports",
    })
}

/// Create a new tournament open for registration.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    let mut tournament = Tournament::new(name, TournamentFormat::from_label(body.format.as_deref()));
    tournament.sport = body.sport;
    tournament.max_participants = body.max_participants;
    tournament.result_policy = body.result_policy;
    let id = tournament.id;
    log::info!("Created tournament {} ({:?})", id, tournament.format);

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.tournaments.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |_, _| Ok(()))
}

/// Register a participant (registration must be open).
#[post("/api/tournaments/{id}/participants")]
async fn api_register(state: AppState, path: Path<TournamentPath>, body: Json<RegisterBody>) -> HttpResponse {
    let body = body.into_inner();
    let participant = Participant {
        user: body.user.unwrap_or_else(Uuid::new_v4),
        name: body.name,
        team_name: body.team_name,
    };
    with_tournament(&state, path.id, |t, _| t.register(participant))
}

/// Register every row of a CSV roster (header: name,team_name,user). All or nothing.
#[post("/api/tournaments/{id}/participants/import")]
async fn api_import_roster(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    let roster = match read_roster_csv(body.as_bytes()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    };
    with_tournament(&state, path.id, |t, _| {
        let mut staged = t.clone();
        for p in roster {
            staged.register(p)?;
        }
        *t = staged;
        Ok(())
    })
}

/// Withdraw a participant (registration must be open).
#[delete("/api/tournaments/{id}/participants/{user_id}")]
async fn api_withdraw(state: AppState, path: Path<ParticipantPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t, _| t.withdraw(path.user_id))
}

#[post("/api/tournaments/{id}/participants/{user_id}/check-in")]
async fn api_check_in(state: AppState, path: Path<ParticipantPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t, _| t.check_in(path.user_id))
}

#[delete("/api/tournaments/{id}/participants/{user_id}/check-in")]
async fn api_undo_check_in(state: AppState, path: Path<ParticipantPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t, _| t.undo_check_in(path.user_id))
}

/// Change tournament status. Moving to IN_PROGRESS generates the bracket.
#[put("/api/tournaments/{id}/status")]
async fn api_update_status(state: AppState, path: Path<TournamentPath>, body: Json<StatusBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t, _| {
        update_status(t, body.status, &mut rand::thread_rng())
    })
}

/// Update a match by its position in the match list.
#[put("/api/tournaments/{id}/matches/{index}")]
async fn api_update_match_by_index(
    state: AppState,
    path: Path<MatchIndexPath>,
    body: Json<MatchUpdate>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t, points| {
        if let Some(award) = update_match(t, MatchRef::Index(path.index), &body)? {
            points.apply(award);
        }
        Ok(())
    })
}

/// Update a match by its stable id.
#[put("/api/tournaments/{id}/matches/by-id/{match_id}")]
async fn api_update_match_by_id(
    state: AppState,
    path: Path<MatchIdPath>,
    body: Json<MatchUpdate>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t, points| {
        if let Some(award) = update_match(t, MatchRef::Id(path.match_id), &body)? {
            points.apply(award);
        }
        Ok(())
    })
}

/// Points leaderboard across all tournaments.
#[get("/api/points")]
async fn api_points(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(g.points.leaderboard()),
        Err(_) => lock_error(),
    }
}

/// All API routes, shared by the server and the handler tests.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_register)
        .service(api_import_roster)
        .service(api_withdraw)
        .service(api_check_in)
        .service(api_undo_check_in)
        .service(api_update_status)
        .service(api_update_match_by_id)
        .service(api_update_match_by_index)
        .service(api_points);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state: AppState = Data::new(RwLock::new(Store::default()));

    // Background task: periodically remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.tournaments.len();
            g.tournaments
                .retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.tournaments.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
