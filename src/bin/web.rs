//! Single binary web server: landing page at "/", static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! ADMIN_USERNAME, ADMIN_PASSWORD, SESSION_TIMEOUT (ms).

use actix_files::Files;
use actix_web::{
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use chess_scoreboard_web::{
    standings, AdminCredentials, MatchId, MatchSubmission, Session, SessionStore, Tournament,
    TournamentError,
};
use serde::Deserialize;
use std::sync::RwLock;
use std::time::Duration;

/// Header carrying the opaque session token on authenticated requests.
const SESSION_HEADER: &str = "X-Session-Id";

/// Expired sessions are swept this often; validation also checks inline, so
/// the sweep only reclaims memory.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// In-memory stores, shared across workers. Mutations take the write lock,
/// so multi-field operations like reset appear atomic to readers.
type TournamentState = Data<RwLock<Tournament>>;
type SessionState = Data<RwLock<SessionStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddPlayerBody {
    #[serde(default)]
    player_name: String,
}

#[derive(Deserialize)]
struct LoginBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Path segment: player name (e.g. /api/players/{name})
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

/// 500 for a poisoned lock. The detail is logged, never echoed to the client.
fn internal_error(context: &str) -> HttpResponse {
    log::error!("{context}: state lock poisoned");
    HttpResponse::InternalServerError()
        .json(serde_json::json!({ "error": "Internal server error" }))
}

/// Map a tournament error to its response: 404 for absent entities, 400 for
/// validation and conflict failures. The message is echoed to the caller.
fn tournament_error(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_not_found() {
        HttpResponse::NotFound().json(body)
    } else {
        HttpResponse::BadRequest().json(body)
    }
}

/// Session token from the request header, if any.
fn session_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
}

/// Authorization gate for mutating endpoints: validate the token against the
/// session store and hand back the live session, or the 401 short-circuit
/// response. Successful validation slides the session's expiry forward.
fn require_admin(sessions: &SessionState, req: &HttpRequest) -> Result<Session, HttpResponse> {
    let mut store = match sessions.write() {
        Ok(guard) => guard,
        Err(_) => return Err(internal_error("auth gate")),
    };
    store.validate(session_token(req)).map_err(|e| {
        HttpResponse::Unauthorized().json(serde_json::json!({ "error": e.to_string() }))
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "chess-scoreboard-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Ranked standings: stats for every player, recomputed from the ledger on
/// each request (win rate descending, then wins).
#[get("/api/players")]
async fn api_list_players(tournament: TournamentState) -> HttpResponse {
    let g = match tournament.read() {
        Ok(guard) => guard,
        Err(_) => return internal_error("list players"),
    };
    HttpResponse::Ok().json(standings(&g))
}

/// Register a player (admin only).
#[post("/api/players")]
async fn api_add_player(
    tournament: TournamentState,
    sessions: SessionState,
    req: HttpRequest,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let _session = match require_admin(&sessions, &req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let mut g = match tournament.write() {
        Ok(guard) => guard,
        Err(_) => return internal_error("add player"),
    };
    match g.add_player(&body.player_name) {
        Ok(player) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Player added successfully",
            "player": player.name,
        })),
        Err(e) => tournament_error(&e),
    }
}

/// Remove a player by name (admin only). Refused while any match still
/// references the player.
#[delete("/api/players/{name}")]
async fn api_remove_player(
    tournament: TournamentState,
    sessions: SessionState,
    req: HttpRequest,
    path: Path<PlayerPath>,
) -> HttpResponse {
    let _session = match require_admin(&sessions, &req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let mut g = match tournament.write() {
        Ok(guard) => guard,
        Err(_) => return internal_error("remove player"),
    };
    match g.remove_player(&path.name) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Player removed successfully",
        })),
        Err(e) => tournament_error(&e),
    }
}

/// Ledger entries, most recent first.
#[get("/api/matches")]
async fn api_list_matches(tournament: TournamentState) -> HttpResponse {
    let g = match tournament.read() {
        Ok(guard) => guard,
        Err(_) => return internal_error("list matches"),
    };
    HttpResponse::Ok().json(g.matches_by_recency())
}

/// Record a match (admin only). Validation rules run in a fixed order and
/// the first failing rule's message is echoed back.
#[post("/api/matches")]
async fn api_record_match(
    tournament: TournamentState,
    sessions: SessionState,
    req: HttpRequest,
    body: Json<MatchSubmission>,
) -> HttpResponse {
    let _session = match require_admin(&sessions, &req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let mut g = match tournament.write() {
        Ok(guard) => guard,
        Err(_) => return internal_error("record match"),
    };
    match g.record_match(&body) {
        Ok(record) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Match recorded successfully",
            "match": record,
        })),
        Err(e) => tournament_error(&e),
    }
}

/// Delete a match by id (admin only). Ids of later matches are unaffected
/// and the deleted id is never reissued.
#[delete("/api/matches/{id}")]
async fn api_delete_match(
    tournament: TournamentState,
    sessions: SessionState,
    req: HttpRequest,
    path: Path<MatchPath>,
) -> HttpResponse {
    let _session = match require_admin(&sessions, &req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let mut g = match tournament.write() {
        Ok(guard) => guard,
        Err(_) => return internal_error("delete match"),
    };
    match g.delete_match(path.id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Match deleted successfully",
        })),
        Err(e) => tournament_error(&e),
    }
}

/// Wipe players, matches and the id counter in one step (admin only). Runs
/// under the write lock, so no reader observes a partial reset.
#[post("/api/reset")]
async fn api_reset(
    tournament: TournamentState,
    sessions: SessionState,
    req: HttpRequest,
) -> HttpResponse {
    let _session = match require_admin(&sessions, &req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let mut g = match tournament.write() {
        Ok(guard) => guard,
        Err(_) => return internal_error("reset"),
    };
    g.reset();
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Tournament reset successfully",
    }))
}

/// Log in with the admin credentials. Returns the session token the client
/// sends back in the X-Session-Id header on every mutating request.
#[post("/api/login")]
async fn api_login(sessions: SessionState, body: Json<LoginBody>) -> HttpResponse {
    let mut store = match sessions.write() {
        Ok(guard) => guard,
        Err(_) => return internal_error("login"),
    };
    match store.login(&body.username, &body.password) {
        Ok(session) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Login successful",
            "sessionId": session.session_id,
            "user": session.user,
        })),
        Err(e) => {
            let body = serde_json::json!({ "error": e.to_string() });
            if e.is_missing_credentials() {
                HttpResponse::BadRequest().json(body)
            } else {
                HttpResponse::Unauthorized().json(body)
            }
        }
    }
}

/// Log out: drop the session. Succeeds whether or not the token was live.
#[post("/api/logout")]
async fn api_logout(sessions: SessionState, req: HttpRequest) -> HttpResponse {
    if let Ok(mut store) = sessions.write() {
        if let Some(token) = session_token(&req) {
            store.logout(token);
        }
    }
    HttpResponse::Ok().json(serde_json::json!({ "message": "Logout successful" }))
}

/// Report whether the presented token maps to a live session. Never errors;
/// a missing or dead token is simply `authenticated: false`.
#[get("/api/auth/check")]
async fn api_auth_check(sessions: SessionState, req: HttpRequest) -> HttpResponse {
    let mut store = match sessions.write() {
        Ok(guard) => guard,
        Err(_) => {
            return HttpResponse::Ok().json(serde_json::json!({ "authenticated": false }))
        }
    };
    match store.validate(session_token(&req)) {
        Ok(session) => HttpResponse::Ok().json(serde_json::json!({
            "authenticated": true,
            "user": session.user,
        })),
        Err(_) => HttpResponse::Ok().json(serde_json::json!({ "authenticated": false })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "chess123".to_string()
}

/// Session TTL in milliseconds (24 hours unless SESSION_TIMEOUT overrides it).
fn default_session_timeout_ms() -> i64 {
    24 * 60 * 60 * 1000
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let admin_username =
        std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| default_admin_username());
    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| default_admin_password());
    let session_timeout_ms: i64 = std::env::var("SESSION_TIMEOUT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(default_session_timeout_ms);

    let bind = (host.as_str(), port);
    log::info!("Starting chess scoreboard at http://{}:{}", bind.0, bind.1);

    let tournament = Data::new(RwLock::new(Tournament::new()));
    let sessions = Data::new(RwLock::new(SessionStore::new(
        AdminCredentials::new(admin_username, admin_password),
        chrono::Duration::milliseconds(session_timeout_ms),
    )));

    // Background task: every 30 minutes, drop sessions whose expiry passed
    let sessions_sweep = sessions.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let mut store = match sessions_sweep.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let removed = store.purge_expired();
            if removed > 0 {
                log::info!("Swept {} expired session(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(tournament.clone())
            .app_data(sessions.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_list_matches)
            .service(api_record_match)
            .service(api_delete_match)
            .service(api_reset)
            .service(api_login)
            .service(api_logout)
            .service(api_auth_check)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
