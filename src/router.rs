use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::db::{ContentStore, DbPool, UserStore};
use crate::handlers::{accounts, content, probe};
use crate::middleware::AdminAuth;

/// Shared state of the account/score service.
#[derive(Clone)]
pub struct ScoreState {
    pub store: UserStore,
}

impl ScoreState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            store: UserStore::new(pool),
        }
    }
}

pub fn score_router(state: ScoreState) -> Router {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/leaderboard", get(accounts::leaderboard))
        .route("/add_points", post(accounts::add_points))
        .with_state(state)
}

/// State of the connectivity-check service. No route reads the pool; holding
/// it here keeps the handle opened at startup alive while the server runs.
#[derive(Clone)]
pub struct ProbeState {
    pub pool: DbPool,
}

impl ProbeState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Shared state of the sentences/dialogues service.
#[derive(Clone)]
pub struct ContentState {
    pub store: ContentStore,
    pub admin: AdminAuth,
}

impl ContentState {
    pub fn new(store: ContentStore, admin: AdminAuth) -> Self {
        Self { store, admin }
    }
}

pub fn probe_router(state: ProbeState) -> Router {
    Router::new().route("/", get(probe::home)).with_state(state)
}

pub fn content_router(state: ContentState) -> Router {
    let sentences = Router::new()
        .route("/random", get(content::random_sentence))
        .route(
            "/",
            get(content::list_sentences).post(content::create_sentence),
        )
        .route("/{id}", delete(content::delete_sentence));

    let dialogues = Router::new()
        .route("/list", get(content::list_dialogues))
        .route("/", post(content::save_dialogue))
        .route(
            "/{id}",
            get(content::get_dialogue).delete(content::delete_dialogue),
        );

    Router::new()
        .nest("/api/sentences", sentences)
        .nest("/api/dialogues", dialogues)
        .with_state(state)
}
