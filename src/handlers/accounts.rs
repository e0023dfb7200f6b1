use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::db::LeaderboardEntry;
use crate::middleware::JsonBody;
use crate::types::accounts::{
    LOGIN_FAILED_MESSAGE, LOGIN_OK_MESSAGE, POINTS_UPDATED_MESSAGE, REGISTERED_MESSAGE,
};
use crate::types::{AddPointsRequest, CredentialsRequest, MessageResponse};
use crate::{TaaltorenError, router::ScoreState};

/// POST /register -> inserts the user as given; duplicates are not checked.
pub async fn register(
    State(state): State<ScoreState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<MessageResponse>, TaaltorenError> {
    state
        .store
        .register(req.username.as_deref(), req.password.as_deref())
        .await?;
    info!(username = req.username.as_deref().unwrap_or("<none>"), "user registered");
    Ok(Json(MessageResponse::new(REGISTERED_MESSAGE)))
}

/// POST /login -> 200 when username and password match a row, 401 otherwise.
/// No session or token is issued.
pub async fn login(
    State(state): State<ScoreState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Response, TaaltorenError> {
    let matched = state
        .store
        .verify_credentials(req.username.as_deref(), req.password.as_deref())
        .await?;

    if matched {
        info!(username = req.username.as_deref().unwrap_or("<none>"), "login accepted");
        Ok(Json(MessageResponse::new(LOGIN_OK_MESSAGE)).into_response())
    } else {
        info!(username = req.username.as_deref().unwrap_or("<none>"), "login rejected");
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new(LOGIN_FAILED_MESSAGE)),
        )
            .into_response())
    }
}

/// GET /leaderboard
pub async fn leaderboard(
    State(state): State<ScoreState>,
) -> Result<Json<Vec<LeaderboardEntry>>, TaaltorenError> {
    Ok(Json(state.store.leaderboard().await?))
}

/// POST /add_points -> always reports success, even when no row matched.
pub async fn add_points(
    State(state): State<ScoreState>,
    JsonBody(req): JsonBody<AddPointsRequest>,
) -> Result<Json<MessageResponse>, TaaltorenError> {
    let points = req.points_or_zero();
    let rows = state
        .store
        .add_points(req.username.as_deref(), points)
        .await?;
    debug!(
        username = req.username.as_deref().unwrap_or("<none>"),
        points,
        rows,
        "points added"
    );
    Ok(Json(MessageResponse::new(POINTS_UPDATED_MESSAGE)))
}
