use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::middleware::{JsonOrDefault, RequireAdmin};
use crate::types::content::{
    Ack, Created, DialogueList, DialogueResponse, DialogueView, Items, SentenceList,
    SentenceResponse, level_or_default,
};
use crate::types::{NewSentence, OkMessage, RandomSentenceQuery, SaveDialogue};
use crate::{ContentFault, router::ContentState};

/// Path ids that are not integers match no row.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn failed(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(OkMessage::failed(msg))).into_response()
}

/// GET /api/sentences/random?level=A1 -> one random sentence of that level, or 404.
pub async fn random_sentence(
    State(state): State<ContentState>,
    Query(query): Query<RandomSentenceQuery>,
) -> Result<Response, ContentFault> {
    let level = level_or_default(query.level.as_deref());
    match state.store.random_sentence(level).await? {
        Some(sentence) => Ok(Json(SentenceResponse { ok: true, sentence }).into_response()),
        None => Ok(failed(
            StatusCode::NOT_FOUND,
            format!("No sentences for level {level}"),
        )),
    }
}

/// GET /api/sentences (admin)
pub async fn list_sentences(
    State(state): State<ContentState>,
    _admin: RequireAdmin,
) -> Result<Json<SentenceList>, ContentFault> {
    let items = state.store.list_sentences().await?;
    Ok(Json(Items { ok: true, items }))
}

/// POST /api/sentences (admin) -> 400 when `text` is missing or empty.
pub async fn create_sentence(
    State(state): State<ContentState>,
    _admin: RequireAdmin,
    JsonOrDefault(req): JsonOrDefault<NewSentence>,
) -> Result<Response, ContentFault> {
    let Some(text) = req.text.as_deref().filter(|t| !t.is_empty()) else {
        return Ok(failed(StatusCode::BAD_REQUEST, "text required"));
    };
    let level = level_or_default(req.level.as_deref());
    let id = state.store.create_sentence(text, level).await?;
    info!(id, level, "sentence created");
    Ok(Json(Created { ok: true, id }).into_response())
}

/// DELETE /api/sentences/{id} (admin)
pub async fn delete_sentence(
    State(state): State<ContentState>,
    _admin: RequireAdmin,
    Path(raw_id): Path<String>,
) -> Result<Json<Ack>, ContentFault> {
    if let Some(id) = parse_id(&raw_id) {
        state.store.delete_sentence(id).await?;
        info!(id, "sentence deleted");
    }
    Ok(Json(Ack { ok: true }))
}

/// GET /api/dialogues/list -> public listing without bodies.
pub async fn list_dialogues(
    State(state): State<ContentState>,
) -> Result<Json<DialogueList>, ContentFault> {
    let items = state.store.list_dialogues().await?;
    Ok(Json(Items { ok: true, items }))
}

/// GET /api/dialogues/{id} -> dialogue with decoded body, or 404.
pub async fn get_dialogue(
    State(state): State<ContentState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ContentFault> {
    let row = match parse_id(&raw_id) {
        Some(id) => state.store.get_dialogue(id).await?,
        None => None,
    };
    match row {
        Some(row) => Ok(Json(DialogueResponse {
            ok: true,
            dialogue: DialogueView::from(row),
        })
        .into_response()),
        None => Ok(failed(StatusCode::NOT_FOUND, "Not found")),
    }
}

/// POST /api/dialogues (admin) -> update when a non-zero `id` is given, insert otherwise.
/// 400 unless `title` is non-empty and `body` is an array.
pub async fn save_dialogue(
    State(state): State<ContentState>,
    _admin: RequireAdmin,
    JsonOrDefault(req): JsonOrDefault<SaveDialogue>,
) -> Result<Response, ContentFault> {
    let title = req.title.as_deref().filter(|t| !t.is_empty());
    let (Some(title), Some(body)) = (title, req.body.as_ref().filter(|b| b.is_array())) else {
        return Ok(failed(StatusCode::BAD_REQUEST, "title and body[] required"));
    };
    let level = level_or_default(req.level.as_deref());
    let body_json = body.to_string();

    let id = match req.id.filter(|id| *id != 0) {
        Some(id) => {
            state
                .store
                .update_dialogue(id, title, level, &body_json)
                .await?;
            info!(id, "dialogue updated");
            id
        }
        None => {
            let id = state
                .store
                .create_dialogue(title, level, &body_json)
                .await?;
            info!(id, "dialogue created");
            id
        }
    };
    Ok(Json(Created { ok: true, id }).into_response())
}

/// DELETE /api/dialogues/{id} (admin)
pub async fn delete_dialogue(
    State(state): State<ContentState>,
    _admin: RequireAdmin,
    Path(raw_id): Path<String>,
) -> Result<Json<Ack>, ContentFault> {
    if let Some(id) = parse_id(&raw_id) {
        state.store.delete_dialogue(id).await?;
        info!(id, "dialogue deleted");
    }
    Ok(Json(Ack { ok: true }))
}
