// crates/server/src/routes/notes.rs
//! Note read/save endpoints backed by the file store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::notes::valid_key;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct NoteResponse {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveNoteRequest {
    pub text: String,
}

/// GET /api/notes/{key} - Read a saved note.
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    if !valid_key(&key) {
        return Err(ApiError::BadRequest(format!("Invalid note key: {key}")));
    }
    match state.notes.get(&key) {
        Some(text) => Ok(Json(NoteResponse { key, text })),
        None => Err(ApiError::NoteNotFound(key)),
    }
}

/// PUT /api/notes/{key} - Save a note, replacing any previous text.
pub async fn put_note(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(request): Json<SaveNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    if !valid_key(&key) {
        return Err(ApiError::BadRequest(format!("Invalid note key: {key}")));
    }
    state
        .notes
        .set(&key, &request.text)
        .map_err(|err| ApiError::Internal(format!("Failed to persist note: {err}")))?;
    Ok(Json(NoteResponse {
        key,
        text: request.text,
    }))
}

/// Create the notes routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/notes/{key}", get(get_note).put(put_note))
}
