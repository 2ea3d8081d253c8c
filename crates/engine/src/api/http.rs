//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use maze_domain::{
    Character, CharacterId, GameId, MoveCharacterError, ReadCharacterError, ReadGameError,
};
use std::sync::Arc;

use crate::api::auth::Auth;
use crate::api::patch::{self, PatchError, PatchOperation};
use crate::app::App;
use crate::infrastructure::ports::RepoError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/games/{game_id}/characters", get(list_characters))
        .route(
            "/games/{game_id}/characters/{character_id}",
            get(get_character).patch(patch_character),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Characters
// =============================================================================

async fn list_characters(
    State(app): State<Arc<App>>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<Character>>, ApiError> {
    let outcome = app
        .use_cases
        .characters
        .get_characters
        .execute(&GameId::new(game_id))
        .await?;

    outcome.fold(|characters| Ok(Json(characters)), |error| Err(ApiError::from(error)))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path((game_id, character_id)): Path<(String, i32)>,
) -> Result<Json<Character>, ApiError> {
    let outcome = app
        .use_cases
        .characters
        .get_character
        .execute(&GameId::new(game_id), CharacterId::new(character_id))
        .await?;

    outcome.fold(|character| Ok(Json(character)), |error| Err(ApiError::from(error)))
}

/// Apply a JSON-Patch document to a character.
///
/// Only a single `replace` of `location` is supported; it is treated as a
/// move. On success the character is re-read and returned.
async fn patch_character(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    Path((game_id, character_id)): Path<(String, i32)>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> Result<Json<Character>, ApiError> {
    let request = patch::decode_move(&operations)?;
    let game_id = GameId::new(game_id);
    let character_id = CharacterId::new(character_id);

    tracing::debug!(
        user_id = %user.user_id,
        game_id = %game_id,
        character_id = %character_id,
        destination = %request.destination,
        "Move requested"
    );

    let moved = app
        .use_cases
        .characters
        .move_character
        .execute(&game_id, character_id, request.destination)
        .await?;
    moved.fold(|()| Ok(()), |error| Err(ApiError::from(error)))?;

    let refreshed = app
        .use_cases
        .characters
        .get_character
        .execute(&game_id, character_id)
        .await?;

    refreshed.fold(
        |character| Ok(Json(character)),
        |_| {
            Err(ApiError::Conflict(
                "Character was unavailable after movement".to_string(),
            ))
        },
    )
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed on infrastructure error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Request could not be completed",
                )
                    .into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<PatchError> for ApiError {
    fn from(e: PatchError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ReadGameError> for ApiError {
    fn from(e: ReadGameError) -> Self {
        match e {
            ReadGameError::NotFound => ApiError::NotFound(e.to_string()),
        }
    }
}

impl From<ReadCharacterError> for ApiError {
    fn from(e: ReadCharacterError) -> Self {
        match e {
            ReadCharacterError::GameNotFound | ReadCharacterError::CharacterNotFound => {
                ApiError::NotFound(e.to_string())
            }
        }
    }
}

impl From<MoveCharacterError> for ApiError {
    fn from(e: MoveCharacterError) -> Self {
        match e {
            MoveCharacterError::GameNotFound
            | MoveCharacterError::CharacterNotFound
            | MoveCharacterError::LocationNotFound => ApiError::NotFound(e.to_string()),
            MoveCharacterError::NotAnAvailableMovement => ApiError::BadRequest(e.to_string()),
        }
    }
}
