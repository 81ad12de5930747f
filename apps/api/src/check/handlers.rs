//! Axum route handler for POST /check-teammates.

use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::info;

use crate::check::models::{CheckRequest, CheckResponse, Mode};
use crate::check::prompts::build_prompt;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /check-teammates
///
/// Builds the mode-selected prompt, makes one upstream completion call, and
/// reshapes the answer into the `{choices:[{message:{content}}]}` envelope.
/// All failures come back as 500 `{error}` via `AppError`; the body is
/// parsed by hand from raw bytes so a malformed payload takes the same
/// path instead of an extractor-specific rejection.
pub async fn handle_check(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CheckResponse>, AppError> {
    let request: CheckRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadPayload(e.to_string()))?;

    let mode = Mode::from_wire(request.mode.as_deref());
    let prompt = build_prompt(mode, &request.player_list, &request.single_player);

    info!(?mode, players = request.player_list.lines().count(), "teammate check");

    let content = state.llm.complete(&prompt).await?;

    Ok(Json(CheckResponse::from_text(content)))
}
