//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{State, Query}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::protocol::*;
use crate::state::AppState;
use crate::logic::*;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, body), fields(set = body.set.as_deref().unwrap_or("<default>")))]
pub async fn http_post_session(
  State(state): State<Arc<AppState>>,
  Json(body): Json<StartSessionIn>,
) -> impl IntoResponse {
  let (session_id, view) = start_session(&state, body.set).await;
  info!(target: "quiz", session = %session_id, set = %view.set, "HTTP session started");
  Json(SessionOut { session_id, view })
}

#[instrument(level = "info", skip(state), fields(%q.session_id))]
pub async fn http_get_state(
  State(state): State<Arc<AppState>>,
  Query(q): Query<StateQuery>,
) -> impl IntoResponse {
  let view = current_view(&state, &q.session_id).await;
  Json(view)
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id, answer_len = body.answer.len()))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> impl IntoResponse {
  let view = submit_answer(&state, &body.session_id, &body.answer).await;
  info!(target: "quiz", session = %body.session_id, score = view.score, progress = view.progress, "HTTP submit_answer evaluated");
  Json(view)
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id, %body.set))]
pub async fn http_post_switch_set(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SwitchSetIn>,
) -> impl IntoResponse {
  let view = switch_set(&state, &body.session_id, &body.set).await;
  info!(target: "quiz", session = %body.session_id, set = %body.set, "HTTP set switched");
  Json(view)
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id))]
pub async fn http_post_reset(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ResetIn>,
) -> impl IntoResponse {
  let view = reset(&state, &body.session_id).await;
  info!(target: "quiz", session = %body.session_id, "HTTP session reset");
  Json(view)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_sets(
  State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
  Json(SetsOut { sets: list_sets(&state) })
}
