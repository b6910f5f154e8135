//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::logic::*;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "quantify_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "quantify_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "quantify_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "quantify_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "quantify_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::StartSession { set } => {
      let (session_id, view) = start_session(state, set).await;
      tracing::info!(target: "quiz", session = %session_id, set = %view.set, "WS session started");
      ServerWsMessage::Session { session_id, view }
    }

    ClientWsMessage::GetState { session_id } => {
      let view = current_view(state, &session_id).await;
      ServerWsMessage::State { view }
    }

    ClientWsMessage::SubmitAnswer { session_id, answer } => {
      let view = submit_answer(state, &session_id, &answer).await;
      tracing::info!(target: "quiz", session = %session_id, score = view.score, progress = view.progress, "WS submit_answer evaluated");
      ServerWsMessage::AnswerResult { view }
    }

    ClientWsMessage::SwitchSet { session_id, set } => {
      let view = switch_set(state, &session_id, &set).await;
      tracing::info!(target: "quiz", session = %session_id, set = %view.set, "WS set switched");
      ServerWsMessage::State { view }
    }

    ClientWsMessage::Reset { session_id } => {
      let view = reset(state, &session_id).await;
      tracing::info!(target: "quiz", session = %session_id, "WS session reset");
      ServerWsMessage::State { view }
    }

    ClientWsMessage::ListSets => ServerWsMessage::Sets { sets: list_sets(state) },
  }
}
