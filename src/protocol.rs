//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::Severity;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    StartSession {
        #[serde(default)]
        set: Option<String>,
    },
    GetState {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    SubmitAnswer {
        #[serde(rename = "sessionId")]
        session_id: String,
        answer: String,
    },
    SwitchSet {
        #[serde(rename = "sessionId")]
        session_id: String,
        set: String,
    },
    Reset {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    ListSets,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Session {
        #[serde(rename = "sessionId")]
        session_id: String,
        view: QuizView,
    },
    State {
        view: QuizView,
    },
    AnswerResult {
        view: QuizView,
    },
    Sets {
        sets: Vec<String>,
    },
    Error {
        message: String,
    },
}

/// Everything the client needs to render the quiz after any interaction.
#[derive(Clone, Debug, Serialize)]
pub struct QuizView {
    pub set: String,
    /// Sentence to translate; `None` once the set is complete.
    pub question: Option<QuestionOut>,
    /// Result banner from the last submission, when there was one.
    pub message: Option<MessageOut>,
    /// Percent of the set completed, clamped to 100.
    pub progress: f32,
    pub score: u32,
    #[serde(rename = "totalAttempts")]
    pub total_attempts: u32,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// Client-facing question DTO. Answers and hint texts stay server-side.
#[derive(Clone, Debug, Serialize)]
pub struct QuestionOut {
    pub sentence: String,
    #[serde(rename = "hintsAvailable")]
    pub hints_available: usize,
    #[serde(rename = "hintsUsed")]
    pub hints_used: usize,
}

/// Result banner: text plus a severity the frontend maps to alert styling.
#[derive(Clone, Debug, Serialize)]
pub struct MessageOut {
    pub text: String,
    pub severity: Severity,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize, Default)]
pub struct StartSessionIn {
    #[serde(default)]
    pub set: Option<String>,
}
#[derive(Serialize)]
pub struct SessionOut {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub view: QuizView,
}

#[derive(Debug, Deserialize)]
pub struct StateQuery {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Deserialize)]
pub struct AnswerIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub answer: String,
}

#[derive(Deserialize)]
pub struct SwitchSetIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub set: String,
}

#[derive(Deserialize)]
pub struct ResetIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Serialize)]
pub struct SetsOut {
    pub sets: Vec<String>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
