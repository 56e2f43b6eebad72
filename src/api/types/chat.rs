//! Request and response bodies for the ask endpoint

use serde::{Deserialize, Serialize};

/// Body of `POST /ask`
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// The user's question; missing or empty is a client error
    #[serde(default)]
    pub query: Option<String>,
}

/// Body of a successful `POST /ask` response
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    /// Either the fixed handoff string or the generator's structured reply
    pub message: serde_json::Value,
}
