//! REST ハンドラ
//!
//! どのハンドラも状態を持たず、リクエストごとに JSON ストアを読み書きする。

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AppState;
use super::response::ApiError;
use crate::domain::choice::normalize;
use crate::domain::choose_random;

pub const SERVICE_MESSAGE: &str = "Random Choice API is running!";

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChoicesResponse {
    pub choices: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewChoice {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub message: String,
    pub choices: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub remaining_choices: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomResponse {
    pub choice: String,
    pub total_choices: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub choices_count: usize,
}

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: [
            "/choices",
            "/random",
            "/health",
            "POST /choices",
            "DELETE /choices",
            "DELETE /choices/{text}",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    })
}

pub async fn list_choices_handler(State(state): State<AppState>) -> Json<ChoicesResponse> {
    let choices = state.store.load();
    Json(ChoicesResponse {
        count: choices.len(),
        choices,
    })
}

pub async fn add_choice_handler(
    State(state): State<AppState>,
    Json(body): Json<NewChoice>,
) -> Result<Json<AddResponse>, ApiError> {
    let appended = state.store.append(&body.text)?;
    info!(choice = %appended.choice, "choice added");
    Ok(Json(AddResponse {
        message: format!("'{}' added successfully!", appended.choice),
        choices: appended.choices,
    }))
}

pub async fn clear_choices_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.store.clear();
    info!("all choices cleared");
    Json(MessageResponse {
        message: "All choices cleared!".to_string(),
    })
}

/// `text` は axum がパーセントデコード済み
pub async fn delete_choice_handler(
    State(state): State<AppState>,
    Path(text): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let remaining = state.store.remove(&text)?;
    let choice = normalize(&text);
    info!(%choice, remaining = remaining.len(), "choice deleted");
    Ok(Json(DeleteResponse {
        message: format!("'{choice}' deleted successfully!"),
        remaining_choices: remaining.len(),
    }))
}

pub async fn random_choice_handler(
    State(state): State<AppState>,
) -> Result<Json<RandomResponse>, ApiError> {
    let choices = state.store.load();
    let choice = choose_random(&choices).ok_or_else(ApiError::no_choices)?;
    Ok(Json(RandomResponse {
        choice: choice.clone(),
        total_choices: choices.len(),
    }))
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        choices_count: state.store.load().len(),
    })
}
