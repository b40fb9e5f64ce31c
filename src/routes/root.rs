use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Hypermodern Python Stack!";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE,
    })
}
