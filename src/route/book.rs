use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: u16,
}

impl IntoResponse for Book {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Responds with the same fixed book on every request.
pub async fn get_book() -> Book {
    Book {
        title: "Hello Golang".to_string(),
        author: "John Mike".to_string(),
        year: 2021,
    }
}
