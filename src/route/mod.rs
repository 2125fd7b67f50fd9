use axum::{routing::any, Router};

pub mod book;
pub mod echo;
pub mod index;

/// Routes match on exact path only; every method is accepted. Undefined
/// paths fall through to axum's default 404.
pub fn app() -> Router {
    Router::new()
        .route("/", any(index::index))
        .route("/echo", any(echo::echo))
        .route("/json", any(book::get_book))
}
