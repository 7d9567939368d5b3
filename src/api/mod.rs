//! JSON REST API
//!
//! | Method | Path | 内容 |
//! |---|---|---|
//! | GET | `/` | サービス情報 |
//! | GET | `/choices` | 一覧 |
//! | POST | `/choices` | 追加 `{text}` |
//! | DELETE | `/choices` | 全削除 |
//! | DELETE | `/choices/{text}` | 1 件削除 |
//! | GET | `/random` | ランダム選択 |
//! | GET | `/health` | ヘルスチェック |

pub mod handlers;
mod middleware;
pub mod response;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get};

use crate::application::ChoiceStore;

pub use response::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: ChoiceStore,
}

impl AppState {
    pub fn new(store: ChoiceStore) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route(
            "/choices",
            get(handlers::list_choices_handler)
                .post(handlers::add_choice_handler)
                .delete(handlers::clear_choices_handler),
        )
        .route("/choices/:text", delete(handlers::delete_choice_handler))
        .route("/random", get(handlers::random_choice_handler))
        .route("/health", get(handlers::health_handler))
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn(middleware::request_log_middleware))
        .with_state(state)
}
