use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    auth::auth_handler, categories::categories_handler, comments::comments_handler,
    home::home_handler, ops::ops_handler, posts::posts_handler,
};
use crate::AppState;

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(home_handler())
        .nest("/api/auth", auth_handler())
        .nest("/api/posts", posts_handler())
        .nest("/api/comments", comments_handler())
        .nest("/api/categories", categories_handler())
        .nest("/api/ops", ops_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}
