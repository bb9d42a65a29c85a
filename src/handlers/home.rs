use std::sync::Arc;

use axum::{
    extract::Query, http::StatusCode, response::IntoResponse, routing::get, Extension, Json,
    Router,
};

use crate::{
    middleware::CurrentUser,
    models::{posts::HomePageDto, query::HomeQueryDto},
    AppState, Result,
};

pub fn home_handler() -> Router {
    Router::new().route("/", get(index))
}

/// The home page model: the first `size` posts plus everything the client
/// needs to keep scrolling. `/api/posts` serves the follow-up pages.
async fn index(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Query(query): Query<HomeQueryDto>,
) -> Result<impl IntoResponse> {
    let page = app_state
        .posts_service
        .get_home_posts_by_category(query.category.as_deref(), query.page, query.size)
        .await?;

    let username = app_state
        .users_service
        .nickname_or_guest(current_user.id())
        .await?;

    let category = match query.category {
        Some(ref name) if !name.trim().is_empty() => name.clone(),
        _ => "all".to_string(),
    };

    Ok((
        StatusCode::OK,
        Json(HomePageDto {
            username,
            category,
            has_next: page.has_next,
            next_page: page.page.saturating_add(1),
            size: page.size,
            posts: page.content,
        }),
    ))
}
