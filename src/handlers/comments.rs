use std::sync::Arc;

use axum::{
    extract::Path, http::StatusCode, response::IntoResponse, routing::put, Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    middleware::CurrentUser,
    models::{comments::UpdateCommentDto, response::Response},
    AppState, Result,
};

pub fn comments_handler() -> Router {
    Router::new().route("/{id}", put(update_comment).delete(delete_comment))
}

async fn update_comment(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Path(comment_id): Path<Uuid>,
    Json(update): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse> {
    let requester_id = current_user.require()?;
    update.validate()?;

    app_state
        .comments_service
        .edit_comment(comment_id, requester_id, &update.content)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Response {
            status: "success",
            message: "Comment updated".to_string(),
        }),
    ))
}

async fn delete_comment(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Path(comment_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let requester_id = current_user.require()?;

    app_state
        .comments_service
        .delete_comment(comment_id, requester_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
