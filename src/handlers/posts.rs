use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    middleware::CurrentUser,
    models::{
        comments::{CreateCommentDto, CreatedCommentDto},
        posts::{CreatePostDto, UpdatePostDto},
        query::{CommentsQueryDto, HomeQueryDto},
        response::Response,
    },
    AppState, Result,
};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post).put(update_post).delete(delete_post))
        .route("/{id}/comments", get(list_comments).post(create_comment))
}

/// Raw paginated payload for the infinite-scroll client.
async fn list_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<HomeQueryDto>,
) -> Result<impl IntoResponse> {
    let page = app_state
        .posts_service
        .get_home_posts_by_category(query.category.as_deref(), query.page, query.size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Json(new_post): Json<CreatePostDto>,
) -> Result<impl IntoResponse> {
    let user_id = current_user.require()?;
    new_post.validate()?;

    let post = app_state
        .posts_service
        .create(
            user_id,
            new_post.category_id,
            &new_post.title,
            &new_post.description,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let post = app_state.posts_service.get(post_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Path(post_id): Path<Uuid>,
    Json(update): Json<UpdatePostDto>,
) -> Result<impl IntoResponse> {
    let requester_id = current_user.require()?;
    update.validate()?;

    app_state
        .posts_service
        .update(
            post_id,
            requester_id,
            update.category_id,
            &update.title,
            &update.description,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(Response {
            status: "success",
            message: "Post updated".to_string(),
        }),
    ))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let requester_id = current_user.require()?;

    app_state.posts_service.delete(post_id, requester_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn list_comments(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Path(post_id): Path<Uuid>,
    Query(query): Query<CommentsQueryDto>,
) -> Result<impl IntoResponse> {
    let page = app_state
        .comments_service
        .get_comments_page(post_id, query.page, query.size, current_user.id())
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

async fn create_comment(
    Extension(app_state): Extension<Arc<AppState>>,
    current_user: CurrentUser,
    Path(post_id): Path<Uuid>,
    Json(new_comment): Json<CreateCommentDto>,
) -> Result<impl IntoResponse> {
    let user_id = current_user.require()?;
    new_comment.validate()?;

    let comment_id = app_state
        .comments_service
        .create_comment(post_id, user_id, &new_comment.content)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedCommentDto { comment_id })))
}
