use std::sync::Arc;

use axum::{
    extract::Path, http::StatusCode, response::IntoResponse, routing::post, Extension, Json,
    Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{models::categories::CreateCategoryDto, AppState, Result};

pub fn categories_handler() -> Router {
    Router::new()
        .route("/", post(create_category))
        .route("/{id}", axum::routing::delete(delete_category))
}

async fn create_category(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(new_category): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse> {
    new_category.validate()?;

    let category = app_state
        .categories_service
        .create(&new_category.name)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

async fn delete_category(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(category_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    app_state.categories_service.delete(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
