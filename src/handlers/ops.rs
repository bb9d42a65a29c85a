use std::sync::Arc;

use axum::{
    http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::{AppState, Result};

fn default_post_count() -> u32 {
    100
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateDummyDto {
    #[serde(default = "default_post_count")]
    #[validate(range(min = 1, max = 1000, message = "posts must be between 1 and 1000"))]
    pub posts: u32,
}

pub fn ops_handler() -> Router {
    Router::new().route(
        "/dummy-data",
        post(generate_dummy_data).delete(cleanup_dummy_data),
    )
}

async fn generate_dummy_data(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<GenerateDummyDto>,
) -> Result<impl IntoResponse> {
    body.validate()?;

    let summary = app_state.cleanup_service.generate(body.posts).await?;

    Ok((StatusCode::CREATED, Json(summary)))
}

async fn cleanup_dummy_data(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let report = app_state.cleanup_service.cleanup().await?;

    Ok((StatusCode::OK, Json(report)))
}
