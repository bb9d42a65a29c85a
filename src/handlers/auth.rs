use std::sync::Arc;

use axum::{
    http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use validator::Validate;

use crate::{
    models::users::{FilterUserDto, RegisterUserDto},
    AppState, Result,
};

pub fn auth_handler() -> Router {
    Router::new().route("/register", post(register))
}

pub fn configure_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(new_user): Json<RegisterUserDto>,
) -> Result<impl IntoResponse> {
    new_user.validate()?;

    let user = app_state
        .users_service
        .register(
            &new_user.login_id,
            &new_user.password,
            &new_user.email,
            &new_user.nickname,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(FilterUserDto::filter_user(&user))))
}
