use std::sync::Arc;

use config::Config;
use dotenv::dotenv;
use handlers::auth::configure_cors;
use repositories::{
    categories_repo::CategoriesRepository, cleanup_repo::CleanupRepository,
    comments_repo::CommentsRepository, posts_repo::PostsRepository, users_repo::UsersRepository,
    PostgresRepo,
};
use routes::create_routes;
use services::{
    categories::CategoryService, cleanup::CleanupService, comments::CommentService,
    posts::PostService, users::UserService,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing_subscriber::EnvFilter;

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;

pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
    pub users_service: UserService,
    pub categories_service: CategoryService,
    pub posts_service: PostService,
    pub comments_service: CommentService,
    pub cleanup_service: CleanupService,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            tracing::info!("Connection to the database is successful");
            pool
        }
        Err(err) => {
            tracing::error!("Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!().run(&pool).await {
        tracing::error!("Failed to run migrations: {:?}", err);
        std::process::exit(1);
    }

    let repo = PostgresRepo::new(pool.clone());
    let users_repo: Arc<dyn UsersRepository> = Arc::new(repo.clone());
    let categories_repo: Arc<dyn CategoriesRepository> = Arc::new(repo.clone());
    let posts_repo: Arc<dyn PostsRepository> = Arc::new(repo.clone());
    let comments_repo: Arc<dyn CommentsRepository> = Arc::new(repo.clone());
    let cleanup_repo: Arc<dyn CleanupRepository> = Arc::new(repo);

    let users_service = UserService::new(users_repo);
    let categories_service = CategoryService::new(categories_repo.clone());
    let posts_service = PostService::new(posts_repo.clone());
    let comments_service = CommentService::new(comments_repo, posts_repo);
    let cleanup_service = CleanupService::new(
        posts_service.clone(),
        comments_service.clone(),
        users_service.clone(),
        categories_repo,
        cleanup_repo,
    );

    let app_state = AppState {
        db_pool: pool,
        config: config.clone(),
        users_service,
        categories_service,
        posts_service,
        comments_service,
        cleanup_service,
    };

    let app = create_routes(Arc::new(app_state)).layer(configure_cors());

    let listener = tokio::net::TcpListener::bind(format!("[::]:{}", config.port))
        .await
        .unwrap();
    tracing::info!("Listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
