use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Post {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "categoryId")]
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Post joined with its author nickname and category name, for the detail view.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
    #[serde(rename = "authorNickname")]
    pub author_nickname: String,
    #[serde(rename = "categoryId")]
    pub category_id: Uuid,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Summary row for the home listing.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct HomePost {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "authorNickname")]
    pub author_nickname: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct PostImage {
    pub id: Uuid,
    #[serde(rename = "postId")]
    pub post_id: Uuid,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostDto {
    #[serde(rename = "categoryId")]
    pub category_id: Uuid,
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostDto {
    #[serde(rename = "categoryId")]
    pub category_id: Uuid,
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct HomePageDto {
    pub username: String,
    pub category: String,
    pub posts: Vec<HomePost>,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    #[serde(rename = "nextPage")]
    pub next_page: u32,
    pub size: u32,
}
