use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Comment {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "postId")]
    pub post_id: Uuid,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    #[serde(rename = "postId")]
    pub post_id: Uuid,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
    #[serde(rename = "authorNickname")]
    pub author_nickname: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Comment row annotated with whether the requester may edit it.
#[derive(Debug, Serialize, Clone)]
pub struct CommentView {
    pub id: Uuid,
    #[serde(rename = "postId")]
    pub post_id: Uuid,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
    #[serde(rename = "authorNickname")]
    pub author_nickname: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub editable: bool,
}

impl CommentView {
    pub fn from_row(row: CommentWithAuthor, requester_id: Option<Uuid>) -> Self {
        let editable = requester_id == Some(row.author_id);
        CommentView {
            id: row.id,
            post_id: row.post_id,
            author_id: row.author_id,
            author_nickname: row.author_nickname,
            content: row.content,
            created_at: row.created_at,
            editable,
        }
    }
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentDto {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Content must be between 1 and 1000 characters"
    ))]
    pub content: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentDto {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Content must be between 1 and 1000 characters"
    ))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedCommentDto {
    #[serde(rename = "commentId")]
    pub comment_id: Uuid,
}
