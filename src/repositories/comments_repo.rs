use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    models::comments::{Comment, CommentWithAuthor},
    Result,
};

use super::{fk_violation_as_not_found, PostgresRepo};

#[async_trait]
pub trait CommentsRepository: Send + Sync {
    async fn insert_comment(&self, post_id: Uuid, user_id: Uuid, content: &str)
        -> Result<Comment>;
    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>>;
    async fn comment_exists(&self, comment_id: Uuid) -> Result<bool>;
    async fn update_comment_content(&self, comment_id: Uuid, content: &str) -> Result<()>;
    async fn delete_comment(&self, comment_id: Uuid) -> Result<()>;
    /// One page of a post's comments, oldest first. Returns the slice and the
    /// total comment count for the post.
    async fn comments_page(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CommentWithAuthor>, i64)>;
}

#[async_trait]
impl CommentsRepository for PostgresRepo {
    async fn insert_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let id = Uuid::now_v7();

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, user_id, post_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, user_id, post_id, content, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(post_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(fk_violation_as_not_found)?;

        Ok(comment)
    }

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, post_id, content, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn comment_exists(&self, comment_id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (SELECT 1 FROM comments WHERE id = $1)"#,
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_comment_content(&self, comment_id: Uuid, content: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE comments
            SET content = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .bind(content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn comments_page(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CommentWithAuthor>, i64)> {
        let rows = sqlx::query_as::<_, CommentWithAuthor>(
            r#"
            SELECT cm.id, cm.post_id,
                   cm.user_id AS author_id, u.nickname AS author_nickname,
                   cm.content, cm.created_at
            FROM comments cm
            JOIN users u ON u.id = cm.user_id
            WHERE cm.post_id = $1
            ORDER BY cm.created_at ASC, cm.id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(post_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM comments WHERE post_id = $1"#)
                .bind(post_id)
                .fetch_one(&self.pool)
                .await?;

        Ok((rows, total))
    }
}
