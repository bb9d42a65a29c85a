use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    models::posts::{HomePost, Post, PostDetail},
    Result,
};

use super::{fk_violation_as_not_found, PostgresRepo};

#[async_trait]
pub trait PostsRepository: Send + Sync {
    async fn insert_post(
        &self,
        user_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Post>;
    async fn find_post(&self, post_id: Uuid) -> Result<Option<Post>>;
    async fn find_post_detail(&self, post_id: Uuid) -> Result<Option<PostDetail>>;
    async fn post_exists(&self, post_id: Uuid) -> Result<bool>;
    async fn update_post(
        &self,
        post_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<()>;
    /// Removes the post and every row it owns, children first, in one
    /// transaction: post_images, then comments, then the post itself.
    async fn delete_post_tree(&self, post_id: Uuid) -> Result<()>;
    /// One page of the home listing, newest first, optionally filtered by
    /// category name. Returns the slice and the total matching row count.
    async fn home_page(
        &self,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<HomePost>, i64)>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn insert_post(
        &self,
        user_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Post> {
        let id = Uuid::now_v7();

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, user_id, category_id, title, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, user_id, category_id, title, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(category_id)
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(fk_violation_as_not_found)?;

        Ok(post)
    }

    async fn find_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, category_id, title, description, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_post_detail(&self, post_id: Uuid) -> Result<Option<PostDetail>> {
        let detail = sqlx::query_as::<_, PostDetail>(
            r#"
            SELECT p.id, p.title, p.description,
                   p.user_id AS author_id, u.nickname AS author_nickname,
                   p.category_id, c.name AS category_name,
                   p.created_at, p.updated_at
            FROM posts p
            JOIN users u ON u.id = p.user_id
            JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    async fn post_exists(&self, post_id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (SELECT 1 FROM posts WHERE id = $1)"#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET category_id = $2, title = $3, description = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .bind(category_id)
        .bind(title)
        .bind(description)
        .execute(&self.pool)
        .await
        .map_err(fk_violation_as_not_found)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_post_tree(&self, post_id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM post_images WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn home_page(
        &self,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<HomePost>, i64)> {
        let rows = sqlx::query_as::<_, HomePost>(
            r#"
            SELECT p.id, p.title, p.description,
                   c.name AS category_name, u.nickname AS author_nickname,
                   p.created_at
            FROM posts p
            JOIN categories c ON c.id = p.category_id
            JOIN users u ON u.id = p.user_id
            WHERE ($1::TEXT IS NULL OR c.name = $1)
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts p
            JOIN categories c ON c.id = p.category_id
            WHERE ($1::TEXT IS NULL OR c.name = $1)
            "#,
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows, total))
    }
}
