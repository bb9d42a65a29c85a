use async_trait::async_trait;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    models::cleanup::{CleanupReport, CleanupScope},
    Result,
};

use super::PostgresRepo;

#[async_trait]
pub trait CleanupRepository: Send + Sync {
    /// Removes every row matching the scope's marker prefixes in one
    /// transaction, leaves first: post_images, comments of marked posts,
    /// posts, stray comments matched by content, categories, users.
    async fn delete_marked(&self, scope: &CleanupScope) -> Result<CleanupReport>;
}

fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

fn prefix_pattern(prefix: &str) -> String {
    format!("{}%", escape_like(prefix))
}

fn email_pattern(scope: &CleanupScope) -> String {
    format!(
        "{}%{}",
        escape_like(&scope.email_prefix),
        escape_like(&scope.email_suffix)
    )
}

#[async_trait]
impl CleanupRepository for PostgresRepo {
    #[instrument(skip(self))]
    async fn delete_marked(&self, scope: &CleanupScope) -> Result<CleanupReport> {
        let mut report = CleanupReport::default();
        let mut tx = self.pool.begin().await?;

        // Marked post ids first: the child deletes key off them.
        let post_ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM posts WHERE title LIKE $1")
                .bind(prefix_pattern(&scope.content_prefix))
                .fetch_all(&mut *tx)
                .await?;
        info!(marked_posts = post_ids.len(), "cleanup scan");

        if !post_ids.is_empty() {
            report.images = sqlx::query("DELETE FROM post_images WHERE post_id = ANY($1)")
                .bind(&post_ids)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            info!(deleted = report.images, "cleanup: post_images");

            report.comments_by_post = sqlx::query("DELETE FROM comments WHERE post_id = ANY($1)")
                .bind(&post_ids)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            info!(deleted = report.comments_by_post, "cleanup: comments by post");

            report.posts = sqlx::query("DELETE FROM posts WHERE id = ANY($1)")
                .bind(&post_ids)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            info!(deleted = report.posts, "cleanup: posts");
        }

        // Safety net: a partial prior cleanup can leave marked comments on
        // unmarked posts, so match them by content as well.
        report.comments_by_content = sqlx::query("DELETE FROM comments WHERE content LIKE $1")
            .bind(prefix_pattern(&scope.content_prefix))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        info!(deleted = report.comments_by_content, "cleanup: comments by content");

        report.categories = sqlx::query("DELETE FROM categories WHERE name LIKE $1")
            .bind(prefix_pattern(&scope.content_prefix))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        info!(deleted = report.categories, "cleanup: categories");

        report.users = sqlx::query(
            "DELETE FROM users WHERE login_id LIKE $1 OR nickname LIKE $2 OR email LIKE $3",
        )
        .bind(prefix_pattern(&scope.login_prefix))
        .bind(prefix_pattern(&scope.nickname_prefix))
        .bind(email_pattern(scope))
        .execute(&mut *tx)
        .await?
        .rows_affected();
        info!(deleted = report.users, "cleanup: users");

        tx.commit().await?;

        Ok(report)
    }
}
