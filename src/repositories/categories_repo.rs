use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::categories::Category, Result};

use super::PostgresRepo;

#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    async fn insert_category(&self, name: &str, is_active: bool) -> Result<Category>;
    async fn find_category(&self, category_id: Uuid) -> Result<Option<Category>>;
    async fn posts_in_category(&self, category_id: Uuid) -> Result<i64>;
    async fn delete_category(&self, category_id: Uuid) -> Result<()>;
}

#[async_trait]
impl CategoriesRepository for PostgresRepo {
    async fn insert_category(&self, name: &str, is_active: bool) -> Result<Category> {
        let id = Uuid::now_v7();

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, name, is_active
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_category(&self, category_id: Uuid) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn posts_in_category(&self, category_id: Uuid) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM posts WHERE category_id = $1"#)
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
