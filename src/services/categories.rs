use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::categories::Category, repositories::categories_repo::CategoriesRepository, Error,
    Result,
};

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoriesRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoriesRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, name: &str) -> Result<Category> {
        self.repo.insert_category(name, true).await
    }

    /// Deletion is restricted: a category still referenced by posts cannot be
    /// removed, it never cascades or nullifies.
    pub async fn delete(&self, category_id: Uuid) -> Result<()> {
        self.repo
            .find_category(category_id)
            .await?
            .ok_or(Error::NotFound)?;

        let referencing = self.repo.posts_in_category(category_id).await?;
        if referencing > 0 {
            return Err(Error::BadRequest(
                "Category is still referenced by posts".to_string(),
            ));
        }

        self.repo.delete_category(category_id).await
    }
}
