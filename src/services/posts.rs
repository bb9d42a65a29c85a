use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::{
        page::Page,
        posts::{HomePost, Post, PostDetail},
    },
    repositories::posts_repo::PostsRepository,
    Error, Result,
};

/// Post lifecycle: creation, display, owner-checked mutation, and the
/// cascading delete of a post's subtree (images and comments go with it).
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostsRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Post> {
        self.repo
            .insert_post(user_id, category_id, title, description)
            .await
    }

    pub async fn get(&self, post_id: Uuid) -> Result<PostDetail> {
        self.repo
            .find_post_detail(post_id)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn update(
        &self,
        post_id: Uuid,
        requester_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<()> {
        let post = self.repo.find_post(post_id).await?.ok_or(Error::NotFound)?;
        if post.user_id != requester_id {
            return Err(Error::Forbidden);
        }

        self.repo
            .update_post(post_id, category_id, title, description)
            .await
    }

    pub async fn delete(&self, post_id: Uuid, requester_id: Uuid) -> Result<()> {
        let post = self.repo.find_post(post_id).await?.ok_or(Error::NotFound)?;
        if post.user_id != requester_id {
            return Err(Error::Forbidden);
        }

        self.repo.delete_post_tree(post_id).await
    }

    pub async fn exists(&self, post_id: Uuid) -> Result<bool> {
        self.repo.post_exists(post_id).await
    }

    /// Home listing, newest first. A missing or blank category means all
    /// posts; page boundaries stay deterministic because the ordering key
    /// (created_at, id) is total.
    pub async fn get_home_posts_by_category(
        &self,
        category: Option<&str>,
        page: u32,
        size: u32,
    ) -> Result<Page<HomePost>> {
        let size = size.max(1);
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        let limit = i64::from(size);
        let offset = i64::from(page) * limit;
        let (rows, total) = self.repo.home_page(category, limit, offset).await?;

        Ok(Page::new(rows, page, size, total))
    }
}
