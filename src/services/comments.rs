use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::{comments::CommentView, page::Page},
    repositories::{comments_repo::CommentsRepository, posts_repo::PostsRepository},
    Error, Result,
};

/// Comment lifecycle: author-checked edit/delete and the conversational
/// (oldest-first) paging used under a post.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentsRepository>,
    posts: Arc<dyn PostsRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentsRepository>, posts: Arc<dyn PostsRepository>) -> Self {
        Self { comments, posts }
    }

    pub async fn create_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Uuid> {
        if !self.posts.post_exists(post_id).await? {
            return Err(Error::NotFound);
        }

        let comment = self.comments.insert_comment(post_id, user_id, content).await?;
        Ok(comment.id)
    }

    pub async fn edit_comment(
        &self,
        comment_id: Uuid,
        requester_id: Uuid,
        new_content: &str,
    ) -> Result<()> {
        let comment = self
            .comments
            .find_comment(comment_id)
            .await?
            .ok_or(Error::NotFound)?;
        if comment.user_id != requester_id {
            return Err(Error::Forbidden);
        }

        self.comments
            .update_comment_content(comment_id, new_content)
            .await
    }

    pub async fn delete_comment(&self, comment_id: Uuid, requester_id: Uuid) -> Result<()> {
        let comment = self
            .comments
            .find_comment(comment_id)
            .await?
            .ok_or(Error::NotFound)?;
        if comment.user_id != requester_id {
            return Err(Error::Forbidden);
        }

        self.comments.delete_comment(comment_id).await
    }

    /// The requester only affects the `editable` annotation on each row,
    /// never which rows are visible.
    pub async fn get_comments_page(
        &self,
        post_id: Uuid,
        page: u32,
        size: u32,
        requester_id: Option<Uuid>,
    ) -> Result<Page<CommentView>> {
        let size = size.max(1);
        let limit = i64::from(size);
        let offset = i64::from(page) * limit;

        let (rows, total) = self.comments.comments_page(post_id, limit, offset).await?;
        let views = rows
            .into_iter()
            .map(|row| CommentView::from_row(row, requester_id))
            .collect();

        Ok(Page::new(views, page, size, total))
    }
}
