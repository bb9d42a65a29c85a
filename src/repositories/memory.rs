//! In-memory implementation of the repository traits, backing the service
//! tests so they run without a Postgres instance. Mirrors the SQL contracts:
//! ordering keys, leaves-first deletes, missing-reference errors.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::categories::Category;
use crate::models::cleanup::{CleanupReport, CleanupScope};
use crate::models::comments::{Comment, CommentWithAuthor};
use crate::models::posts::{HomePost, Post, PostDetail, PostImage};
use crate::models::users::{User, UserRole, UserStatus};
use crate::repositories::categories_repo::CategoriesRepository;
use crate::repositories::cleanup_repo::CleanupRepository;
use crate::repositories::comments_repo::CommentsRepository;
use crate::repositories::posts_repo::PostsRepository;
use crate::repositories::users_repo::UsersRepository;
use crate::{Error, Result};

#[derive(Default)]
struct Store {
    users: HashMap<Uuid, User>,
    categories: HashMap<Uuid, Category>,
    posts: HashMap<Uuid, Post>,
    comments: HashMap<Uuid, Comment>,
    images: HashMap<Uuid, PostImage>,
}

#[derive(Default)]
pub struct InMemoryRepo {
    store: Mutex<Store>,
}

fn user_is_marked(user: &User, scope: &CleanupScope) -> bool {
    user.login_id.starts_with(&scope.login_prefix)
        || user.nickname.starts_with(&scope.nickname_prefix)
        || (user.email.starts_with(&scope.email_prefix)
            && user.email.ends_with(&scope.email_suffix))
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_image(&self, post_id: Uuid) -> Uuid {
        let id = Uuid::now_v7();
        let image = PostImage {
            id,
            post_id,
            file_url: format!("/files/{id}.webp"),
        };
        self.store.lock().unwrap().images.insert(id, image);
        id
    }

    pub fn image_count(&self, post_id: Uuid) -> usize {
        self.store
            .lock()
            .unwrap()
            .images
            .values()
            .filter(|i| i.post_id == post_id)
            .count()
    }

    /// (posts, comments, categories, users) still carrying the marker prefix.
    pub fn marked_counts(&self, scope: &CleanupScope) -> (usize, usize, usize, usize) {
        let store = self.store.lock().unwrap();
        let posts = store
            .posts
            .values()
            .filter(|p| p.title.starts_with(&scope.content_prefix))
            .count();
        let comments = store
            .comments
            .values()
            .filter(|c| {
                c.content.starts_with(&scope.content_prefix)
                    || store
                        .posts
                        .get(&c.post_id)
                        .is_some_and(|p| p.title.starts_with(&scope.content_prefix))
            })
            .count();
        let categories = store
            .categories
            .values()
            .filter(|c| c.name.starts_with(&scope.content_prefix))
            .count();
        let users = store
            .users
            .values()
            .filter(|u| user_is_marked(u, scope))
            .count();
        (posts, comments, categories, users)
    }
}

#[async_trait]
impl UsersRepository for InMemoryRepo {
    async fn insert_user(
        &self,
        login_id: &str,
        password_hash: &str,
        email: &str,
        nickname: &str,
        role: UserRole,
        status: UserStatus,
    ) -> Result<User> {
        let mut store = self.store.lock().unwrap();
        if store
            .users
            .values()
            .any(|u| u.login_id == login_id || u.email == email)
        {
            return Err(Error::BadRequest(
                "Login id or email already exists".to_string(),
            ));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            login_id: login_id.to_string(),
            password: password_hash.to_string(),
            email: email.to_string(),
            nickname: nickname.to_string(),
            role,
            status,
            created_at: now,
            updated_at: now,
        };
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(self.store.lock().unwrap().users.get(&user_id).cloned())
    }

    async fn find_by_login_or_email(&self, login_id: &str, email: &str) -> Result<Option<User>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.login_id == login_id || u.email == email)
            .cloned())
    }
}

#[async_trait]
impl CategoriesRepository for InMemoryRepo {
    async fn insert_category(&self, name: &str, is_active: bool) -> Result<Category> {
        let category = Category {
            id: Uuid::now_v7(),
            name: name.to_string(),
            is_active,
        };
        self.store
            .lock()
            .unwrap()
            .categories
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_category(&self, category_id: Uuid) -> Result<Option<Category>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .categories
            .get(&category_id)
            .cloned())
    }

    async fn posts_in_category(&self, category_id: Uuid) -> Result<i64> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .posts
            .values()
            .filter(|p| p.category_id == category_id)
            .count() as i64)
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<()> {
        self.store.lock().unwrap().categories.remove(&category_id);
        Ok(())
    }
}

#[async_trait]
impl PostsRepository for InMemoryRepo {
    async fn insert_post(
        &self,
        user_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Post> {
        let mut store = self.store.lock().unwrap();
        if !store.users.contains_key(&user_id) || !store.categories.contains_key(&category_id) {
            return Err(Error::NotFound);
        }
        let now = Utc::now();
        let post = Post {
            id: Uuid::now_v7(),
            user_id,
            category_id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        Ok(self.store.lock().unwrap().posts.get(&post_id).cloned())
    }

    async fn find_post_detail(&self, post_id: Uuid) -> Result<Option<PostDetail>> {
        let store = self.store.lock().unwrap();
        let Some(post) = store.posts.get(&post_id) else {
            return Ok(None);
        };
        let author = store.users.get(&post.user_id).ok_or(Error::NotFound)?;
        let category = store
            .categories
            .get(&post.category_id)
            .ok_or(Error::NotFound)?;
        Ok(Some(PostDetail {
            id: post.id,
            title: post.title.clone(),
            description: post.description.clone(),
            author_id: author.id,
            author_nickname: author.nickname.clone(),
            category_id: category.id,
            category_name: category.name.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }))
    }

    async fn post_exists(&self, post_id: Uuid) -> Result<bool> {
        Ok(self.store.lock().unwrap().posts.contains_key(&post_id))
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        category_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        if !store.categories.contains_key(&category_id) {
            return Err(Error::NotFound);
        }
        if let Some(post) = store.posts.get_mut(&post_id) {
            post.category_id = category_id;
            post.title = title.to_string();
            post.description = description.to_string();
            post.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_post_tree(&self, post_id: Uuid) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        store.images.retain(|_, i| i.post_id != post_id);
        store.comments.retain(|_, c| c.post_id != post_id);
        store.posts.remove(&post_id);
        Ok(())
    }

    async fn home_page(
        &self,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<HomePost>, i64)> {
        let store = self.store.lock().unwrap();
        let mut rows: Vec<&Post> = store
            .posts
            .values()
            .filter(|p| match category {
                Some(name) => store
                    .categories
                    .get(&p.category_id)
                    .is_some_and(|c| c.name == name),
                None => true,
            })
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        let total = rows.len() as i64;

        let page: Vec<HomePost> = rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|p| {
                let nickname = store
                    .users
                    .get(&p.user_id)
                    .map(|u| u.nickname.clone())
                    .unwrap_or_default();
                let category_name = store
                    .categories
                    .get(&p.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                HomePost {
                    id: p.id,
                    title: p.title.clone(),
                    description: p.description.clone(),
                    category_name,
                    author_nickname: nickname,
                    created_at: p.created_at,
                }
            })
            .collect();

        Ok((page, total))
    }
}

#[async_trait]
impl CommentsRepository for InMemoryRepo {
    async fn insert_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let mut store = self.store.lock().unwrap();
        if !store.posts.contains_key(&post_id) || !store.users.contains_key(&user_id) {
            return Err(Error::NotFound);
        }
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::now_v7(),
            user_id,
            post_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        store.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>> {
        Ok(self.store.lock().unwrap().comments.get(&comment_id).cloned())
    }

    async fn comment_exists(&self, comment_id: Uuid) -> Result<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .comments
            .contains_key(&comment_id))
    }

    async fn update_comment_content(&self, comment_id: Uuid, content: &str) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        if let Some(comment) = store.comments.get_mut(&comment_id) {
            comment.content = content.to_string();
            comment.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<()> {
        self.store.lock().unwrap().comments.remove(&comment_id);
        Ok(())
    }

    async fn comments_page(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CommentWithAuthor>, i64)> {
        let store = self.store.lock().unwrap();
        let mut rows: Vec<&Comment> = store
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .collect();
        rows.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        let total = rows.len() as i64;

        let page: Vec<CommentWithAuthor> = rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|c| {
                let nickname = store
                    .users
                    .get(&c.user_id)
                    .map(|u| u.nickname.clone())
                    .unwrap_or_default();
                CommentWithAuthor {
                    id: c.id,
                    post_id: c.post_id,
                    author_id: c.user_id,
                    author_nickname: nickname,
                    content: c.content.clone(),
                    created_at: c.created_at,
                }
            })
            .collect();

        Ok((page, total))
    }
}

#[async_trait]
impl CleanupRepository for InMemoryRepo {
    async fn delete_marked(&self, scope: &CleanupScope) -> Result<CleanupReport> {
        let mut store = self.store.lock().unwrap();
        let mut report = CleanupReport::default();

        let marked_posts: Vec<Uuid> = store
            .posts
            .values()
            .filter(|p| p.title.starts_with(&scope.content_prefix))
            .map(|p| p.id)
            .collect();

        let before = store.images.len();
        store
            .images
            .retain(|_, i| !marked_posts.contains(&i.post_id));
        report.images = (before - store.images.len()) as u64;

        let before = store.comments.len();
        store
            .comments
            .retain(|_, c| !marked_posts.contains(&c.post_id));
        report.comments_by_post = (before - store.comments.len()) as u64;

        let before = store.posts.len();
        store.posts.retain(|id, _| !marked_posts.contains(id));
        report.posts = (before - store.posts.len()) as u64;

        let before = store.comments.len();
        store
            .comments
            .retain(|_, c| !c.content.starts_with(&scope.content_prefix));
        report.comments_by_content = (before - store.comments.len()) as u64;

        let before = store.categories.len();
        store
            .categories
            .retain(|_, c| !c.name.starts_with(&scope.content_prefix));
        report.categories = (before - store.categories.len()) as u64;

        let before = store.users.len();
        store.users.retain(|_, u| !user_is_marked(u, scope));
        report.users = (before - store.users.len()) as u64;

        Ok(report)
    }
}
