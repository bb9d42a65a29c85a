use std::sync::Arc;

use rand::Rng;
use tracing::info;

use crate::{
    models::cleanup::{CleanupReport, CleanupScope, DummySummary},
    repositories::{
        categories_repo::CategoriesRepository, cleanup_repo::CleanupRepository,
        users_repo::UsersRepository,
    },
    services::{comments::CommentService, posts::PostService, users::UserService},
    Result,
};

pub const DUMMY_PREFIX: &str = "[DUMMY]";
pub const DUMMY_LOGIN_PREFIX: &str = "dummy_";
pub const DUMMY_NICK_PREFIX: &str = "dummy_user_";
pub const DUMMY_EMAIL_PREFIX: &str = "dummy_";
pub const DUMMY_EMAIL_DOMAIN: &str = "@test.com";

const DUMMY_CATEGORY_NAMES: [&str; 3] = ["design", "vintage", "kitsch"];

/// Ops tool: seeds marker-prefixed demo content and wipes it again. Every
/// generated row carries a marker prefix so cleanup can find it later, even
/// after a partial manual delete.
#[derive(Clone)]
pub struct CleanupService {
    posts: PostService,
    comments: CommentService,
    users: UserService,
    categories: Arc<dyn CategoriesRepository>,
    cleanup: Arc<dyn CleanupRepository>,
}

impl CleanupService {
    pub fn new(
        posts: PostService,
        comments: CommentService,
        users: UserService,
        categories: Arc<dyn CategoriesRepository>,
        cleanup: Arc<dyn CleanupRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            users,
            categories,
            cleanup,
        }
    }

    pub fn scope() -> CleanupScope {
        CleanupScope {
            content_prefix: DUMMY_PREFIX.to_string(),
            login_prefix: DUMMY_LOGIN_PREFIX.to_string(),
            nickname_prefix: DUMMY_NICK_PREFIX.to_string(),
            email_prefix: DUMMY_EMAIL_PREFIX.to_string(),
            email_suffix: DUMMY_EMAIL_DOMAIN.to_string(),
        }
    }

    /// One marked user, three marked categories, `post_count` marked posts
    /// spread round-robin over the categories, each with 0 to 3 marked
    /// comments.
    pub async fn generate(&self, post_count: u32) -> Result<DummySummary> {
        let stamp = chrono::Utc::now().timestamp_millis();
        let user = self
            .users
            .register(
                &format!("{DUMMY_LOGIN_PREFIX}{stamp}"),
                "1234",
                &format!("{DUMMY_EMAIL_PREFIX}{stamp}{DUMMY_EMAIL_DOMAIN}"),
                &format!("{DUMMY_NICK_PREFIX}{stamp}"),
            )
            .await?;

        let mut categories = Vec::with_capacity(DUMMY_CATEGORY_NAMES.len());
        for name in DUMMY_CATEGORY_NAMES {
            let category = self
                .categories
                .insert_category(&format!("{DUMMY_PREFIX} {name}"), true)
                .await?;
            categories.push(category);
        }

        let mut total_comments = 0;
        for i in 1..=post_count {
            let category = &categories[(i as usize) % categories.len()];
            let post = self
                .posts
                .create(
                    user.id,
                    category.id,
                    &format!("{DUMMY_PREFIX} post {i}"),
                    &format!("{DUMMY_PREFIX} body {i}"),
                )
                .await?;

            let comment_count = rand::thread_rng().gen_range(0..=3u32);
            for c in 1..=comment_count {
                self.comments
                    .create_comment(post.id, user.id, &format!("{DUMMY_PREFIX} comment {c}"))
                    .await?;
                total_comments += 1;
            }
        }

        let summary = DummySummary {
            users: 1,
            categories: categories.len() as u32,
            posts: post_count,
            comments: total_comments,
        };
        info!(posts = summary.posts, comments = summary.comments, "dummy data generated");

        Ok(summary)
    }

    /// Removes all marked content, leaves first. Safe to run repeatedly; the
    /// second run reports zero deletions.
    pub async fn cleanup(&self) -> Result<CleanupReport> {
        let report = self.cleanup.delete_marked(&Self::scope()).await?;
        info!(total = report.total(), "dummy data cleaned up");

        Ok(report)
    }
}
