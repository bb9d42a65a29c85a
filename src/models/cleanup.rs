use serde::Serialize;

/// Prefixes identifying rows created by the dummy-data generator.
#[derive(Debug, Clone)]
pub struct CleanupScope {
    pub content_prefix: String,
    pub login_prefix: String,
    pub nickname_prefix: String,
    pub email_prefix: String,
    /// Anchors the email match (`dummy_…@test.com`) so a real address that
    /// merely starts with the prefix is never swept.
    pub email_suffix: String,
}

/// Rows removed by one cleanup run, per deletion step.
#[derive(Debug, Default, Serialize, Clone)]
pub struct CleanupReport {
    pub images: u64,
    #[serde(rename = "commentsByPost")]
    pub comments_by_post: u64,
    pub posts: u64,
    #[serde(rename = "commentsByContent")]
    pub comments_by_content: u64,
    pub categories: u64,
    pub users: u64,
}

impl CleanupReport {
    pub fn total(&self) -> u64 {
        self.images
            + self.comments_by_post
            + self.posts
            + self.comments_by_content
            + self.categories
            + self.users
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct DummySummary {
    pub users: u32,
    pub categories: u32,
    pub posts: u32,
    pub comments: u32,
}
