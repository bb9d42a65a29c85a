use serde::{Deserialize, Serialize};

fn default_home_size() -> u32 {
    12
}

fn default_comments_size() -> u32 {
    10
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeQueryDto {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_home_size")]
    pub size: u32,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentsQueryDto {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_comments_size")]
    pub size: u32,
}
