use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Category name must be between 1 and 50 characters"
    ))]
    pub name: String,
}
