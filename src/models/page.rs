use serde::Serialize;

/// One page of an ordered listing: the slice itself plus enough metadata for
/// the caller to keep paging (total count and whether a next page exists).
#[derive(Debug, Serialize, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: i64,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: i64) -> Self {
        let has_next = (i64::from(page) + 1) * i64::from(size) < total_elements;
        Page {
            content,
            page,
            size,
            total_elements,
            has_next,
        }
    }
}
