pub mod categories;
pub mod cleanup;
pub mod comments;
pub mod posts;
pub mod users;
