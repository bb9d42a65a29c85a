pub mod categories;
pub mod cleanup;
pub mod comments;
pub mod page;
pub mod posts;
pub mod query;
pub mod response;
pub mod users;
