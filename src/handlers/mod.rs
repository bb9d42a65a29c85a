pub mod auth;
pub mod categories;
pub mod comments;
pub mod home;
pub mod ops;
pub mod posts;
