use sqlx::PgPool;

use crate::Error;

pub mod categories_repo;
pub mod cleanup_repo;
pub mod comments_repo;
pub mod posts_repo;
pub mod users_repo;

#[cfg(test)]
pub mod memory;

#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Postgres class 23503: the insert referenced a row that does not exist.
pub(crate) fn fk_violation_as_not_found(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some("23503") {
            return Error::NotFound;
        }
    }
    err.into()
}

/// Postgres class 23505: unique constraint hit on insert.
pub(crate) fn unique_violation_as_bad_request(err: sqlx::Error, message: &str) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            return Error::BadRequest(message.to_string());
        }
    }
    err.into()
}
