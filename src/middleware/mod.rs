use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::{Error, Result};

/// Requester identity resolved from the `user_id` cookie. How the cookie got
/// there is the session layer's business; absence just means an anonymous
/// visitor.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Option<Uuid>);

impl CurrentUser {
    pub fn id(&self) -> Option<Uuid> {
        self.0
    }

    /// Mutating endpoints need a requester to check ownership against.
    pub fn require(&self) -> Result<Uuid> {
        self.0.ok_or(Error::Unauthorized)
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> core::result::Result<Self, Self::Rejection> {
        let cookies = CookieJar::from_headers(&parts.headers);
        let user_id = cookies
            .get("user_id")
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        Ok(CurrentUser(user_id))
    }
}
