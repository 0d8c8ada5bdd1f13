//! Request identity extraction.
//!
//! The service sits behind the cooperative's identity provider, which
//! authenticates the browser session and forwards the resolved user id
//! in the `x-user-id` header. A missing or malformed header is treated
//! as "no session"; every mutating cart operation refuses before
//! touching the database.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::domain::cart::{CartError, UserId};
use crate::infra::ClientError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user on whose behalf a request runs.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ClientError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(CartError::NotAuthenticated)?;

        let user_id = header
            .to_str()
            .ok()
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(UserId::from)
            .ok_or(CartError::NotAuthenticated)?;

        Ok(CurrentUser(user_id))
    }
}
