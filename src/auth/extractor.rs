//! Defines the extractor that turns a bearer token into the requester's
//! user id.

use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{
    AuthKeys,
    auth::decode_token,
    envelope::{Envelope, error_code},
    models::UserId,
};

/// The authenticated requester's user id, extracted from the
/// `Authorization: Bearer` header.
///
/// This is the only source of the requester identity: handlers never read a
/// user id out of a request payload for authorization decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AuthKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| not_authenticated())?;

        let keys = AuthKeys::from_ref(state);
        let claims =
            decode_token(bearer.token(), &keys.decoding).map_err(|_| not_authenticated())?;

        Ok(Self(UserId::new(claims.sub)))
    }
}

fn not_authenticated() -> Response {
    Envelope::failure("Not authenticated", error_code::REJECTED)
        .into_response_with(StatusCode::UNAUTHORIZED)
}
