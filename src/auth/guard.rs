//! The ownership check applied before every read or mutation of a stored
//! resource.

use crate::{Error, models::UserId};

/// Decide whether `requester` may act on a resource owned by `owner`.
///
/// Pure comparison, no I/O. The requester id always comes from the verified
/// bearer token and the owner id from the stored record; ids claimed inside
/// request payloads are never passed here.
///
/// # Errors
/// Returns [Error::NotAuthorized] when the ids differ. Callers map this to
/// HTTP 403, never to 404: "it exists but is not yours" and "it does not
/// exist" stay distinct.
pub fn authorize_owner(requester: UserId, owner: UserId) -> Result<(), Error> {
    if requester == owner {
        Ok(())
    } else {
        Err(Error::NotAuthorized(requester))
    }
}
