//! User authentication and resource ownership.
//!
//! Authentication (signup, login, bearer tokens) happens at the edge; the
//! rest of the application only ever sees the [AuthenticatedUser] id. The
//! [authorize_owner] guard is the single place that decides whether that id
//! may touch a stored resource.

mod extractor;
mod guard;
mod log_in;
mod register;
mod token;

pub use extractor::AuthenticatedUser;
pub use guard::authorize_owner;
pub use log_in::{Credentials, log_in};
pub use register::{RegistrationPayload, register_user};
pub use token::{Claims, TOKEN_DURATION, decode_token, encode_token};
