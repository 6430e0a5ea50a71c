//! Request context carrying the authenticated user.

use nestor_core::types::UserId;
use nestor_entity::user::User;

/// Context for the current authenticated request.
///
/// Built after the bearer token has been resolved and passed into service
/// methods so that every operation knows *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The username at the time the token was resolved.
    pub username: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, username: String) -> Self {
        Self { user_id, username }
    }
}

impl From<&User> for RequestContext {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.username.clone())
    }
}
