//! Port for the social media platform session.

use async_trait::async_trait;
use std::path::Path;

use crate::domain::errors::SessionResult;
use crate::domain::models::{Media, User, UserDetails};

/// Port for the authenticated social media session
///
/// The session is created by logging in and released with [`close`].
/// Every call either returns domain records or fails with a
/// [`SessionError`](crate::domain::errors::SessionError) describing a
/// transport, authentication or response status problem.
///
/// The strategy core never calls the session; the driver's executor decides
/// which of these operations a chosen strategy needs.
///
/// [`close`]: SocialSession::close
#[async_trait]
pub trait SocialSession: Send + Sync {
    /// Users followed by the logged-in account
    async fn users(&self) -> SessionResult<Vec<User>>;

    /// Followers of `user_id`
    async fn followers(&self, user_id: i64) -> SessionResult<Vec<User>>;

    /// Recent posts of `user`, newest first, with media URLs cleaned
    async fn recent_media(&self, user: &User) -> SessionResult<Vec<Media>>;

    /// Follow `user_id` from the logged-in account
    async fn follow(&self, user_id: i64) -> SessionResult<()>;

    /// Profile details for `user_id`
    async fn user_details(&self, user_id: i64) -> SessionResult<UserDetails>;

    /// Upload the image at `path` with `caption`
    async fn upload_photo(&self, path: &Path, caption: &str) -> SessionResult<()>;

    /// Log out and release the session
    async fn close(&self) -> SessionResult<()>;
}
