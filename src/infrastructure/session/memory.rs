//! Fixture-backed session.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::media::{build_media, check_status, RawPost, STATUS_OK};
use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::models::{Media, User, UserDetails};
use crate::domain::ports::SocialSession;

#[derive(Debug, Default)]
struct SessionState {
    closed: bool,
    followed: Vec<i64>,
    uploads: Vec<(PathBuf, String)>,
}

/// In-process session backed by fixture data.
///
/// Every call first checks the configured response status, so a non-`ok`
/// status makes the whole session fail the way a rejecting platform would.
#[derive(Debug)]
pub struct InMemorySession {
    account: User,
    following: Vec<User>,
    followers: HashMap<i64, Vec<User>>,
    posts: HashMap<i64, Vec<RawPost>>,
    details: HashMap<i64, UserDetails>,
    response_status: String,
    state: Mutex<SessionState>,
}

impl InMemorySession {
    /// Log in as `account`.
    pub fn login(account: User) -> Self {
        info!(user = %account.name, "session opened");
        Self {
            account,
            following: Vec::new(),
            followers: HashMap::new(),
            posts: HashMap::new(),
            details: HashMap::new(),
            response_status: STATUS_OK.to_string(),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Accounts the logged-in user follows.
    #[must_use]
    pub fn with_following(mut self, users: Vec<User>) -> Self {
        self.following = users;
        self
    }

    /// Followers of `user_id`.
    #[must_use]
    pub fn with_followers(mut self, user_id: i64, users: Vec<User>) -> Self {
        self.followers.insert(user_id, users);
        self
    }

    /// Feed of `user_id`.
    #[must_use]
    pub fn with_posts(mut self, user_id: i64, posts: Vec<RawPost>) -> Self {
        self.posts.insert(user_id, posts);
        self
    }

    /// Profile returned for the details' user.
    #[must_use]
    pub fn with_details(mut self, details: UserDetails) -> Self {
        self.details.insert(details.user.id, details);
        self
    }

    /// Status string every response reports.
    #[must_use]
    pub fn with_response_status(mut self, status: impl Into<String>) -> Self {
        self.response_status = status.into();
        self
    }

    /// Logged-in account.
    pub fn account(&self) -> &User {
        &self.account
    }

    /// Users followed through this session, in call order.
    pub async fn followed(&self) -> Vec<i64> {
        self.state.lock().await.followed.clone()
    }

    /// Uploaded `(path, caption)` pairs, in call order.
    pub async fn uploads(&self) -> Vec<(PathBuf, String)> {
        self.state.lock().await.uploads.clone()
    }

    async fn ensure_open(&self) -> SessionResult<()> {
        if self.state.lock().await.closed {
            return Err(SessionError::Authentication("session is closed".to_string()));
        }
        check_status(&self.response_status)
    }
}

#[async_trait]
impl SocialSession for InMemorySession {
    async fn users(&self) -> SessionResult<Vec<User>> {
        self.ensure_open().await?;
        Ok(self.following.clone())
    }

    async fn followers(&self, user_id: i64) -> SessionResult<Vec<User>> {
        self.ensure_open().await?;
        Ok(self.followers.get(&user_id).cloned().unwrap_or_default())
    }

    async fn recent_media(&self, user: &User) -> SessionResult<Vec<Media>> {
        self.ensure_open().await?;
        let posts = self.posts.get(&user.id).map(Vec::as_slice).unwrap_or_default();

        let mut media = Vec::with_capacity(posts.len());
        for post in posts {
            if let Some(item) = build_media(user, post)? {
                media.push(item);
            }
        }
        debug!(user = %user.name, count = media.len(), "fetched recent media");
        Ok(media)
    }

    async fn follow(&self, user_id: i64) -> SessionResult<()> {
        self.ensure_open().await?;
        self.state.lock().await.followed.push(user_id);
        debug!(user_id, "followed user");
        Ok(())
    }

    async fn user_details(&self, user_id: i64) -> SessionResult<UserDetails> {
        self.ensure_open().await?;
        self.details
            .get(&user_id)
            .cloned()
            .ok_or(SessionError::NotFound(user_id))
    }

    async fn upload_photo(&self, path: &Path, caption: &str) -> SessionResult<()> {
        self.ensure_open().await?;
        self.state
            .lock()
            .await
            .uploads
            .push((path.to_path_buf(), caption.to_string()));
        debug!(path = %path.display(), "uploaded photo");
        Ok(())
    }

    async fn close(&self) -> SessionResult<()> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(SessionError::Authentication("session is closed".to_string()));
        }
        state.closed = true;
        info!(user = %self.account.name, "session closed");
        Ok(())
    }
}
