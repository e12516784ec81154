//! Records exchanged with the social media session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Platform user id
    pub id: i64,
    /// Username (handle)
    pub name: String,
}

impl User {
    /// User with the given id and handle.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Profile details for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    /// Account the details belong to
    pub user: User,
    /// Display name from the profile
    pub real_name: String,
    /// Number of accounts following this user
    pub follower_count: u64,
}

/// A posted image, reduced to the fields the bot ranks on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Platform media id
    pub id: String,
    /// Image URL with any access token removed
    pub url: String,
    /// Id of the posting user
    pub user_id: i64,
    /// Handle of the posting user
    pub username: String,
    /// Likes at fetch time
    pub like_count: u64,
    /// Publication time
    pub posted_at: DateTime<Utc>,
}

/// One rendition of an image offered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCandidate {
    /// Image location
    pub url: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageCandidate {
    /// Pixel count.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Candidate with the largest pixel area. The earliest wins ties.
pub fn largest_candidate(candidates: &[ImageCandidate]) -> Option<&ImageCandidate> {
    candidates.iter().reduce(|best, candidate| {
        if candidate.area() > best.area() {
            candidate
        } else {
            best
        }
    })
}
