//! Conversion of raw platform responses.

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::models::{largest_candidate, ImageCandidate, Media, User};

/// Status string the platform returns on success.
pub const STATUS_OK: &str = "ok";

/// A feed item as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    /// Platform media id
    pub id: String,
    /// Likes at fetch time
    pub like_count: u64,
    /// Caption creation time, seconds since the Unix epoch
    pub taken_at: i64,
    /// Available renditions, empty for videos
    pub candidates: Vec<ImageCandidate>,
}

/// Fail unless the platform reported success.
pub fn check_status(status: &str) -> SessionResult<()> {
    if status == STATUS_OK {
        Ok(())
    } else {
        Err(SessionError::InvalidResponseStatus(status.to_string()))
    }
}

/// Strip the query string (and with it any access token) from a media URL.
pub fn clean_media_url(raw: &str) -> SessionResult<String> {
    let mut url = Url::parse(raw).map_err(|err| SessionError::InvalidUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    url.set_query(None);
    Ok(url.into())
}

/// Turn a feed item into a [`Media`] record for `user`.
///
/// Items without image renditions yield `None`. The largest rendition is
/// kept and its URL cleaned.
pub fn build_media(user: &User, post: &RawPost) -> SessionResult<Option<Media>> {
    let Some(candidate) = largest_candidate(&post.candidates) else {
        return Ok(None);
    };

    Ok(Some(Media {
        id: post.id.clone(),
        url: clean_media_url(&candidate.url)?,
        user_id: user.id,
        username: user.name.clone(),
        like_count: post.like_count,
        posted_at: DateTime::<Utc>::from_timestamp(post.taken_at, 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
    }))
}
