//! Social media session adapters and the helpers they share.
//!
//! Platform responses carry a status string and image renditions with
//! tokenised URLs; the helpers here turn them into domain records.

pub mod media;
pub mod memory;

pub use media::{build_media, check_status, clean_media_url, RawPost};
pub use memory::InMemorySession;
