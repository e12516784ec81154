//! Search strategy domain model.
//!
//! A search strategy combines a content selection criterion with the scope
//! it is applied to. The set of strategies is closed: adding a variant forces
//! every match over it to be revisited.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::StrategyParseError;

/// Display name rendered for integer codes outside the strategy set.
pub const INVALID_STRATEGY_NAME: &str = "invalid";

/// How candidate content is ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Prefer media with detected faces
    Faces,
    /// Prefer media with the most likes
    Likes,
    /// Prefer media with the best combined score
    Score,
    /// Pick media uniformly
    Random,
}

impl Criterion {
    /// Lowercase name used in logs and tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faces => "faces",
            Self::Likes => "likes",
            Self::Score => "score",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where candidate content is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The shared pool of everything collected so far
    Global,
    /// The network of one specific user
    User,
}

impl Scope {
    /// Lowercase name used in logs and tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy used by one decision cycle to discover content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Faces, across the global pool
    FacesGlobal,
    /// Most liked, across the global pool
    LikesGlobal,
    /// Best scored, across the global pool
    ScoreGlobal,
    /// Uniform pick, across the global pool
    RandomGlobal,
    /// Faces, within one user's network
    FacesUser,
    /// Most liked, within one user's network
    LikesUser,
    /// Best scored, within one user's network
    ScoreUser,
    /// Uniform pick, within one user's network
    RandomUser,
}

impl SearchStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::FacesGlobal,
        Self::LikesGlobal,
        Self::ScoreGlobal,
        Self::RandomGlobal,
        Self::FacesUser,
        Self::LikesUser,
        Self::ScoreUser,
        Self::RandomUser,
    ];

    /// Build a strategy from its parts.
    pub const fn new(criterion: Criterion, scope: Scope) -> Self {
        match (criterion, scope) {
            (Criterion::Faces, Scope::Global) => Self::FacesGlobal,
            (Criterion::Likes, Scope::Global) => Self::LikesGlobal,
            (Criterion::Score, Scope::Global) => Self::ScoreGlobal,
            (Criterion::Random, Scope::Global) => Self::RandomGlobal,
            (Criterion::Faces, Scope::User) => Self::FacesUser,
            (Criterion::Likes, Scope::User) => Self::LikesUser,
            (Criterion::Score, Scope::User) => Self::ScoreUser,
            (Criterion::Random, Scope::User) => Self::RandomUser,
        }
    }

    /// Ranking half of the strategy.
    pub const fn criterion(&self) -> Criterion {
        match self {
            Self::FacesGlobal | Self::FacesUser => Criterion::Faces,
            Self::LikesGlobal | Self::LikesUser => Criterion::Likes,
            Self::ScoreGlobal | Self::ScoreUser => Criterion::Score,
            Self::RandomGlobal | Self::RandomUser => Criterion::Random,
        }
    }

    /// Scope half of the strategy.
    pub const fn scope(&self) -> Scope {
        match self {
            Self::FacesGlobal | Self::LikesGlobal | Self::ScoreGlobal | Self::RandomGlobal => {
                Scope::Global
            }
            Self::FacesUser | Self::LikesUser | Self::ScoreUser | Self::RandomUser => Scope::User,
        }
    }

    /// Stable diagnostic name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FacesGlobal => "FacesGlobal",
            Self::LikesGlobal => "LikesGlobal",
            Self::ScoreGlobal => "ScoreGlobal",
            Self::RandomGlobal => "RandomGlobal",
            Self::FacesUser => "FacesUser",
            Self::LikesUser => "LikesUser",
            Self::ScoreUser => "ScoreUser",
            Self::RandomUser => "RandomUser",
        }
    }

    /// Integer code of the strategy (its declaration index).
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Strategy for an integer code, if the code is in range.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Display name for an integer code.
    ///
    /// Codes outside the strategy set render as [`INVALID_STRATEGY_NAME`]
    /// instead of failing; such codes only come from programming defects.
    pub fn name_for_code(code: u8) -> &'static str {
        Self::from_code(code).map_or(INVALID_STRATEGY_NAME, |s| s.as_str())
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = StrategyParseError;

    /// Accepts the display name (`FacesGlobal`) or the snake case form
    /// (`faces_global`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().to_lowercase() == normalized)
            .ok_or_else(|| StrategyParseError(s.to_string()))
    }
}
