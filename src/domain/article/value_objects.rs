// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const TITLE_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// Publication status stored as a small integer. Zero is never persisted:
/// callers that pass `0` or nothing get [`ArticleStatus::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleStatus(i16);

impl ArticleStatus {
    pub const DEFAULT: Self = Self(1);

    pub fn new(value: i16) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::Validation(
                "status must not be negative".into(),
            ));
        }
        Ok(Self::or_default(Some(value)))
    }

    pub fn or_default(value: Option<i16>) -> Self {
        match value {
            Some(v) if v != 0 => Self(v),
            _ => Self::DEFAULT,
        }
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

impl Default for ArticleStatus {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<ArticleStatus> for i16 {
    fn from(value: ArticleStatus) -> Self {
        value.0
    }
}

/// Absolute view counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BrowseCount(i64);

impl BrowseCount {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            Err(DomainError::Validation(
                "browse count must not be negative".into(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<BrowseCount> for i64 {
    fn from(value: BrowseCount) -> Self {
        value.0
    }
}
