use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson name cannot be empty")]
    EmptyName,

    #[error("lesson number must be >= 1 (got {0})")]
    InvalidNumber(i64),

    #[error("updated_at is before created_at")]
    InvalidTimeRange,
}

//
// ─── LESSON NUMBER ─────────────────────────────────────────────────────────────
//

/// Position of a lesson in the course. Unique across lessons and always >= 1.
///
/// Vocabulary entries reference their lesson through this number rather than
/// through the lesson id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct LessonNumber(u32);

impl LessonNumber {
    /// # Errors
    ///
    /// Returns `LessonError::InvalidNumber` for zero.
    pub fn new(value: u32) -> Result<Self, LessonError> {
        if value == 0 {
            return Err(LessonError::InvalidNumber(0));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for LessonNumber {
    type Error = LessonError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let raw = u32::try_from(value).map_err(|_| LessonError::InvalidNumber(value))?;
        Self::new(raw)
    }
}

impl From<LessonNumber> for u32 {
    fn from(number: LessonNumber) -> Self {
        number.0
    }
}

impl fmt::Debug for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonNumber({})", self.0)
    }
}

impl fmt::Display for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated lesson input, as submitted from the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDraft {
    pub name: String,
    pub number: i64,
}

impl LessonDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, number: i64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    /// # Errors
    ///
    /// Returns `LessonError` when the name is blank or the number is not >= 1.
    pub fn validate(self, now: DateTime<Utc>) -> Result<ValidatedLesson, LessonError> {
        let name = normalize_name(self.name)?;
        let number = LessonNumber::try_from(self.number)?;
        Ok(ValidatedLesson {
            name,
            number,
            created_at: now,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLesson {
    pub name: String,
    pub number: LessonNumber,
    pub created_at: DateTime<Utc>,
}

impl ValidatedLesson {
    #[must_use]
    pub fn assign_id(self, id: LessonId) -> Lesson {
        Lesson {
            id,
            name: self.name,
            number: self.number,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A named, numbered unit of instructional content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    name: String,
    number: LessonNumber,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Lesson {
    /// Rehydrate a lesson loaded from a backend.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyName` for a blank name and
    /// `LessonError::InvalidTimeRange` when `updated_at` precedes `created_at`.
    pub fn from_persisted(
        id: LessonId,
        name: impl Into<String>,
        number: LessonNumber,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, LessonError> {
        if updated_at < created_at {
            return Err(LessonError::InvalidTimeRange);
        }
        Ok(Self {
            id,
            name: normalize_name(name.into())?,
            number,
            created_at,
            updated_at,
        })
    }

    /// Apply an edit, keeping identity and creation time.
    #[must_use]
    pub fn revised(&self, edit: ValidatedLesson) -> Self {
        Self {
            id: self.id.clone(),
            name: edit.name,
            number: edit.number,
            created_at: self.created_at,
            updated_at: edit.created_at.max(self.created_at),
        }
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn number(&self) -> LessonNumber {
        self.number
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn normalize_name(raw: String) -> Result<String, LessonError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LessonError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn lesson_number_rejects_zero_and_negative() {
        assert_eq!(LessonNumber::new(0).unwrap_err(), LessonError::InvalidNumber(0));
        assert_eq!(
            LessonNumber::try_from(-3).unwrap_err(),
            LessonError::InvalidNumber(-3)
        );
        assert_eq!(LessonNumber::try_from(4).unwrap().value(), 4);
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = LessonDraft::new("   ", 1).validate(fixed_now()).unwrap_err();
        assert_eq!(err, LessonError::EmptyName);
    }

    #[test]
    fn draft_validates_and_assigns_id() {
        let lesson = LessonDraft::new("  Greetings ", 1)
            .validate(fixed_now())
            .unwrap()
            .assign_id(LessonId::new("l-1"));

        assert_eq!(lesson.id(), &LessonId::new("l-1"));
        assert_eq!(lesson.name(), "Greetings");
        assert_eq!(lesson.number().value(), 1);
        assert_eq!(lesson.created_at(), lesson.updated_at());
    }

    #[test]
    fn revised_keeps_identity_and_created_at() {
        let now = fixed_now();
        let lesson = LessonDraft::new("Greetings", 1)
            .validate(now)
            .unwrap()
            .assign_id(LessonId::new("l-1"));
        let later = now + chrono::Duration::hours(2);
        let edit = LessonDraft::new("Numbers", 2).validate(later).unwrap();

        let revised = lesson.revised(edit);
        assert_eq!(revised.id(), lesson.id());
        assert_eq!(revised.name(), "Numbers");
        assert_eq!(revised.number().value(), 2);
        assert_eq!(revised.created_at(), now);
        assert_eq!(revised.updated_at(), later);
    }

    #[test]
    fn from_persisted_rejects_inverted_timestamps() {
        let now = fixed_now();
        let err = Lesson::from_persisted(
            LessonId::new("l-1"),
            "Greetings",
            LessonNumber::new(1).unwrap(),
            now,
            now - chrono::Duration::seconds(1),
        )
        .unwrap_err();
        assert_eq!(err, LessonError::InvalidTimeRange);
    }
}
