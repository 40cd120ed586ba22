use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::VocabularyId;
use crate::model::lesson::{LessonError, LessonNumber};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error("updated_at is before created_at")]
    InvalidTimeRange,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated vocabulary input, as submitted from the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VocabularyDraft {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
    pub lesson_no: i64,
    pub admin_email: String,
}

impl VocabularyDraft {
    /// # Errors
    ///
    /// Returns `VocabularyError::EmptyField` for any blank text field and
    /// `VocabularyError::Lesson` when the lesson number is not >= 1.
    pub fn validate(self, now: DateTime<Utc>) -> Result<ValidatedVocabulary, VocabularyError> {
        Ok(ValidatedVocabulary {
            word: required(self.word, "word")?,
            pronunciation: required(self.pronunciation, "pronunciation")?,
            meaning: required(self.meaning, "meaning")?,
            when_to_say: required(self.when_to_say, "when to say")?,
            lesson_no: LessonNumber::try_from(self.lesson_no)?,
            admin_email: self.admin_email.trim().to_owned(),
            created_at: now,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedVocabulary {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
    pub lesson_no: LessonNumber,
    pub admin_email: String,
    pub created_at: DateTime<Utc>,
}

impl ValidatedVocabulary {
    #[must_use]
    pub fn assign_id(self, id: VocabularyId) -> VocabularyItem {
        VocabularyItem {
            id,
            word: self.word,
            pronunciation: self.pronunciation,
            meaning: self.meaning,
            when_to_say: self.when_to_say,
            lesson_no: self.lesson_no,
            admin_email: self.admin_email,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

//
// ─── VOCABULARY ITEM ───────────────────────────────────────────────────────────
//

/// One flashcard entry belonging to a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyItem {
    id: VocabularyId,
    word: String,
    pronunciation: String,
    meaning: String,
    when_to_say: String,
    lesson_no: LessonNumber,
    admin_email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VocabularyItem {
    /// Rehydrate a vocabulary entry loaded from a backend.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::EmptyField` when the word is blank and
    /// `VocabularyError::InvalidTimeRange` for inverted timestamps.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        id: VocabularyId,
        word: String,
        pronunciation: String,
        meaning: String,
        when_to_say: String,
        lesson_no: LessonNumber,
        admin_email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, VocabularyError> {
        if updated_at < created_at {
            return Err(VocabularyError::InvalidTimeRange);
        }
        // Older backend rows may lack the secondary fields; only the word is load-bearing.
        Ok(Self {
            id,
            word: required(word, "word")?,
            pronunciation: pronunciation.trim().to_owned(),
            meaning: meaning.trim().to_owned(),
            when_to_say: when_to_say.trim().to_owned(),
            lesson_no,
            admin_email: admin_email.trim().to_owned(),
            created_at,
            updated_at,
        })
    }

    /// Apply an edit, keeping identity and creation time.
    #[must_use]
    pub fn revised(&self, edit: ValidatedVocabulary) -> Self {
        Self {
            id: self.id.clone(),
            word: edit.word,
            pronunciation: edit.pronunciation,
            meaning: edit.meaning,
            when_to_say: edit.when_to_say,
            lesson_no: edit.lesson_no,
            admin_email: edit.admin_email,
            created_at: self.created_at,
            updated_at: edit.created_at.max(self.created_at),
        }
    }

    #[must_use]
    pub fn id(&self) -> &VocabularyId {
        &self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// Usage context: when a speaker would say this word.
    #[must_use]
    pub fn when_to_say(&self) -> &str {
        &self.when_to_say
    }

    #[must_use]
    pub fn lesson_no(&self) -> LessonNumber {
        self.lesson_no
    }

    #[must_use]
    pub fn admin_email(&self) -> &str {
        &self.admin_email
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

fn required(raw: String, field: &'static str) -> Result<String, VocabularyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(VocabularyError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
