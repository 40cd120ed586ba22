use kotoba_core::model::{Lesson, LessonDraft, VocabularyDraft, VocabularyItem};
use services::{LessonServiceError, StorageError, VocabularyServiceError};

/// Raw text of the lesson form, shared by the add and edit pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonFormVm {
    pub name: String,
    pub number: String,
}

impl LessonFormVm {
    /// # Errors
    ///
    /// Returns a user-facing message when the number is not a whole number.
    pub fn to_draft(&self) -> Result<LessonDraft, String> {
        let number = parse_number(&self.number, "Lesson number")?;
        Ok(LessonDraft::new(self.name.clone(), number))
    }
}

/// Raw text of the vocabulary form, shared by the add and edit pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VocabularyFormVm {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
    pub lesson_no: String,
}

impl VocabularyFormVm {
    /// # Errors
    ///
    /// Returns a user-facing message when the lesson number is not a whole number.
    pub fn to_draft(&self, admin_email: &str) -> Result<VocabularyDraft, String> {
        Ok(VocabularyDraft {
            word: self.word.clone(),
            pronunciation: self.pronunciation.clone(),
            meaning: self.meaning.clone(),
            when_to_say: self.when_to_say.clone(),
            lesson_no: parse_number(&self.lesson_no, "Lesson number")?,
            admin_email: admin_email.to_owned(),
        })
    }
}

impl From<&Lesson> for LessonFormVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            name: lesson.name().to_owned(),
            number: lesson.number().to_string(),
        }
    }
}

impl From<&VocabularyItem> for VocabularyFormVm {
    fn from(item: &VocabularyItem) -> Self {
        Self {
            word: item.word().to_owned(),
            pronunciation: item.pronunciation().to_owned(),
            meaning: item.meaning().to_owned(),
            when_to_say: item.when_to_say().to_owned(),
            lesson_no: item.lesson_no().to_string(),
        }
    }
}

fn parse_number(raw: &str, label: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| format!("{label} must be a whole number"))
}

#[must_use]
pub fn lesson_error_message(err: &LessonServiceError) -> String {
    match err {
        LessonServiceError::Storage(StorageError::Conflict(_)) => {
            "A lesson with this number already exists".to_owned()
        }
        LessonServiceError::Lesson(inner) => capitalize(&inner.to_string()),
        _ => "Could not save the lesson. Please try again.".to_owned(),
    }
}

#[must_use]
pub fn vocabulary_error_message(err: &VocabularyServiceError) -> String {
    match err {
        VocabularyServiceError::Vocabulary(inner) => capitalize(&inner.to_string()),
        _ => "Could not save the vocabulary. Please try again.".to_owned(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
