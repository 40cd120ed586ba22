//! JSON shapes spoken by the remote lesson API.

use chrono::{DateTime, Utc};
use kotoba_core::model::{
    Lesson, LessonId, LessonNumber, User, UserId, UserRole, ValidatedLesson, ValidatedVocabulary,
    VocabularyId, VocabularyItem,
};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// Responses arrive either wrapped as `{ "data": ... }` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } | Payload::Bare(data) => data,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LessonDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub number: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LessonDto {
    pub(crate) fn into_lesson(self) -> Result<Lesson, StorageError> {
        let number = LessonNumber::try_from(self.number).map_err(ser)?;
        let created_at = self.created_at.unwrap_or_default();
        let updated_at = self.updated_at.unwrap_or(created_at).max(created_at);
        Lesson::from_persisted(
            LessonId::new(self.id),
            self.name,
            number,
            created_at,
            updated_at,
        )
        .map_err(ser)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VocabularyDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub word: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub when_to_say: String,
    pub lesson_no: i64,
    #[serde(default)]
    pub admin_email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl VocabularyDto {
    pub(crate) fn into_item(self) -> Result<VocabularyItem, StorageError> {
        let lesson_no = LessonNumber::try_from(self.lesson_no).map_err(ser)?;
        let created_at = self.created_at.unwrap_or_default();
        let updated_at = self.updated_at.unwrap_or(created_at).max(created_at);
        VocabularyItem::from_persisted(
            VocabularyId::new(self.id),
            self.word,
            self.pronunciation,
            self.meaning,
            self.when_to_say,
            lesson_no,
            self.admin_email,
            created_at,
            updated_at,
        )
        .map_err(ser)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserDto {
    pub(crate) fn into_user(self) -> Result<User, StorageError> {
        // Accounts created through social sign-in may lack a display name.
        let name = if self.name.trim().is_empty() {
            self.email.clone()
        } else {
            self.name
        };
        User::from_persisted(
            UserId::new(self.id),
            name,
            self.email,
            UserRole::from_wire(&self.role),
            self.created_at.unwrap_or_default(),
        )
        .map_err(ser)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RoleBody {
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
pub(crate) struct LessonBody<'a> {
    pub name: &'a str,
    pub number: u32,
}

impl<'a> From<&'a ValidatedLesson> for LessonBody<'a> {
    fn from(lesson: &'a ValidatedLesson) -> Self {
        Self {
            name: &lesson.name,
            number: lesson.number.value(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VocabularyBody<'a> {
    pub word: &'a str,
    pub pronunciation: &'a str,
    pub meaning: &'a str,
    pub when_to_say: &'a str,
    pub lesson_no: u32,
    pub admin_email: &'a str,
}

impl<'a> From<&'a ValidatedVocabulary> for VocabularyBody<'a> {
    fn from(item: &'a ValidatedVocabulary) -> Self {
        Self {
            word: &item.word,
            pronunciation: &item.pronunciation,
            meaning: &item.meaning,
            when_to_say: &item.when_to_say,
            lesson_no: item.lesson_no.value(),
            admin_email: &item.admin_email,
        }
    }
}

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Map a list payload, failing on the first malformed row.
pub(crate) fn lessons_from_json(bytes: &[u8]) -> Result<Vec<Lesson>, StorageError> {
    let payload: Payload<Vec<LessonDto>> = serde_json::from_slice(bytes).map_err(ser)?;
    payload
        .into_inner()
        .into_iter()
        .map(LessonDto::into_lesson)
        .collect()
}

pub(crate) fn lesson_from_json(bytes: &[u8]) -> Result<Lesson, StorageError> {
    let payload: Payload<LessonDto> = serde_json::from_slice(bytes).map_err(ser)?;
    payload.into_inner().into_lesson()
}

pub(crate) fn vocabulary_from_json(bytes: &[u8]) -> Result<Vec<VocabularyItem>, StorageError> {
    let payload: Payload<Vec<VocabularyDto>> = serde_json::from_slice(bytes).map_err(ser)?;
    payload
        .into_inner()
        .into_iter()
        .map(VocabularyDto::into_item)
        .collect()
}

pub(crate) fn vocabulary_item_from_json(bytes: &[u8]) -> Result<VocabularyItem, StorageError> {
    let payload: Payload<VocabularyDto> = serde_json::from_slice(bytes).map_err(ser)?;
    payload.into_inner().into_item()
}

pub(crate) fn users_from_json(bytes: &[u8]) -> Result<Vec<User>, StorageError> {
    let payload: Payload<Vec<UserDto>> = serde_json::from_slice(bytes).map_err(ser)?;
    payload
        .into_inner()
        .into_iter()
        .map(UserDto::into_user)
        .collect()
}

pub(crate) fn user_from_json(bytes: &[u8]) -> Result<User, StorageError> {
    let payload: Payload<UserDto> = serde_json::from_slice(bytes).map_err(ser)?;
    payload.into_inner().into_user()
}
