use async_trait::async_trait;
use kotoba_core::model::{
    Lesson, LessonId, LessonNumber, User, UserId, UserRole, ValidatedLesson, ValidatedVocabulary,
    VocabularyId, VocabularyItem,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::remote::{RemoteConfig, RemoteInitError, RemoteRepository};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("backend responded with status {0}")]
    HttpStatus(u16),
}

/// Repository contract for lessons.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// List all lessons.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError>;

    /// Fetch a lesson by ID.
    ///
    /// Returns `Ok(None)` when the lesson does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend failures.
    async fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError>;

    /// Persist a new lesson; the backend assigns its ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the lesson number is taken.
    async fn insert_lesson(&self, lesson: ValidatedLesson) -> Result<Lesson, StorageError>;

    /// Replace name and number of an existing lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, `StorageError::Conflict` if
    /// the new number belongs to another lesson.
    async fn update_lesson(
        &self,
        id: &LessonId,
        edit: ValidatedLesson,
    ) -> Result<Lesson, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete_lesson(&self, id: &LessonId) -> Result<(), StorageError>;
}

/// Repository contract for vocabulary entries.
#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// List vocabulary in backend order, optionally filtered by lesson number.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_vocabulary(
        &self,
        lesson_no: Option<LessonNumber>,
    ) -> Result<Vec<VocabularyItem>, StorageError>;

    /// Fetch a vocabulary entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend failures.
    async fn get_vocabulary(
        &self,
        id: &VocabularyId,
    ) -> Result<Option<VocabularyItem>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn insert_vocabulary(
        &self,
        item: ValidatedVocabulary,
    ) -> Result<VocabularyItem, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn update_vocabulary(
        &self,
        id: &VocabularyId,
        edit: ValidatedVocabulary,
    ) -> Result<VocabularyItem, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete_vocabulary(&self, id: &VocabularyId) -> Result<(), StorageError>;
}

/// Repository contract for registered accounts.
///
/// Accounts are created by the sign-in flow, so the dashboard only reads them
/// and changes roles.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_users(&self) -> Result<Vec<User>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` for backend failures.
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn update_user_role(&self, id: &UserId, role: UserRole) -> Result<User, StorageError>;
}

/// In-memory repository for tests and the offline demo.
///
/// Lessons are listed by number; vocabulary keeps insertion order, which stands
/// in for the backend's ordering.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    lessons: Arc<Mutex<Vec<Lesson>>>,
    vocabulary: Arc<Mutex<Vec<VocabularyItem>>>,
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a known set of accounts, since nothing here creates them.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            ..Self::default()
        }
    }
}

fn lock_err<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn number_taken(lessons: &[Lesson], number: LessonNumber, except: Option<&LessonId>) -> bool {
    lessons
        .iter()
        .any(|lesson| lesson.number() == number && Some(lesson.id()) != except)
}

#[async_trait]
impl LessonRepository for InMemoryRepository {
    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        let guard = self.lessons.lock().map_err(lock_err)?;
        let mut lessons = guard.clone();
        lessons.sort_by_key(Lesson::number);
        Ok(lessons)
    }

    async fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError> {
        let guard = self.lessons.lock().map_err(lock_err)?;
        Ok(guard.iter().find(|lesson| lesson.id() == id).cloned())
    }

    async fn insert_lesson(&self, lesson: ValidatedLesson) -> Result<Lesson, StorageError> {
        let mut guard = self.lessons.lock().map_err(lock_err)?;
        if number_taken(&guard, lesson.number, None) {
            return Err(StorageError::Conflict(format!(
                "lesson number {} already exists",
                lesson.number
            )));
        }
        let lesson = lesson.assign_id(LessonId::new(uuid::Uuid::new_v4().simple().to_string()));
        guard.push(lesson.clone());
        Ok(lesson)
    }

    async fn update_lesson(
        &self,
        id: &LessonId,
        edit: ValidatedLesson,
    ) -> Result<Lesson, StorageError> {
        let mut guard = self.lessons.lock().map_err(lock_err)?;
        if number_taken(&guard, edit.number, Some(id)) {
            return Err(StorageError::Conflict(format!(
                "lesson number {} already exists",
                edit.number
            )));
        }
        let slot = guard
            .iter_mut()
            .find(|lesson| lesson.id() == id)
            .ok_or(StorageError::NotFound)?;
        *slot = slot.revised(edit);
        Ok(slot.clone())
    }

    async fn delete_lesson(&self, id: &LessonId) -> Result<(), StorageError> {
        let mut guard = self.lessons.lock().map_err(lock_err)?;
        let before = guard.len();
        guard.retain(|lesson| lesson.id() != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl VocabularyRepository for InMemoryRepository {
    async fn list_vocabulary(
        &self,
        lesson_no: Option<LessonNumber>,
    ) -> Result<Vec<VocabularyItem>, StorageError> {
        let guard = self.vocabulary.lock().map_err(lock_err)?;
        Ok(guard
            .iter()
            .filter(|item| lesson_no.is_none_or(|no| item.lesson_no() == no))
            .cloned()
            .collect())
    }

    async fn get_vocabulary(
        &self,
        id: &VocabularyId,
    ) -> Result<Option<VocabularyItem>, StorageError> {
        let guard = self.vocabulary.lock().map_err(lock_err)?;
        Ok(guard.iter().find(|item| item.id() == id).cloned())
    }

    async fn insert_vocabulary(
        &self,
        item: ValidatedVocabulary,
    ) -> Result<VocabularyItem, StorageError> {
        let mut guard = self.vocabulary.lock().map_err(lock_err)?;
        let item = item.assign_id(VocabularyId::new(uuid::Uuid::new_v4().simple().to_string()));
        guard.push(item.clone());
        Ok(item)
    }

    async fn update_vocabulary(
        &self,
        id: &VocabularyId,
        edit: ValidatedVocabulary,
    ) -> Result<VocabularyItem, StorageError> {
        let mut guard = self.vocabulary.lock().map_err(lock_err)?;
        let slot = guard
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(StorageError::NotFound)?;
        *slot = slot.revised(edit);
        Ok(slot.clone())
    }

    async fn delete_vocabulary(&self, id: &VocabularyId) -> Result<(), StorageError> {
        let mut guard = self.vocabulary.lock().map_err(lock_err)?;
        let before = guard.len();
        guard.retain(|item| item.id() != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let guard = self.users.lock().map_err(lock_err)?;
        Ok(guard.clone())
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        let guard = self.users.lock().map_err(lock_err)?;
        Ok(guard.iter().find(|user| user.id() == id).cloned())
    }

    async fn update_user_role(&self, id: &UserId, role: UserRole) -> Result<User, StorageError> {
        let mut guard = self.users.lock().map_err(lock_err)?;
        let slot = guard
            .iter_mut()
            .find(|user| user.id() == id)
            .ok_or(StorageError::NotFound)?;
        *slot = slot.with_role(role);
        Ok(slot.clone())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub lessons: Arc<dyn LessonRepository>,
    pub vocabulary: Arc<dyn VocabularyRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// Share one repository value for every concern.
    #[must_use]
    pub fn from_repository<R>(repo: R) -> Self
    where
        R: LessonRepository + VocabularyRepository + UserRepository + Clone + 'static,
    {
        let lessons: Arc<dyn LessonRepository> = Arc::new(repo.clone());
        let vocabulary: Arc<dyn VocabularyRepository> = Arc::new(repo.clone());
        let users: Arc<dyn UserRepository> = Arc::new(repo);
        Self {
            lessons,
            vocabulary,
            users,
        }
    }

    /// Build a `Storage` backed by the remote HTTP API.
    ///
    /// # Errors
    ///
    /// Returns `RemoteInitError` if the HTTP client cannot be constructed.
    pub fn remote(config: RemoteConfig) -> Result<Self, RemoteInitError> {
        let repo = RemoteRepository::new(config)?;
        Ok(Self::from_repository(repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotoba_core::model::{LessonDraft, VocabularyDraft};
    use kotoba_core::time::fixed_now;

    fn lesson(name: &str, number: i64) -> ValidatedLesson {
        LessonDraft::new(name, number).validate(fixed_now()).unwrap()
    }

    fn vocab(word: &str, lesson_no: i64) -> ValidatedVocabulary {
        VocabularyDraft {
            word: word.into(),
            pronunciation: word.into(),
            meaning: format!("meaning of {word}"),
            when_to_say: "any time".into(),
            lesson_no,
            admin_email: "admin@example.com".into(),
        }
        .validate(fixed_now())
        .unwrap()
    }

    #[tokio::test]
    async fn lessons_are_listed_by_number() {
        let repo = InMemoryRepository::new();
        repo.insert_lesson(lesson("Numbers", 2)).await.unwrap();
        repo.insert_lesson(lesson("Greetings", 1)).await.unwrap();

        let names: Vec<_> = repo
            .list_lessons()
            .await
            .unwrap()
            .iter()
            .map(|l| l.name().to_owned())
            .collect();
        assert_eq!(names, vec!["Greetings", "Numbers"]);
    }

    #[tokio::test]
    async fn duplicate_lesson_number_conflicts() {
        let repo = InMemoryRepository::new();
        repo.insert_lesson(lesson("Greetings", 1)).await.unwrap();

        let err = repo.insert_lesson(lesson("Again", 1)).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_may_keep_own_number_but_not_steal_another() {
        let repo = InMemoryRepository::new();
        let first = repo.insert_lesson(lesson("Greetings", 1)).await.unwrap();
        repo.insert_lesson(lesson("Numbers", 2)).await.unwrap();

        let renamed = repo
            .update_lesson(first.id(), lesson("Hello", 1))
            .await
            .unwrap();
        assert_eq!(renamed.name(), "Hello");

        let err = repo
            .update_lesson(first.id(), lesson("Hello", 2))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn vocabulary_filter_keeps_insertion_order() {
        let repo = InMemoryRepository::new();
        for (word, no) in [("a", 1), ("x", 2), ("b", 1), ("c", 1)] {
            repo.insert_vocabulary(vocab(word, no)).await.unwrap();
        }

        let lesson_one = repo
            .list_vocabulary(Some(LessonNumber::new(1).unwrap()))
            .await
            .unwrap();
        let words: Vec<_> = lesson_one.iter().map(VocabularyItem::word).collect();
        assert_eq!(words, vec!["a", "b", "c"]);

        let all = repo.list_vocabulary(None).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn deleting_missing_entries_reports_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo
            .delete_vocabulary(&VocabularyId::new("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound));

        let err = repo.delete_lesson(&LessonId::new("nope")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn role_update_replaces_only_the_target_user() {
        let user = |id: &str, name: &str| {
            User::from_persisted(
                UserId::new(id),
                name,
                format!("{id}@example.com"),
                UserRole::User,
                fixed_now(),
            )
            .unwrap()
        };
        let repo = InMemoryRepository::with_users(vec![user("u1", "Aiko"), user("u2", "Kenji")]);

        let promoted = repo
            .update_user_role(&UserId::new("u2"), UserRole::Admin)
            .await
            .unwrap();
        assert!(promoted.is_admin());

        let users = repo.list_users().await.unwrap();
        assert!(!users[0].is_admin());
        assert!(users[1].is_admin());

        let err = repo
            .update_user_role(&UserId::new("ghost"), UserRole::Admin)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
