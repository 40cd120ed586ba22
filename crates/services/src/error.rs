//! Shared error types for the services crate.

use thiserror::Error;

use kotoba_core::model::{LessonError, VocabularyError};
use storage::demo::SeedError;
use storage::remote::RemoteInitError;
use storage::repository::StorageError;

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `VocabularyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyServiceError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `UserService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UserServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the lesson session subsystem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no vocabulary for this lesson")]
    EmptySequence,
    #[error("lesson not found")]
    LessonNotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Remote(#[from] RemoteInitError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}
