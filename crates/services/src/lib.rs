#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod lesson_service;
pub mod sessions;
pub mod user_service;
pub mod vocabulary_service;

pub use kotoba_core::Clock;
pub use storage::repository::StorageError;
pub use sessions as session;

pub use app_services::AppServices;
pub use error::{
    AppServicesError, LessonServiceError, SessionError, UserServiceError, VocabularyServiceError,
};
pub use lesson_service::LessonService;
pub use user_service::UserService;
pub use vocabulary_service::VocabularyService;

pub use sessions::{
    CompletionSink, LessonBundle, LessonSessionController, LessonSessionLoader, LessonSource,
    SessionProgress,
};
