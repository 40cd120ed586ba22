#![forbid(unsafe_code)]

pub mod demo;
pub mod remote;
pub mod repository;

pub use remote::{RemoteConfig, RemoteInitError, RemoteRepository};
pub use repository::{
    InMemoryRepository, LessonRepository, Storage, StorageError, UserRepository,
    VocabularyRepository,
};
