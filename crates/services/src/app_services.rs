use std::sync::Arc;

use storage::demo::{demo_storage, seed_demo};
use storage::remote::RemoteConfig;
use storage::repository::Storage;
use tracing::info;

use crate::error::AppServicesError;
use crate::lesson_service::LessonService;
use crate::sessions::LessonSessionLoader;
use crate::user_service::UserService;
use crate::vocabulary_service::VocabularyService;
use crate::Clock;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    lessons: Arc<LessonService>,
    vocabulary: Arc<VocabularyService>,
    users: Arc<UserService>,
    session_loader: Arc<LessonSessionLoader>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        let lessons = Arc::new(LessonService::new(clock, Arc::clone(&storage.lessons)));
        let vocabulary = Arc::new(VocabularyService::new(
            clock,
            Arc::clone(&storage.vocabulary),
        ));
        let users = Arc::new(UserService::new(Arc::clone(&storage.users)));
        let session_loader = Arc::new(LessonSessionLoader::new(
            clock,
            Arc::clone(&storage.lessons),
            Arc::clone(&storage.vocabulary),
        ));

        Self {
            lessons,
            vocabulary,
            users,
            session_loader,
        }
    }

    /// Build services backed by the remote lesson API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Remote` if the HTTP client cannot be built.
    pub fn new_remote(config: RemoteConfig, clock: Clock) -> Result<Self, AppServicesError> {
        info!(base_url = %config.base_url(), authorized = config.has_token(), "using remote backend");
        let storage = Storage::remote(config)?;
        Ok(Self::new(&storage, clock))
    }

    /// Build services over an in-memory store filled with the demo lessons and accounts.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Seed` if seeding fails.
    pub async fn new_offline_demo(clock: Clock) -> Result<Self, AppServicesError> {
        let storage = demo_storage(clock.now())?;
        seed_demo(&storage, clock.now()).await?;
        info!("using offline demo backend");
        Ok(Self::new(&storage, clock))
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn vocabulary(&self) -> Arc<VocabularyService> {
        Arc::clone(&self.vocabulary)
    }

    #[must_use]
    pub fn users(&self) -> Arc<UserService> {
        Arc::clone(&self.users)
    }

    #[must_use]
    pub fn session_loader(&self) -> Arc<LessonSessionLoader> {
        Arc::clone(&self.session_loader)
    }
}
