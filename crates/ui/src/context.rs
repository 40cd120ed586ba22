use std::sync::Arc;

use services::{LessonService, LessonSessionLoader, UserService, VocabularyService};

pub trait UiApp: Send + Sync {
    /// Recorded as the author of vocabulary added from the dashboard.
    fn admin_email(&self) -> String;

    fn lessons(&self) -> Arc<LessonService>;
    fn vocabulary(&self) -> Arc<VocabularyService>;
    fn users(&self) -> Arc<UserService>;
    fn session_loader(&self) -> Arc<LessonSessionLoader>;
}

#[derive(Clone)]
pub struct AppContext {
    admin_email: String,

    lessons: Arc<LessonService>,
    vocabulary: Arc<VocabularyService>,
    users: Arc<UserService>,
    session_loader: Arc<LessonSessionLoader>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            admin_email: app.admin_email(),
            lessons: app.lessons(),
            vocabulary: app.vocabulary(),
            users: app.users(),
            session_loader: app.session_loader(),
        }
    }

    #[must_use]
    pub fn admin_email(&self) -> &str {
        &self.admin_email
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
