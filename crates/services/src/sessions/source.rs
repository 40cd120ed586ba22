use std::sync::Arc;

use async_trait::async_trait;
use kotoba_core::model::{Lesson, LessonId, VocabularyItem};
use storage::repository::{LessonRepository, VocabularyRepository};
use tracing::debug;

use super::controller::{CompletionSink, LessonSessionController};
use crate::error::SessionError;
use crate::Clock;

/// A lesson together with its vocabulary in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonBundle {
    pub lesson: Lesson,
    pub vocabulary: Vec<VocabularyItem>,
}

/// Resolves the data a lesson session needs.
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `SessionError::LessonNotFound` for unknown ids and
    /// `SessionError::Storage` when the backend fails.
    async fn fetch(&self, lesson_id: &LessonId) -> Result<LessonBundle, SessionError>;
}

/// Loads lesson bundles from the lesson and vocabulary repositories.
#[derive(Clone)]
pub struct LessonSessionLoader {
    clock: Clock,
    lessons: Arc<dyn LessonRepository>,
    vocabulary: Arc<dyn VocabularyRepository>,
}

impl LessonSessionLoader {
    #[must_use]
    pub fn new(
        clock: Clock,
        lessons: Arc<dyn LessonRepository>,
        vocabulary: Arc<dyn VocabularyRepository>,
    ) -> Self {
        Self {
            clock,
            lessons,
            vocabulary,
        }
    }

    /// Fetch a lesson and hand back a controller already started on it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the lesson cannot be loaded.
    pub async fn open(
        &self,
        lesson_id: &LessonId,
        sink: impl CompletionSink + 'static,
    ) -> Result<LessonSessionController, SessionError> {
        let bundle = self.fetch(lesson_id).await?;
        let mut controller = LessonSessionController::new(self.clock, sink);
        controller.sync(bundle.lesson, bundle.vocabulary);
        Ok(controller)
    }
}

#[async_trait]
impl LessonSource for LessonSessionLoader {
    async fn fetch(&self, lesson_id: &LessonId) -> Result<LessonBundle, SessionError> {
        let lesson = self
            .lessons
            .get_lesson(lesson_id)
            .await?
            .ok_or(SessionError::LessonNotFound)?;
        let vocabulary = self
            .vocabulary
            .list_vocabulary(Some(lesson.number()))
            .await?;
        debug!(
            lesson = %lesson.number(),
            items = vocabulary.len(),
            "fetched lesson bundle"
        );
        Ok(LessonBundle { lesson, vocabulary })
    }
}
