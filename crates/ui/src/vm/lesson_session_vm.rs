use kotoba_core::model::LessonId;
use services::{CompletionSink, LessonSessionController, LessonSessionLoader, SessionProgress};

use crate::views::ViewError;
use crate::vm::VocabularyCardVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    Next,
    Previous,
    Complete,
}

/// Learner-facing wrapper around a running lesson session.
pub struct LessonSessionVm {
    controller: LessonSessionController,
}

impl LessonSessionVm {
    #[must_use]
    pub fn new(controller: LessonSessionController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn lesson_title(&self) -> Option<String> {
        self.controller
            .lesson()
            .map(|lesson| format!("Lesson {}: {}", lesson.number(), lesson.name()))
    }

    #[must_use]
    pub fn card(&self) -> Option<VocabularyCardVm> {
        self.controller.current().ok().map(VocabularyCardVm::from)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.controller.progress()
    }

    /// Apply a learner action; returns `true` when it finished the lesson.
    pub fn apply(&mut self, intent: LessonIntent) -> bool {
        // Empty lessons are turned into an error before a vm exists, so the
        // navigation results below always carry a card.
        match intent {
            LessonIntent::Next => {
                self.controller.next().ok();
                false
            }
            LessonIntent::Previous => {
                self.controller.previous().ok();
                false
            }
            LessonIntent::Complete => self.controller.complete(),
        }
    }
}

/// Fetch a lesson and start a session on it that reports completion to `sink`.
///
/// # Errors
///
/// Returns `ViewError::NotFound` for unknown lessons, `ViewError::EmptySession`
/// when the lesson has no vocabulary and `ViewError::Unknown` otherwise.
pub async fn open_lesson_session(
    loader: &LessonSessionLoader,
    lesson_id: &LessonId,
    sink: impl CompletionSink + 'static,
) -> Result<LessonSessionVm, ViewError> {
    let controller = loader.open(lesson_id, sink).await?;
    if controller.is_empty() {
        return Err(ViewError::EmptySession);
    }
    Ok(LessonSessionVm::new(controller))
}
