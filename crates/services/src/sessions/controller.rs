use std::fmt;

use kotoba_core::model::{Lesson, LessonCompleted, VocabularyItem};
use tracing::{debug, info};

use super::progress::SessionProgress;
use crate::error::SessionError;
use crate::Clock;

//
// ─── COMPLETION SINK ───────────────────────────────────────────────────────────
//

/// Receives the single completion event of a lesson session.
pub trait CompletionSink {
    fn lesson_completed(&self, event: LessonCompleted);
}

impl<F> CompletionSink for F
where
    F: Fn(LessonCompleted),
{
    fn lesson_completed(&self, event: LessonCompleted) {
        self(event);
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Steps a learner through one lesson's vocabulary, one card at a time.
///
/// Navigation clamps at both ends instead of wrapping. The completion sink
/// fires at most once between two calls to [`start`](Self::start).
pub struct LessonSessionController {
    clock: Clock,
    sink: Box<dyn CompletionSink>,
    lesson: Option<Lesson>,
    sequence: Vec<VocabularyItem>,
    position: usize,
    completion_signaled: bool,
}

impl LessonSessionController {
    #[must_use]
    pub fn new(clock: Clock, sink: impl CompletionSink + 'static) -> Self {
        Self {
            clock,
            sink: Box::new(sink),
            lesson: None,
            sequence: Vec::new(),
            position: 0,
            completion_signaled: false,
        }
    }

    /// Begin a fresh session, discarding any previous position and completion state.
    pub fn start(&mut self, lesson: Lesson, sequence: Vec<VocabularyItem>) {
        debug!(
            lesson = %lesson.number(),
            items = sequence.len(),
            "starting lesson session"
        );
        self.lesson = Some(lesson);
        self.sequence = sequence;
        self.position = 0;
        self.completion_signaled = false;
    }

    /// Restart only when nothing is loaded yet or the lesson number changed.
    ///
    /// Returns `true` if the session was restarted.
    pub fn sync(&mut self, lesson: Lesson, sequence: Vec<VocabularyItem>) -> bool {
        let same_lesson = self
            .lesson
            .as_ref()
            .is_some_and(|current| current.number() == lesson.number());
        if same_lesson {
            return false;
        }
        self.start(lesson, sequence);
        true
    }

    #[must_use]
    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Zero-based position, or `None` when there is nothing to show.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        (!self.sequence.is_empty()).then_some(self.position)
    }

    /// # Errors
    ///
    /// Returns `SessionError::EmptySequence` when the lesson has no vocabulary.
    pub fn current(&self) -> Result<&VocabularyItem, SessionError> {
        self.sequence
            .get(self.position)
            .ok_or(SessionError::EmptySequence)
    }

    /// Advance one item; stays put on the last item.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySequence` when the lesson has no vocabulary.
    pub fn next(&mut self) -> Result<&VocabularyItem, SessionError> {
        if self.position + 1 < self.sequence.len() {
            self.position += 1;
            debug!(position = self.position, "next vocabulary item");
        }
        self.current()
    }

    /// Step back one item; stays put on the first item.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySequence` when the lesson has no vocabulary.
    pub fn previous(&mut self) -> Result<&VocabularyItem, SessionError> {
        if self.position > 0 {
            self.position -= 1;
            debug!(position = self.position, "previous vocabulary item");
        }
        self.current()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        !self.sequence.is_empty() && self.position == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.sequence.is_empty() && self.position == self.sequence.len() - 1
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completion_signaled
    }

    /// Report the session as finished.
    ///
    /// Meant to be called on the last item, but any position is accepted.
    /// Returns `true` only for the call that reached the sink; repeat calls and
    /// calls before [`start`](Self::start) return `false`.
    pub fn complete(&mut self) -> bool {
        if self.completion_signaled {
            return false;
        }
        let Some(lesson) = self.lesson.as_ref() else {
            return false;
        };

        self.completion_signaled = true;
        let event = LessonCompleted::new(
            lesson.id().clone(),
            lesson.number(),
            self.sequence.len(),
            self.clock.now(),
        );
        info!(
            lesson = %event.lesson_number,
            items = event.total_items,
            "lesson completed"
        );
        self.sink.lesson_completed(event);
        true
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.position,
            total: self.sequence.len(),
            is_first: self.is_first(),
            is_last: self.is_last(),
            completed: self.completion_signaled,
        }
    }
}

impl fmt::Debug for LessonSessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonSessionController")
            .field("lesson", &self.lesson.as_ref().map(Lesson::number))
            .field("len", &self.sequence.len())
            .field("position", &self.position)
            .field("completion_signaled", &self.completion_signaled)
            .finish_non_exhaustive()
    }
}
