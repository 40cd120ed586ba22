use chrono::{DateTime, Utc};

use crate::model::{LessonId, LessonNumber};

/// Emitted once when a learner finishes a lesson session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCompleted {
    pub lesson_id: LessonId,
    pub lesson_number: LessonNumber,
    /// Number of vocabulary items in the finished session.
    pub total_items: usize,
    pub completed_at: DateTime<Utc>,
}

impl LessonCompleted {
    #[must_use]
    pub fn new(
        lesson_id: LessonId,
        lesson_number: LessonNumber,
        total_items: usize,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            lesson_id,
            lesson_number,
            total_items,
            completed_at,
        }
    }
}
