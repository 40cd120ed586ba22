mod ids;
mod lesson;
mod session;
mod user;
mod vocabulary;

pub use ids::{LessonId, ParseIdError, UserId, VocabularyId};

pub use lesson::{Lesson, LessonDraft, LessonError, LessonNumber, ValidatedLesson};
pub use session::LessonCompleted;
pub use user::{User, UserError, UserRole};
pub use vocabulary::{ValidatedVocabulary, VocabularyDraft, VocabularyError, VocabularyItem};
