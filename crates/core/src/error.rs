use thiserror::Error;

use crate::model::{LessonError, ParseIdError, UserError, VocabularyError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
