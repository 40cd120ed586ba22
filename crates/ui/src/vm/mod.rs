mod confirm_vm;
mod forms_vm;
mod lesson_session_vm;
mod lesson_vm;
mod time_fmt;
mod user_vm;
mod vocabulary_vm;

pub use confirm_vm::RowConfirm;
pub use forms_vm::{LessonFormVm, VocabularyFormVm, lesson_error_message, vocabulary_error_message};
pub use lesson_session_vm::{LessonIntent, LessonSessionVm, open_lesson_session};
pub use lesson_vm::{LessonCardVm, LessonRowVm, map_lesson_cards, map_lesson_rows};
pub use time_fmt::format_date;
pub use user_vm::{UserRowVm, map_user_rows, user_role_message};
pub use vocabulary_vm::{VocabularyCardVm, VocabularyRowVm, map_vocabulary_rows};
