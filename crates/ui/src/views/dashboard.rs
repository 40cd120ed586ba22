mod forms;
mod lessons;
mod users;
mod vocabulary;

pub use forms::{AddLessonView, AddVocabularyView, EditLessonView, EditVocabularyView};
pub use lessons::ManageLessonsView;
pub use users::ManageUsersView;
pub use vocabulary::ManageVocabularyView;

#[cfg(test)]
pub(crate) use test_handles::{DashboardTestHandles, use_test_handle};
