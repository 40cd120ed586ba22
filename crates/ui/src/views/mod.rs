mod dashboard;
mod home;
mod lesson;
mod lessons;
mod not_found;
mod state;

#[cfg(test)]
mod dashboard_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::{
    AddLessonView, AddVocabularyView, EditLessonView, EditVocabularyView, ManageLessonsView,
    ManageUsersView, ManageVocabularyView,
};
pub use home::HomeView;
pub use lesson::LessonView;
pub use lessons::LessonsView;
pub use not_found::NotFoundView;
pub use state::{ViewError, ViewState, view_state_from_resource};
