use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    AddLessonView, AddVocabularyView, EditLessonView, EditVocabularyView, HomeView, LessonView,
    LessonsView, ManageLessonsView, ManageUsersView, ManageVocabularyView, NotFoundView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lessons", LessonsView)] Lessons {},
        #[route("/lessons/:id", LessonView)] Lesson { id: String },
        #[route("/dashboard/lessons", ManageLessonsView)] ManageLessons {},
        #[route("/dashboard/lessons/new", AddLessonView)] AddLesson {},
        #[route("/dashboard/lessons/:id/edit", EditLessonView)] EditLesson { id: String },
        #[route("/dashboard/vocabulary", ManageVocabularyView)] ManageVocabulary {},
        #[route("/dashboard/vocabulary/new", AddVocabularyView)] AddVocabulary {},
        #[route("/dashboard/vocabulary/:id/edit", EditVocabularyView)] EditVocabulary { id: String },
        #[route("/dashboard/users", ManageUsersView)] ManageUsers {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Kotoba" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Lessons {}, "Lessons" } }
            }
            h2 { class: "sidebar__section", "Dashboard" }
            ul {
                li { Link { to: Route::ManageLessons {}, "Manage Lessons" } }
                li { Link { to: Route::AddLesson {}, "Add Lesson" } }
                li { Link { to: Route::ManageVocabulary {}, "Manage Vocabulary" } }
                li { Link { to: Route::AddVocabulary {}, "Add Vocabulary" } }
                li { Link { to: Route::ManageUsers {}, "Manage Users" } }
            }
        }
    }
}
