mod scripts;
mod session;

use dioxus::prelude::*;

use session::LessonSession;
#[cfg(test)]
pub(crate) use session::LessonTestHandles;

#[component]
pub fn LessonView(id: String) -> Element {
    rsx! {
        LessonSession { key: "{id}", lesson_id: id.clone() }
    }
}
