use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonCardVm, map_lesson_cards};

#[derive(Clone, Debug, PartialEq)]
struct LessonsData {
    cards: Vec<LessonCardVm>,
}

#[component]
pub fn LessonsView() -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();

    let resource = use_resource(move || {
        let lessons = lessons.clone();
        async move {
            let items = lessons
                .list_lessons()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(LessonsData {
                cards: map_lesson_cards(&items),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Lessons" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { "No lessons found." }
                    } else {
                        ul { class: "lesson-grid",
                            for card in data.cards {
                                LessonTile { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn LessonTile(card: LessonCardVm) -> Element {
    rsx! {
        li { class: "lesson-tile",
            Link { to: Route::Lesson { id: card.id.clone() },
                span { class: "lesson-tile__number", "Lesson {card.number}" }
                span { class: "lesson-tile__name", "{card.name}" }
            }
        }
    }
}
