use dioxus::prelude::*;
use dioxus_router::Link;

use kotoba_core::model::LessonId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonRowVm, RowConfirm, lesson_error_message, map_lesson_rows};

#[derive(Clone, Debug, PartialEq)]
struct ManageLessonsData {
    rows: Vec<LessonRowVm>,
}

/// Admin table of lessons with their vocabulary counts.
#[component]
pub fn ManageLessonsView() -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let vocabulary = ctx.vocabulary();
    let notice = use_signal(|| None::<String>);
    let mut confirm = use_signal(RowConfirm::default);

    let resource = {
        let lessons = lessons.clone();
        use_resource(move || {
            let lessons = lessons.clone();
            let vocabulary = vocabulary.clone();
            async move {
                let items = lessons
                    .list_lessons()
                    .await
                    .map_err(|_| ViewError::Unknown)?;
                let counts = vocabulary
                    .counts_by_lesson()
                    .await
                    .map_err(|_| ViewError::Unknown)?;
                Ok(ManageLessonsData {
                    rows: map_lesson_rows(&items, &counts),
                })
            }
        })
    };
    let state = view_state_from_resource(resource);

    let on_delete = use_callback(move |id: String| {
        if !confirm.write().press(&id) {
            return;
        }
        let lessons = lessons.clone();
        let mut resource = resource;
        let mut notice = notice;
        spawn(async move {
            match lessons.delete_lesson(&LessonId::new(id)).await {
                Ok(()) => {
                    notice.set(Some("Lesson deleted".to_owned()));
                    resource.restart();
                }
                Err(err) => notice.set(Some(lesson_error_message(&err))),
            }
        });
    });

    #[cfg(test)]
    super::use_test_handle(|handles| &handles.row_action, on_delete);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "dashboard-header",
                h2 { "Manage Lessons" }
                Link { class: "btn btn-primary", to: Route::AddLesson {}, "Add Lesson" }
            }
            if let Some(message) = notice() {
                p { class: "notice", role: "status", "{message}" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No lessons found." }
                    } else {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Number" }
                                    th { "Name" }
                                    th { "Vocabulary" }
                                    th { "Updated" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    LessonRow {
                                        key: "{row.id}",
                                        armed: confirm.read().is_armed(&row.id),
                                        row,
                                        on_delete,
                                        on_cancel: move |_| confirm.write().cancel(),
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn LessonRow(
    row: LessonRowVm,
    armed: bool,
    on_delete: Callback<String>,
    on_cancel: Callback<()>,
) -> Element {
    let id = row.id.clone();
    rsx! {
        tr {
            td { "{row.number}" }
            td { "{row.name}" }
            td { "{row.vocabulary_count}" }
            td { "{row.updated_at_str}" }
            td { class: "row-actions",
                Link {
                    class: "btn btn-secondary",
                    to: Route::EditLesson { id: row.id.clone() },
                    "Edit"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_delete.call(id.clone()),
                    if armed { "Confirm delete" } else { "Delete" }
                }
                if armed {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
