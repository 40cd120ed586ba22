use dioxus::prelude::*;
use dioxus_router::Link;

use kotoba_core::model::{LessonNumber, VocabularyId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{RowConfirm, VocabularyRowVm, map_vocabulary_rows, vocabulary_error_message};

#[derive(Clone, Debug, PartialEq)]
struct ManageVocabularyData {
    lesson_numbers: Vec<u32>,
    rows: Vec<VocabularyRowVm>,
}

/// Admin table of vocabulary, optionally narrowed to one lesson.
#[component]
pub fn ManageVocabularyView() -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let vocabulary = ctx.vocabulary();
    let mut filter = use_signal(|| None::<LessonNumber>);
    let notice = use_signal(|| None::<String>);
    let mut confirm = use_signal(RowConfirm::default);

    let resource = {
        let vocabulary = vocabulary.clone();
        use_resource(move || {
            let lessons = lessons.clone();
            let vocabulary = vocabulary.clone();
            let lesson_no = filter();
            async move {
                let lesson_numbers = lessons
                    .list_lessons()
                    .await
                    .map_err(|_| ViewError::Unknown)?
                    .iter()
                    .map(|lesson| lesson.number().value())
                    .collect();
                let items = vocabulary
                    .list_vocabulary(lesson_no)
                    .await
                    .map_err(|_| ViewError::Unknown)?;
                Ok(ManageVocabularyData {
                    lesson_numbers,
                    rows: map_vocabulary_rows(&items),
                })
            }
        })
    };
    let state = view_state_from_resource(resource);

    let on_delete = use_callback(move |id: String| {
        if !confirm.write().press(&id) {
            return;
        }
        let vocabulary = vocabulary.clone();
        let mut resource = resource;
        let mut notice = notice;
        spawn(async move {
            match vocabulary.delete_vocabulary(&VocabularyId::new(id)).await {
                Ok(()) => {
                    notice.set(Some("Vocabulary deleted".to_owned()));
                    resource.restart();
                }
                Err(err) => notice.set(Some(vocabulary_error_message(&err))),
            }
        });
    });

    let set_filter = use_callback(move |lesson_no: Option<LessonNumber>| {
        confirm.write().cancel();
        filter.set(lesson_no);
    });

    #[cfg(test)]
    {
        super::use_test_handle(|handles| &handles.row_action, on_delete);
        super::use_test_handle(|handles| &handles.filter, set_filter);
    }

    let selected = filter().map(|no| no.to_string()).unwrap_or_default();

    rsx! {
        div { class: "page dashboard-page",
            header { class: "dashboard-header",
                h2 { "Manage Vocabulary" }
                Link { class: "btn btn-primary", to: Route::AddVocabulary {}, "Add Vocabulary" }
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
                    label { class: "filter",
                        "Lesson "
                        select {
                            value: "{selected}",
                            onchange: move |evt| {
                                let parsed = evt
                                    .value()
                                    .parse::<i64>()
                                    .ok()
                                    .and_then(|raw| LessonNumber::try_from(raw).ok());
                                set_filter.call(parsed);
                            },
                            option { value: "", "All lessons" }
                            for number in data.lesson_numbers {
                                option { key: "{number}", value: "{number}", "Lesson {number}" }
                            }
                        }
                    }
                    if data.rows.is_empty() {
                        p { "No vocabularies found." }
                    } else {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Word" }
                                    th { "Pronunciation" }
                                    th { "Meaning" }
                                    th { "When to say" }
                                    th { "Lesson" }
                                    th { "Added by" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    VocabularyRow {
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
fn VocabularyRow(
    row: VocabularyRowVm,
    armed: bool,
    on_delete: Callback<String>,
    on_cancel: Callback<()>,
) -> Element {
    let id = row.id.clone();
    rsx! {
        tr {
            td { "{row.word}" }
            td { "{row.pronunciation}" }
            td { "{row.meaning}" }
            td { "{row.when_to_say}" }
            td { "{row.lesson_no}" }
            td { "{row.admin_email}" }
            td { class: "row-actions",
                Link {
                    class: "btn btn-secondary",
                    to: Route::EditVocabulary { id: row.id.clone() },
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
