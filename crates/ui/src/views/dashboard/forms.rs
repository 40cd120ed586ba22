use dioxus::prelude::*;
use dioxus_router::Link;

use kotoba_core::model::{LessonId, VocabularyId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonFormVm, VocabularyFormVm, lesson_error_message, vocabulary_error_message};

#[derive(Clone, Debug, PartialEq, Eq)]
enum FormStatus {
    Saving,
    Saved(String),
    Failed(String),
}

#[component]
fn StatusLine(status: Option<FormStatus>) -> Element {
    match status {
        None => rsx! {},
        Some(FormStatus::Saving) => rsx! {
            p { class: "form-status", "Saving..." }
        },
        Some(FormStatus::Saved(message)) => rsx! {
            p { class: "form-status form-status--ok", role: "status", "{message}" }
        },
        Some(FormStatus::Failed(message)) => rsx! {
            p { class: "form-status form-status--error", role: "alert", "{message}" }
        },
    }
}

//
// ─── SHARED FIELDS ─────────────────────────────────────────────────────────────
//

#[component]
fn LessonFields(
    form: Signal<LessonFormVm>,
    submit_label: &'static str,
    on_save: Callback<LessonFormVm>,
) -> Element {
    let mut form = form;
    let value = form();
    rsx! {
        form {
            class: "admin-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_save.call(form());
            },
            label { "Lesson name"
                input {
                    r#type: "text",
                    value: "{value.name}",
                    placeholder: "Greetings",
                    oninput: move |evt| form.write().name = evt.value(),
                }
            }
            label { "Lesson number"
                input {
                    r#type: "number",
                    min: "1",
                    value: "{value.number}",
                    oninput: move |evt| form.write().number = evt.value(),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
        }
    }
}

#[component]
fn VocabularyFields(
    form: Signal<VocabularyFormVm>,
    submit_label: &'static str,
    on_save: Callback<VocabularyFormVm>,
) -> Element {
    let mut form = form;
    let value = form();
    rsx! {
        form {
            class: "admin-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_save.call(form());
            },
            label { "Word"
                input {
                    r#type: "text",
                    value: "{value.word}",
                    oninput: move |evt| form.write().word = evt.value(),
                }
            }
            label { "Pronunciation"
                input {
                    r#type: "text",
                    value: "{value.pronunciation}",
                    oninput: move |evt| form.write().pronunciation = evt.value(),
                }
            }
            label { "Meaning"
                input {
                    r#type: "text",
                    value: "{value.meaning}",
                    oninput: move |evt| form.write().meaning = evt.value(),
                }
            }
            label { "When to say"
                textarea {
                    value: "{value.when_to_say}",
                    oninput: move |evt| form.write().when_to_say = evt.value(),
                }
            }
            label { "Lesson number"
                input {
                    r#type: "number",
                    min: "1",
                    value: "{value.lesson_no}",
                    oninput: move |evt| form.write().lesson_no = evt.value(),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
        }
    }
}

//
// ─── ADD ───────────────────────────────────────────────────────────────────────
//

#[component]
pub fn AddLessonView() -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let form = use_signal(LessonFormVm::default);
    let status = use_signal(|| None::<FormStatus>);

    let save = use_callback(move |value: LessonFormVm| {
        let mut form = form;
        let mut status = status;
        let draft = match value.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                status.set(Some(FormStatus::Failed(message)));
                return;
            }
        };
        let lessons = lessons.clone();
        status.set(Some(FormStatus::Saving));
        spawn(async move {
            match lessons.create_lesson(draft).await {
                Ok(lesson) => {
                    status.set(Some(FormStatus::Saved(format!(
                        "Lesson {} added",
                        lesson.number()
                    ))));
                    form.set(LessonFormVm::default());
                }
                Err(err) => status.set(Some(FormStatus::Failed(lesson_error_message(&err)))),
            }
        });
    });

    #[cfg(test)]
    super::use_test_handle(|handles| &handles.lesson_form, save);

    rsx! {
        div { class: "page dashboard-page",
            h2 { "Add Lesson" }
            LessonFields { form, submit_label: "Add Lesson", on_save: save }
            StatusLine { status: status() }
        }
    }
}

#[component]
pub fn AddVocabularyView() -> Element {
    let ctx = use_context::<AppContext>();
    let vocabulary = ctx.vocabulary();
    let admin_email = ctx.admin_email().to_owned();
    let form = use_signal(VocabularyFormVm::default);
    let status = use_signal(|| None::<FormStatus>);

    let save = use_callback(move |value: VocabularyFormVm| {
        let mut form = form;
        let mut status = status;
        let draft = match value.to_draft(&admin_email) {
            Ok(draft) => draft,
            Err(message) => {
                status.set(Some(FormStatus::Failed(message)));
                return;
            }
        };
        let vocabulary = vocabulary.clone();
        status.set(Some(FormStatus::Saving));
        spawn(async move {
            match vocabulary.create_vocabulary(draft).await {
                Ok(item) => {
                    status.set(Some(FormStatus::Saved(format!(
                        "Added {} to lesson {}",
                        item.word(),
                        item.lesson_no()
                    ))));
                    // Keep the lesson number so several words can be added in a row.
                    form.set(VocabularyFormVm {
                        lesson_no: value.lesson_no,
                        ..VocabularyFormVm::default()
                    });
                }
                Err(err) => {
                    status.set(Some(FormStatus::Failed(vocabulary_error_message(&err))));
                }
            }
        });
    });

    #[cfg(test)]
    super::use_test_handle(|handles| &handles.vocabulary_form, save);

    rsx! {
        div { class: "page dashboard-page",
            h2 { "Add Vocabulary" }
            VocabularyFields { form, submit_label: "Add Vocabulary", on_save: save }
            StatusLine { status: status() }
        }
    }
}

//
// ─── EDIT ──────────────────────────────────────────────────────────────────────
//

/// Edit page for one lesson, prefilled from the stored record.
#[component]
pub fn EditLessonView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let form = use_signal(LessonFormVm::default);
    let status = use_signal(|| None::<FormStatus>);

    let resource = {
        let lessons = lessons.clone();
        let id = id.clone();
        use_resource(move || {
            let lessons = lessons.clone();
            let id = id.clone();
            let mut form = form;
            async move {
                let lesson_id = id.parse::<LessonId>().map_err(|_| ViewError::NotFound)?;
                let lesson = lessons
                    .get_lesson(&lesson_id)
                    .await
                    .map_err(|_| ViewError::Unknown)?
                    .ok_or(ViewError::NotFound)?;
                form.set(LessonFormVm::from(&lesson));
                Ok::<_, ViewError>(())
            }
        })
    };
    let state = view_state_from_resource(resource);

    let save = use_callback(move |value: LessonFormVm| {
        let mut status = status;
        let draft = match value.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                status.set(Some(FormStatus::Failed(message)));
                return;
            }
        };
        let lessons = lessons.clone();
        let lesson_id = LessonId::new(id.clone());
        status.set(Some(FormStatus::Saving));
        spawn(async move {
            match lessons.update_lesson(&lesson_id, draft).await {
                Ok(lesson) => status.set(Some(FormStatus::Saved(format!(
                    "Lesson {} updated",
                    lesson.number()
                )))),
                Err(err) => status.set(Some(FormStatus::Failed(lesson_error_message(&err)))),
            }
        });
    });

    #[cfg(test)]
    super::use_test_handle(|handles| &handles.lesson_form, save);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "dashboard-header",
                h2 { "Edit Lesson" }
                Link { class: "btn btn-secondary", to: Route::ManageLessons {}, "Back to Lessons" }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(()) => rsx! {
                    LessonFields { form, submit_label: "Save Lesson", on_save: save }
                    StatusLine { status: status() }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

/// Edit page for one vocabulary entry. The original author is kept.
#[component]
pub fn EditVocabularyView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let vocabulary = ctx.vocabulary();
    let form = use_signal(VocabularyFormVm::default);
    let author = use_signal(String::new);
    let status = use_signal(|| None::<FormStatus>);

    let resource = {
        let vocabulary = vocabulary.clone();
        let id = id.clone();
        use_resource(move || {
            let vocabulary = vocabulary.clone();
            let id = id.clone();
            let mut form = form;
            let mut author = author;
            async move {
                let item_id = id
                    .parse::<VocabularyId>()
                    .map_err(|_| ViewError::NotFound)?;
                let item = vocabulary
                    .get_vocabulary(&item_id)
                    .await
                    .map_err(|_| ViewError::Unknown)?
                    .ok_or(ViewError::NotFound)?;
                form.set(VocabularyFormVm::from(&item));
                author.set(item.admin_email().to_owned());
                Ok::<_, ViewError>(())
            }
        })
    };
    let state = view_state_from_resource(resource);

    let save = use_callback(move |value: VocabularyFormVm| {
        let mut status = status;
        let draft = match value.to_draft(&author.peek()) {
            Ok(draft) => draft,
            Err(message) => {
                status.set(Some(FormStatus::Failed(message)));
                return;
            }
        };
        let vocabulary = vocabulary.clone();
        let item_id = VocabularyId::new(id.clone());
        status.set(Some(FormStatus::Saving));
        spawn(async move {
            match vocabulary.update_vocabulary(&item_id, draft).await {
                Ok(item) => status.set(Some(FormStatus::Saved(format!("Updated {}", item.word())))),
                Err(err) => {
                    status.set(Some(FormStatus::Failed(vocabulary_error_message(&err))));
                }
            }
        });
    });

    #[cfg(test)]
    super::use_test_handle(|handles| &handles.vocabulary_form, save);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "dashboard-header",
                h2 { "Edit Vocabulary" }
                Link { class: "btn btn-secondary", to: Route::ManageVocabulary {}, "Back to Vocabulary" }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(()) => rsx! {
                    VocabularyFields { form, submit_label: "Save Vocabulary", on_save: save }
                    StatusLine { status: status() }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
