use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use kotoba_core::model::{LessonCompleted, LessonId};

use super::scripts::speak_script;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonIntent, LessonSessionVm, open_lesson_session};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// How long the celebration stays up before returning to the lesson list.
const CELEBRATION_DELAY: Duration = Duration::from_secs(3);

/// Flashcard session for one lesson.
///
/// Keyed on the lesson id by the caller, so switching lessons mounts a fresh
/// session instead of reusing the old position.
#[component]
pub(crate) fn LessonSession(lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let loader = ctx.session_loader();

    let vm = use_signal(|| None::<LessonSessionVm>);
    let celebrating = use_signal(|| false);

    let resource = use_resource(move || {
        let loader = loader.clone();
        let lesson_id = lesson_id.clone();
        let mut vm = vm;
        let mut celebrating = celebrating;

        async move {
            celebrating.set(false);
            let id = lesson_id
                .parse::<LessonId>()
                .map_err(|_| ViewError::NotFound)?;
            let on_complete = move |event: LessonCompleted| {
                tracing::debug!(lesson = %event.lesson_number, "showing celebration");
                let mut celebrating = celebrating;
                celebrating.set(true);
            };
            let started = open_lesson_session(&loader, &id, on_complete).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(resource);

    use_effect(move || {
        if celebrating() {
            spawn(async move {
                tokio::time::sleep(CELEBRATION_DELAY).await;
                let _ = navigator.push(Route::Lessons {});
            });
        }
    });

    let dispatch_intent = use_callback(move |intent: LessonIntent| {
        let mut vm = vm;
        if let Some(session) = vm.write().as_mut() {
            session.apply(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| match evt.data.key() {
        Key::ArrowRight => {
            evt.prevent_default();
            dispatch_intent.call(LessonIntent::Next);
        }
        Key::ArrowLeft => {
            evt.prevent_default();
            dispatch_intent.call(LessonIntent::Previous);
        }
        _ => {}
    });

    let vm_guard = vm.read();
    let title = vm_guard.as_ref().and_then(LessonSessionVm::lesson_title);
    let card = vm_guard.as_ref().and_then(LessonSessionVm::card);
    let speak_word = card.as_ref().map(|card| card.word.clone());
    let progress = vm_guard
        .as_ref()
        .map(LessonSessionVm::progress)
        .unwrap_or_default();
    drop(vm_guard);
    let progress_label = progress.label();
    let show_celebration = celebrating();

    rsx! {
        div { class: "page lesson-page", id: "lesson-root", tabindex: "0", onkeydown: on_key,
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "lesson-loading", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    if err.is_retryable() {
                        p { class: "lesson-error", "Error loading lesson data" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    } else {
                        p { class: "lesson-empty", "{err.message()}" }
                        Link { class: "btn btn-secondary", to: Route::Lessons {}, "Back to Lessons" }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(title) = title {
                        h2 { class: "lesson-title", "{title}" }
                    }
                    if show_celebration {
                        div { class: "celebration", role: "status",
                            h3 { "Lesson complete!" }
                            p { "Great work. Taking you back to the lessons..." }
                        }
                    }
                    if let Some(card) = card {
                        div { class: "flashcard",
                            h3 { class: "flashcard__word", "{card.word}" }
                            p { class: "flashcard__pronunciation", "Pronunciation: {card.pronunciation}" }
                            p { class: "flashcard__meaning", "Meaning: {card.meaning}" }
                            p { class: "flashcard__when", "When to say: {card.when_to_say}" }
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Some(word) = speak_word.as_deref() {
                                        let _ = eval(&speak_script(word));
                                    }
                                },
                                "Speak"
                            }
                        }
                    }
                    div { class: "pager",
                        button {
                            class: "btn",
                            id: "lesson-previous",
                            r#type: "button",
                            disabled: progress.is_first,
                            onclick: move |_| dispatch_intent.call(LessonIntent::Previous),
                            "Previous"
                        }
                        span { class: "pager__caption", "{progress_label}" }
                        button {
                            class: "btn",
                            id: "lesson-next",
                            r#type: "button",
                            disabled: progress.is_last,
                            onclick: move |_| dispatch_intent.call(LessonIntent::Next),
                            "Next"
                        }
                    }
                    if progress.is_last {
                        button {
                            class: "btn btn-primary lesson-complete",
                            id: "lesson-complete",
                            r#type: "button",
                            disabled: progress.completed,
                            onclick: move |_| dispatch_intent.call(LessonIntent::Complete),
                            "Complete"
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LessonIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }
}
