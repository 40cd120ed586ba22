use kotoba_core::model::{Lesson, LessonId, ValidatedLesson};
use storage::repository::{InMemoryRepository, LessonRepository, Storage, StorageError};

use super::test_harness::{
    ViewKind, lesson_id_for, seeded_storage, setup_view_harness, setup_view_harness_with_storage,
};
use crate::vm::LessonIntent;

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_lists_seeded_lessons() {
    let mut harness = setup_view_harness(ViewKind::Lessons).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Lesson 1"), "missing lesson 1 in {html}");
    assert!(html.contains("Greetings"), "missing name in {html}");
    assert!(html.contains("Numbers"), "missing empty lesson in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Lessons, Storage::in_memory());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No lessons found."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_shows_first_word_and_pager() {
    let storage = seeded_storage().await;
    let id = lesson_id_for(&storage, 1).await;

    let mut harness = setup_view_harness_with_storage(ViewKind::Lesson(id), storage);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("おはよう"), "missing first word in {html}");
    assert!(html.contains("Vocabulary 1 of 3"), "missing caption in {html}");
    assert!(!html.contains("lesson-complete"), "complete shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reaches_complete_on_last_word() {
    let storage = seeded_storage().await;
    let id = lesson_id_for(&storage, 2).await;

    let mut harness = setup_view_harness_with_storage(ViewKind::Lesson(id), storage);
    harness.settle().await;

    let dispatch = harness.lesson_handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(LessonIntent::Next));
    harness.pump().await;
    let html = harness.render();
    assert!(html.contains("すみません"), "missing second word in {html}");
    assert!(html.contains("Vocabulary 2 of 2"), "missing caption in {html}");
    assert!(html.contains("lesson-complete"), "missing complete button in {html}");

    harness.dom.in_runtime(|| dispatch.call(LessonIntent::Complete));
    harness.pump().await;
    let html = harness.render();
    assert!(html.contains("Lesson complete!"), "missing celebration in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_empty_lesson_message() {
    let storage = seeded_storage().await;
    let id = lesson_id_for(&storage, 3).await;

    let mut harness = setup_view_harness_with_storage(ViewKind::Lesson(id), storage);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("No vocabularies found for this lesson."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Lesson("missing".into())).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_lessons_smoke_shows_vocabulary_counts() {
    let mut harness = setup_view_harness(ViewKind::ManageLessons).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Manage Lessons"), "missing title in {html}");
    assert!(html.contains("Courtesy"), "missing lesson row in {html}");
    assert!(html.contains("<td>0</td>"), "missing empty lesson count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_vocabulary_smoke_lists_all_words() {
    let mut harness = setup_view_harness(ViewKind::ManageVocabulary).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("All lessons"), "missing filter in {html}");
    assert!(html.contains("ありがとう"), "missing lesson 2 word in {html}");
    assert!(html.contains("demo@kotoba.local"), "missing author in {html}");
}

struct FailingLessons;

#[async_trait::async_trait]
impl LessonRepository for FailingLessons {
    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_lesson(&self, _id: &LessonId) -> Result<Option<Lesson>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn insert_lesson(&self, _lesson: ValidatedLesson) -> Result<Lesson, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn update_lesson(
        &self,
        _id: &LessonId,
        _edit: ValidatedLesson,
    ) -> Result<Lesson, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn delete_lesson(&self, _id: &LessonId) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

fn failing_storage() -> Storage {
    Storage {
        lessons: std::sync::Arc::new(FailingLessons),
        vocabulary: std::sync::Arc::new(InMemoryRepository::new()),
        users: std::sync::Arc::new(InMemoryRepository::new()),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Lesson("any".into()), failing_storage());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error loading lesson data"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Lessons, failing_storage());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}
