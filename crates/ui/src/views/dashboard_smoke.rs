use kotoba_core::model::LessonNumber;
use storage::repository::Storage;

use super::test_harness::{
    ViewHarness, ViewKind, lesson_id_for, seeded_storage, setup_view_harness,
    setup_view_harness_with_storage,
};
use crate::vm::{LessonFormVm, VocabularyFormVm};

fn lesson_form(name: &str, number: &str) -> LessonFormVm {
    LessonFormVm {
        name: name.into(),
        number: number.into(),
    }
}

async fn vocabulary_id_for(storage: &Storage, word: &str) -> String {
    storage
        .vocabulary
        .list_vocabulary(None)
        .await
        .expect("list vocabulary")
        .into_iter()
        .find(|item| item.word() == word)
        .map(|item| item.id().to_string())
        .expect("seeded word")
}

async fn submit_lesson(harness: &mut ViewHarness, form: LessonFormVm) -> String {
    let save = harness.dashboard_handles.lesson_form.get();
    harness.dom.in_runtime(|| save.call(form));
    harness.pump().await;
    harness.render()
}

async fn press_row(harness: &mut ViewHarness, id: &str) -> String {
    let press = harness.dashboard_handles.row_action.get();
    harness.dom.in_runtime(|| press.call(id.to_owned()));
    harness.pump().await;
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn edit_lesson_smoke_renames_lesson_in_table() {
    let storage = seeded_storage().await;
    let id = lesson_id_for(&storage, 1).await;

    let mut harness = setup_view_harness_with_storage(ViewKind::EditLesson(id), storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Edit Lesson"), "missing title in {html}");
    assert!(html.contains("Greetings"), "form not prefilled in {html}");

    let html = submit_lesson(&mut harness, lesson_form("Hello and Goodbye", "1")).await;
    assert!(html.contains("Lesson 1 updated"), "missing saved status in {html}");

    let mut table = setup_view_harness_with_storage(ViewKind::ManageLessons, harness.storage.clone());
    table.settle().await;
    let html = table.render();
    assert!(html.contains("Hello and Goodbye"), "missing new name in {html}");
    assert!(!html.contains("Greetings"), "old name still listed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn edit_lesson_smoke_reports_unknown_id() {
    let mut harness = setup_view_harness(ViewKind::EditLesson("missing".into())).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn edit_vocabulary_smoke_keeps_original_author() {
    let storage = seeded_storage().await;
    let id = vocabulary_id_for(&storage, "おはよう").await;

    let mut harness = setup_view_harness_with_storage(ViewKind::EditVocabulary(id.clone()), storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("ohayou"), "form not prefilled in {html}");

    let save = harness.dashboard_handles.vocabulary_form.get();
    harness.dom.in_runtime(|| {
        save.call(VocabularyFormVm {
            word: "おはようございます".into(),
            pronunciation: "ohayou gozaimasu".into(),
            meaning: "good morning".into(),
            when_to_say: "Greeting a teacher before noon".into(),
            lesson_no: "1".into(),
        });
    });
    harness.pump().await;
    let html = harness.render();
    assert!(html.contains("Updated おはようございます"), "missing saved status in {html}");

    let stored = harness
        .storage
        .vocabulary
        .get_vocabulary(&id.parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.pronunciation(), "ohayou gozaimasu");
    assert_eq!(stored.admin_email(), "demo@kotoba.local");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_vocabulary_smoke_filters_to_one_lesson() {
    let mut harness = setup_view_harness(ViewKind::ManageVocabulary).await;
    harness.settle().await;
    assert!(harness.render().contains("おはよう"));

    let filter = harness.dashboard_handles.filter.get();
    harness
        .dom
        .in_runtime(|| filter.call(Some(LessonNumber::new(2).unwrap())));
    harness.pump().await;

    let html = harness.render();
    assert!(html.contains("ありがとう"), "missing lesson 2 word in {html}");
    assert!(html.contains("すみません"), "missing lesson 2 word in {html}");
    assert!(!html.contains("おはよう"), "lesson 1 word leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_lessons_smoke_deletes_after_confirmation() {
    let storage = seeded_storage().await;
    let id = lesson_id_for(&storage, 3).await;

    let mut harness = setup_view_harness_with_storage(ViewKind::ManageLessons, storage);
    harness.settle().await;

    let html = press_row(&mut harness, &id).await;
    assert!(html.contains("Confirm delete"), "missing confirm step in {html}");
    assert!(html.contains("Numbers"), "deleted before confirmation in {html}");

    let html = press_row(&mut harness, &id).await;
    assert!(html.contains("Lesson deleted"), "missing notice in {html}");
    assert!(!html.contains("Numbers"), "table not refreshed in {html}");
    assert_eq!(harness.storage.lessons.list_lessons().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn manage_vocabulary_smoke_deletes_after_confirmation() {
    let storage = seeded_storage().await;
    let id = vocabulary_id_for(&storage, "すみません").await;

    let mut harness = setup_view_harness_with_storage(ViewKind::ManageVocabulary, storage);
    harness.settle().await;

    let html = press_row(&mut harness, &id).await;
    assert!(html.contains("Confirm delete"), "missing confirm step in {html}");

    let html = press_row(&mut harness, &id).await;
    assert!(html.contains("Vocabulary deleted"), "missing notice in {html}");
    assert!(!html.contains("すみません"), "table not refreshed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn add_lesson_smoke_reports_form_errors() {
    let mut harness = setup_view_harness(ViewKind::AddLesson).await;
    harness.settle().await;

    let html = submit_lesson(&mut harness, lesson_form("Food", "one")).await;
    assert!(
        html.contains("Lesson number must be a whole number"),
        "missing parse error in {html}"
    );

    let html = submit_lesson(&mut harness, lesson_form("   ", "4")).await;
    assert!(html.contains("Lesson name cannot be empty"), "missing name error in {html}");

    let html = submit_lesson(&mut harness, lesson_form("Food", "1")).await;
    assert!(
        html.contains("A lesson with this number already exists"),
        "missing conflict error in {html}"
    );
    assert_eq!(harness.storage.lessons.list_lessons().await.unwrap().len(), 3);
}

#[tokio::test(flavor = "current_thread")]
async fn add_lesson_smoke_saves_valid_form() {
    let mut harness = setup_view_harness(ViewKind::AddLesson).await;
    harness.settle().await;

    let html = submit_lesson(&mut harness, lesson_form("Food", "4")).await;
    assert!(html.contains("Lesson 4 added"), "missing saved status in {html}");
    assert_eq!(harness.storage.lessons.list_lessons().await.unwrap().len(), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn add_vocabulary_smoke_records_admin_email() {
    let mut harness = setup_view_harness(ViewKind::AddVocabulary).await;
    harness.settle().await;

    let save = harness.dashboard_handles.vocabulary_form.get();
    harness.dom.in_runtime(|| {
        save.call(VocabularyFormVm {
            word: "いち".into(),
            pronunciation: "ichi".into(),
            meaning: "one".into(),
            when_to_say: "Counting".into(),
            lesson_no: "3".into(),
        });
    });
    harness.pump().await;
    let html = harness.render();
    assert!(html.contains("Added いち to lesson 3"), "missing saved status in {html}");

    let words = harness
        .storage
        .vocabulary
        .list_vocabulary(Some(LessonNumber::new(3).unwrap()))
        .await
        .unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].admin_email(), "admin@example.com");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_users_smoke_searches_and_toggles_role() {
    let mut harness = setup_view_harness(ViewKind::ManageUsers).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Kenji Sato"), "missing user in {html}");
    assert!(html.contains("Revoke Admin"), "missing admin action in {html}");

    let search = harness.dashboard_handles.search.get();
    harness.dom.in_runtime(|| search.call("HANA".to_owned()));
    harness.pump().await;
    let html = harness.render();
    assert!(html.contains("hana@kotoba.local"), "missing match in {html}");
    assert!(!html.contains("Kenji Sato"), "search did not narrow rows in {html}");

    let html = press_row(&mut harness, "demo-hana").await;
    assert!(html.contains(">Confirm<"), "missing confirm step in {html}");
    assert!(!html.contains("Make Admin"), "action label not replaced in {html}");

    let html = press_row(&mut harness, "demo-hana").await;
    assert!(html.contains("User role updated to admin"), "missing notice in {html}");
    assert!(html.contains("Revoke Admin"), "row not refreshed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_users_smoke_renders_no_match() {
    let mut harness = setup_view_harness(ViewKind::ManageUsers).await;
    harness.settle().await;

    let search = harness.dashboard_handles.search.get();
    harness.dom.in_runtime(|| search.call("nobody".to_owned()));
    harness.pump().await;

    let html = harness.render();
    assert!(html.contains("No users found."), "missing empty state in {html}");
}
