//! Built-in lessons for running the client without a backend.

use chrono::{DateTime, Utc};
use kotoba_core::model::{
    LessonDraft, User, UserId, UserRole, ValidatedLesson, ValidatedVocabulary, VocabularyDraft,
};
use thiserror::Error;

use crate::repository::{InMemoryRepository, Storage, StorageError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error(transparent)]
    Domain(#[from] kotoba_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

const DEMO_ADMIN: &str = "demo@kotoba.local";

/// (lesson number, lesson name, [(word, pronunciation, meaning, when to say)])
type DemoLesson = (i64, &'static str, &'static [(&'static str, &'static str, &'static str, &'static str)]);

const DEMO_LESSONS: &[DemoLesson] = &[
    (
        1,
        "Greetings",
        &[
            ("おはよう", "ohayou", "good morning", "Greeting friends before noon"),
            ("こんにちは", "konnichiwa", "hello", "Greeting someone during the day"),
            ("こんばんは", "konbanwa", "good evening", "Greeting someone after dark"),
        ],
    ),
    (
        2,
        "Courtesy",
        &[
            ("ありがとう", "arigatou", "thank you", "Thanking a friend"),
            ("すみません", "sumimasen", "excuse me", "Getting attention or apologizing lightly"),
        ],
    ),
    (3, "Numbers", &[]),
];

const DEMO_USERS: &[(&str, &str, &str, UserRole)] = &[
    ("demo-aiko", "Aiko Tanaka", "aiko@kotoba.local", UserRole::Admin),
    ("demo-hana", "Hana Suzuki", "hana@kotoba.local", UserRole::User),
    ("demo-kenji", "Kenji Sato", "kenji@kotoba.local", UserRole::User),
];

/// Accounts shown on the offline users dashboard.
///
/// # Errors
///
/// Returns `kotoba_core::Error` if a built-in account is malformed.
pub fn demo_users(now: DateTime<Utc>) -> Result<Vec<User>, kotoba_core::Error> {
    DEMO_USERS
        .iter()
        .map(|(id, name, email, role)| {
            Ok(User::from_persisted(UserId::new(*id), *name, *email, *role, now)?)
        })
        .collect()
}

/// Empty in-memory storage that already knows the demo accounts.
///
/// Accounts cannot be inserted through `Storage`, so they are fixed at construction;
/// call [`seed_demo`] afterwards for lessons and vocabulary.
///
/// # Errors
///
/// Returns `SeedError::Domain` if a built-in account is malformed.
pub fn demo_storage(now: DateTime<Utc>) -> Result<Storage, SeedError> {
    let repo = InMemoryRepository::with_users(demo_users(now)?);
    Ok(Storage::from_repository(repo))
}

fn demo_lesson(number: i64, name: &str, now: DateTime<Utc>) -> Result<ValidatedLesson, kotoba_core::Error> {
    Ok(LessonDraft::new(name, number).validate(now)?)
}

fn demo_word(
    lesson_no: i64,
    (word, pronunciation, meaning, when_to_say): (&str, &str, &str, &str),
    now: DateTime<Utc>,
) -> Result<ValidatedVocabulary, kotoba_core::Error> {
    Ok(VocabularyDraft {
        word: word.into(),
        pronunciation: pronunciation.into(),
        meaning: meaning.into(),
        when_to_say: when_to_say.into(),
        lesson_no,
        admin_email: DEMO_ADMIN.into(),
    }
    .validate(now)?)
}

/// Insert the demo lessons and their vocabulary. Lesson 3 is left empty on purpose
/// so the "no vocabulary" state is reachable offline.
///
/// # Errors
///
/// Returns `SeedError::Storage` if the store rejects an insert (e.g. lessons already seeded).
pub async fn seed_demo(storage: &Storage, now: DateTime<Utc>) -> Result<(), SeedError> {
    for (number, name, words) in DEMO_LESSONS {
        storage
            .lessons
            .insert_lesson(demo_lesson(*number, name, now)?)
            .await?;
        for word in *words {
            storage
                .vocabulary
                .insert_vocabulary(demo_word(*number, *word, now)?)
                .await?;
        }
    }
    tracing::info!(lessons = DEMO_LESSONS.len(), "seeded demo content");
    Ok(())
}
