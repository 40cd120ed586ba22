use std::collections::HashMap;

use kotoba_core::model::{Lesson, LessonNumber};

use crate::vm::time_fmt::format_date;

/// A tile in the learner's lesson grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: String,
    pub number: u32,
    pub name: String,
}

impl From<&Lesson> for LessonCardVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().to_string(),
            number: lesson.number().value(),
            name: lesson.name().to_owned(),
        }
    }
}

#[must_use]
pub fn map_lesson_cards(lessons: &[Lesson]) -> Vec<LessonCardVm> {
    lessons.iter().map(LessonCardVm::from).collect()
}

/// A row in the admin lesson table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: String,
    pub number: u32,
    pub name: String,
    pub vocabulary_count: usize,
    pub updated_at_str: String,
}

#[must_use]
pub fn map_lesson_rows(
    lessons: &[Lesson],
    counts: &HashMap<LessonNumber, usize>,
) -> Vec<LessonRowVm> {
    lessons
        .iter()
        .map(|lesson| LessonRowVm {
            id: lesson.id().to_string(),
            number: lesson.number().value(),
            name: lesson.name().to_owned(),
            vocabulary_count: counts.get(&lesson.number()).copied().unwrap_or(0),
            updated_at_str: format_date(lesson.updated_at()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotoba_core::model::{LessonDraft, LessonId};
    use kotoba_core::time::fixed_now;

    #[test]
    fn rows_default_missing_counts_to_zero() {
        let lessons: Vec<_> = [(1, "Greetings"), (2, "Numbers")]
            .into_iter()
            .map(|(n, name)| {
                LessonDraft::new(name, n)
                    .validate(fixed_now())
                    .unwrap()
                    .assign_id(LessonId::new(format!("l{n}")))
            })
            .collect();
        let counts = HashMap::from([(LessonNumber::new(1).unwrap(), 3)]);

        let rows = map_lesson_rows(&lessons, &counts);
        assert_eq!(rows[0].vocabulary_count, 3);
        assert_eq!(rows[1].vocabulary_count, 0);
        assert_eq!(rows[1].id, "l2");
        assert_eq!(rows[1].updated_at_str, "2023-11-14");
    }
}
