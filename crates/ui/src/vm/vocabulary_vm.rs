use kotoba_core::model::VocabularyItem;

/// Front of the flashcard shown during a lesson session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyCardVm {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
}

impl From<&VocabularyItem> for VocabularyCardVm {
    fn from(item: &VocabularyItem) -> Self {
        Self {
            word: item.word().to_owned(),
            pronunciation: item.pronunciation().to_owned(),
            meaning: item.meaning().to_owned(),
            when_to_say: item.when_to_say().to_owned(),
        }
    }
}

/// A row in the admin vocabulary table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyRowVm {
    pub id: String,
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
    pub lesson_no: u32,
    pub admin_email: String,
}

impl From<&VocabularyItem> for VocabularyRowVm {
    fn from(item: &VocabularyItem) -> Self {
        Self {
            id: item.id().to_string(),
            word: item.word().to_owned(),
            pronunciation: item.pronunciation().to_owned(),
            meaning: item.meaning().to_owned(),
            when_to_say: item.when_to_say().to_owned(),
            lesson_no: item.lesson_no().value(),
            admin_email: item.admin_email().to_owned(),
        }
    }
}

#[must_use]
pub fn map_vocabulary_rows(items: &[VocabularyItem]) -> Vec<VocabularyRowVm> {
    items.iter().map(VocabularyRowVm::from).collect()
}
