use std::collections::HashMap;
use std::sync::Arc;

use kotoba_core::model::{LessonNumber, VocabularyDraft, VocabularyId, VocabularyItem};
use storage::repository::VocabularyRepository;
use tracing::info;

use crate::error::VocabularyServiceError;
use crate::Clock;

/// Orchestrates vocabulary listing and the admin vocabulary mutations.
#[derive(Clone)]
pub struct VocabularyService {
    clock: Clock,
    vocabulary: Arc<dyn VocabularyRepository>,
}

impl VocabularyService {
    #[must_use]
    pub fn new(clock: Clock, vocabulary: Arc<dyn VocabularyRepository>) -> Self {
        Self { clock, vocabulary }
    }

    /// List vocabulary for one lesson, or everything when `lesson_no` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if repository access fails.
    pub async fn list_vocabulary(
        &self,
        lesson_no: Option<LessonNumber>,
    ) -> Result<Vec<VocabularyItem>, VocabularyServiceError> {
        let items = self.vocabulary.list_vocabulary(lesson_no).await?;
        Ok(items)
    }

    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if repository access fails.
    pub async fn get_vocabulary(
        &self,
        id: &VocabularyId,
    ) -> Result<Option<VocabularyItem>, VocabularyServiceError> {
        let item = self.vocabulary.get_vocabulary(id).await?;
        Ok(item)
    }

    /// Validate and persist a new vocabulary entry.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Vocabulary` for validation failures.
    /// Returns `VocabularyServiceError::Storage` if persistence fails.
    pub async fn create_vocabulary(
        &self,
        draft: VocabularyDraft,
    ) -> Result<VocabularyItem, VocabularyServiceError> {
        let validated = draft.validate(self.clock.now())?;
        let item = self.vocabulary.insert_vocabulary(validated).await?;
        info!(id = %item.id(), lesson = %item.lesson_no(), "vocabulary created");
        Ok(item)
    }

    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Vocabulary` for validation failures.
    /// Returns `VocabularyServiceError::Storage` if the entry is missing or persistence fails.
    pub async fn update_vocabulary(
        &self,
        id: &VocabularyId,
        draft: VocabularyDraft,
    ) -> Result<VocabularyItem, VocabularyServiceError> {
        let validated = draft.validate(self.clock.now())?;
        let item = self.vocabulary.update_vocabulary(id, validated).await?;
        info!(%id, "vocabulary updated");
        Ok(item)
    }

    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if the entry is missing or deletion fails.
    pub async fn delete_vocabulary(&self, id: &VocabularyId) -> Result<(), VocabularyServiceError> {
        self.vocabulary.delete_vocabulary(id).await?;
        info!(%id, "vocabulary deleted");
        Ok(())
    }

    /// Number of entries attached to one lesson.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if repository access fails.
    pub async fn count_for_lesson(
        &self,
        lesson_no: LessonNumber,
    ) -> Result<usize, VocabularyServiceError> {
        Ok(self.vocabulary.list_vocabulary(Some(lesson_no)).await?.len())
    }

    /// Entry counts for every lesson number in one request.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if repository access fails.
    pub async fn counts_by_lesson(
        &self,
    ) -> Result<HashMap<LessonNumber, usize>, VocabularyServiceError> {
        let items = self.vocabulary.list_vocabulary(None).await?;
        let mut counts = HashMap::new();
        for item in &items {
            *counts.entry(item.lesson_no()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
