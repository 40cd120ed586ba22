use std::env;
use std::time::Duration;

use async_trait::async_trait;
use kotoba_core::model::{
    Lesson, LessonId, LessonNumber, User, UserId, UserRole, ValidatedLesson, ValidatedVocabulary,
    VocabularyId, VocabularyItem,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::repository::{LessonRepository, StorageError, UserRepository, VocabularyRepository};

mod wire;

use wire::{LessonBody, RoleBody, VocabularyBody};

pub const DEFAULT_API_URL: &str = "https://language-backend-omega.vercel.app";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteInitError {
    #[error("invalid API base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base url must be http or https: {0}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Connection settings for the remote lesson API.
#[derive(Clone, Debug)]
pub struct RemoteConfig {
    base_url: Url,
    token: Option<String>,
    timeout: Duration,
}

impl RemoteConfig {
    /// # Errors
    ///
    /// Returns `RemoteInitError` if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, RemoteInitError> {
        let trimmed = base_url.trim();
        // A trailing slash makes `Url::join` append instead of replacing the last segment.
        let normalized = format!("{}/", trimmed.trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|source| RemoteInitError::InvalidBaseUrl {
            raw: trimmed.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(RemoteInitError::UnsupportedScheme(base_url.scheme().to_owned()));
        }
        Ok(Self {
            base_url,
            token: None,
            timeout: Duration::from_secs(15),
        })
    }

    /// Read `KOTOBA_API_URL` and `KOTOBA_API_TOKEN`, defaulting to the hosted API.
    ///
    /// # Errors
    ///
    /// Returns `RemoteInitError` if the configured URL is invalid.
    pub fn from_env() -> Result<Self, RemoteInitError> {
        let base_url = env::var("KOTOBA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let token = env::var("KOTOBA_API_TOKEN").ok();
        Ok(Self::new(&base_url)?.with_token(token))
    }

    /// Blank tokens are treated as absent.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorageError> {
        self.base_url
            .join(path)
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

/// Repository backed by the remote HTTP API.
#[derive(Clone)]
pub struct RemoteRepository {
    client: Client,
    config: RemoteConfig,
}

impl RemoteRepository {
    /// # Errors
    ///
    /// Returns `RemoteInitError::Client` if the HTTP client cannot be built.
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteInitError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.token.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and return the raw body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, StorageError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let status = response.status();
        let url = response.url().clone();
        if !status.is_success() {
            warn!(%url, %status, "remote request failed");
            return Err(match status {
                StatusCode::NOT_FOUND => StorageError::NotFound,
                StatusCode::CONFLICT => StorageError::Conflict(format!("{url} returned 409")),
                other => StorageError::HttpStatus(other.as_u16()),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        debug!(%url, %status, len = bytes.len(), "remote request ok");
        Ok(bytes.to_vec())
    }
}

fn not_found_as_none<T>(result: Result<T, StorageError>) -> Result<Option<T>, StorageError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

#[async_trait]
impl LessonRepository for RemoteRepository {
    async fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        let url = self.config.endpoint("lessons")?;
        let body = self.send(self.client.get(url)).await?;
        wire::lessons_from_json(&body)
    }

    async fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError> {
        let url = self.config.endpoint(&format!("lessons/{id}"))?;
        let body = not_found_as_none(self.send(self.client.get(url)).await)?;
        body.map(|bytes| wire::lesson_from_json(&bytes)).transpose()
    }

    async fn insert_lesson(&self, lesson: ValidatedLesson) -> Result<Lesson, StorageError> {
        let url = self.config.endpoint("lessons")?;
        let body = self
            .send(self.client.post(url).json(&LessonBody::from(&lesson)))
            .await?;
        wire::lesson_from_json(&body)
    }

    async fn update_lesson(
        &self,
        id: &LessonId,
        edit: ValidatedLesson,
    ) -> Result<Lesson, StorageError> {
        let url = self.config.endpoint(&format!("lessons/{id}"))?;
        let body = self
            .send(self.client.put(url).json(&LessonBody::from(&edit)))
            .await?;
        wire::lesson_from_json(&body)
    }

    async fn delete_lesson(&self, id: &LessonId) -> Result<(), StorageError> {
        let url = self.config.endpoint(&format!("lessons/{id}"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl VocabularyRepository for RemoteRepository {
    async fn list_vocabulary(
        &self,
        lesson_no: Option<LessonNumber>,
    ) -> Result<Vec<VocabularyItem>, StorageError> {
        let mut url = self.config.endpoint("vocabularies")?;
        if let Some(no) = lesson_no {
            url.query_pairs_mut().append_pair("lessonNo", &no.to_string());
        }
        let body = self.send(self.client.get(url)).await?;
        wire::vocabulary_from_json(&body)
    }

    async fn get_vocabulary(
        &self,
        id: &VocabularyId,
    ) -> Result<Option<VocabularyItem>, StorageError> {
        let url = self.config.endpoint(&format!("vocabularies/{id}"))?;
        let body = not_found_as_none(self.send(self.client.get(url)).await)?;
        body.map(|bytes| wire::vocabulary_item_from_json(&bytes))
            .transpose()
    }

    async fn insert_vocabulary(
        &self,
        item: ValidatedVocabulary,
    ) -> Result<VocabularyItem, StorageError> {
        let url = self.config.endpoint("vocabularies")?;
        let body = self
            .send(self.client.post(url).json(&VocabularyBody::from(&item)))
            .await?;
        wire::vocabulary_item_from_json(&body)
    }

    async fn update_vocabulary(
        &self,
        id: &VocabularyId,
        edit: ValidatedVocabulary,
    ) -> Result<VocabularyItem, StorageError> {
        let url = self.config.endpoint(&format!("vocabularies/{id}"))?;
        let body = self
            .send(self.client.put(url).json(&VocabularyBody::from(&edit)))
            .await?;
        wire::vocabulary_item_from_json(&body)
    }

    async fn delete_vocabulary(&self, id: &VocabularyId) -> Result<(), StorageError> {
        let url = self.config.endpoint(&format!("vocabularies/{id}"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for RemoteRepository {
    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let url = self.config.endpoint("users")?;
        let body = self.send(self.client.get(url)).await?;
        wire::users_from_json(&body)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        let url = self.config.endpoint(&format!("users/{id}"))?;
        let body = not_found_as_none(self.send(self.client.get(url)).await)?;
        body.map(|bytes| wire::user_from_json(&bytes)).transpose()
    }

    async fn update_user_role(&self, id: &UserId, role: UserRole) -> Result<User, StorageError> {
        let url = self.config.endpoint(&format!("users/{id}"))?;
        let body = self
            .send(self.client.put(url).json(&RoleBody { role }))
            .await?;
        wire::user_from_json(&body)
    }
}
