use std::time::Duration;

use queue_core::{EntryId, EntryUpdate, NewEntry, QueueEntry};

use crate::types::{map_reqwest_error, ApiError};
use crate::wire::{ArchiveBody, CreateBody, ModifyBody, QueueEnvelope};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Root of the queue plugin routes, e.g.
    /// `http://127.0.0.1:5000/plugin/queue/`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/plugin/queue/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Remote queue endpoint. Every mutating call returns the complete,
/// authoritative collection, never a delta.
#[async_trait::async_trait]
pub trait QueueApi: Send + Sync {
    async fn fetch_queue(&self, force: bool) -> Result<Vec<QueueEntry>, ApiError>;
    async fn add_to_queue(&self, entry: &NewEntry) -> Result<Vec<QueueEntry>, ApiError>;
    async fn modify_item(&self, update: &EntryUpdate) -> Result<Vec<QueueEntry>, ApiError>;
    async fn set_archived(&self, id: EntryId, archived: bool)
        -> Result<Vec<QueueEntry>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestQueueApi {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl ReqwestQueueApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        // Url::join drops the last path segment unless the base ends
        // with a slash.
        let mut base_url = settings.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base = reqwest::Url::parse(&base_url)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, route: &str) -> Result<reqwest::Url, ApiError> {
        self.base
            .join(route)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))
    }

    async fn read_queue(response: reqwest::Response) -> Result<Vec<QueueEntry>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let envelope: QueueEnvelope = response
            .json()
            .await
            .map_err(|err| ApiError::Body(err.to_string()))?;
        Ok(envelope.into_entries())
    }
}

#[async_trait::async_trait]
impl QueueApi for ReqwestQueueApi {
    async fn fetch_queue(&self, force: bool) -> Result<Vec<QueueEntry>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("queue")?)
            .query(&[("force", force)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_queue(response).await
    }

    async fn add_to_queue(&self, entry: &NewEntry) -> Result<Vec<QueueEntry>, ApiError> {
        let response = self
            .client
            .put(self.endpoint("addtoqueue")?)
            .json(&CreateBody::from(entry))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_queue(response).await
    }

    async fn modify_item(&self, update: &EntryUpdate) -> Result<Vec<QueueEntry>, ApiError> {
        let response = self
            .client
            .put(self.endpoint("modifyitem")?)
            .json(&ModifyBody::from(update))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_queue(response).await
    }

    async fn set_archived(
        &self,
        id: EntryId,
        archived: bool,
    ) -> Result<Vec<QueueEntry>, ApiError> {
        let body = ArchiveBody {
            id,
            archived: archived.into(),
        };
        let response = self
            .client
            .put(self.endpoint("archive")?)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_queue(response).await
    }
}
