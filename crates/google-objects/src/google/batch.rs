//! Batch Update Queue
//!
//! Top-level resources (spreadsheets, presentations) collect mutation requests
//! locally and send them as a single `batchUpdate` call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::common::GoogleResult;

/// Ordered queue of pending batch requests
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQueue<R> {
    requests: Vec<R>,
}

impl<R> Default for UpdateQueue<R> {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
        }
    }
}

impl<R> UpdateQueue<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: R) {
        self.requests.push(request);
    }

    pub fn extend<I: IntoIterator<Item = R>>(&mut self, requests: I) {
        self.requests.extend(requests);
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.requests.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.requests
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

/// Body of a `batchUpdate` call
#[derive(Debug, Serialize)]
pub struct BatchUpdateRequest<'a, R> {
    pub requests: &'a [R],
}

/// Response of a `batchUpdate` call (Sheets and Slides share this shape)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_id: Option<String>,
    #[serde(default)]
    pub replies: Vec<Value>,
}

/// A resource that queues requests and flushes them in one batch
#[allow(async_fn_in_trait)]
pub trait BatchUpdate {
    type Request: Serialize;

    fn updates(&self) -> &UpdateQueue<Self::Request>;

    fn updates_mut(&mut self) -> &mut UpdateQueue<Self::Request>;

    /// Send `requests` to the API as one batch call
    async fn push_updates(&self, requests: &[Self::Request]) -> GoogleResult<BatchUpdateResponse>;

    fn add_update(&mut self, request: Self::Request) {
        self.updates_mut().push(request);
    }

    fn add_updates<I>(&mut self, requests: I)
    where
        I: IntoIterator<Item = Self::Request>,
    {
        self.updates_mut().extend(requests);
    }

    /// Requests queued since the last successful flush
    fn pending(&self) -> &[Self::Request] {
        self.updates().as_slice()
    }

    /// Flush the queue.
    ///
    /// Returns `Ok(None)` without a network call when nothing is queued. The
    /// queue is cleared only after the batch call succeeds.
    async fn update(&mut self) -> GoogleResult<Option<BatchUpdateResponse>> {
        if self.updates().is_empty() {
            debug!("No queued updates to flush");
            return Ok(None);
        }

        let count = self.updates().len();
        let response = self.push_updates(self.updates().as_slice()).await?;
        self.updates_mut().clear();

        info!("Flushed {} queued update(s)", count);
        Ok(Some(response))
    }

    /// Run `f` against the resource, then flush whatever it queued
    async fn scoped<F, T>(&mut self, f: F) -> GoogleResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> T,
    {
        let out = f(self);
        self.update().await?;
        Ok(out)
    }
}
