//! Google Slides API v1 Client
//!
//! Provides methods for interacting with Google Slides API:
//! - Get/create presentations
//! - Fetch single pages
//! - Submit batched updates

use serde_json::{json, Value};
use tracing::info;

use super::model::PageResource;
use super::page::Page;
use super::presentation::Presentation;
use super::requests::SlidesRequest;
use crate::common::{GoogleError, GoogleResult};
use crate::google::{BatchUpdateRequest, BatchUpdateResponse, GoogleClient};

pub const SLIDES_API_BASE: &str = "https://slides.googleapis.com/v1";

#[derive(Debug, Clone)]
pub struct SlidesApi {
    client: GoogleClient,
    base_url: String,
}

crate::google::google_api_wrapper!(SlidesApi, SLIDES_API_BASE, slides_base_url);

fn parse<T: serde::de::DeserializeOwned>(raw: Value, what: &str) -> GoogleResult<T> {
    serde_json::from_value(raw)
        .map_err(|e| GoogleError::parse(format!("Unexpected {} payload: {}", what, e)))
}

impl SlidesApi {
    fn presentation_url(&self, presentation_id: &str) -> String {
        format!(
            "{}/presentations/{}",
            self.base_url,
            urlencoding::encode(presentation_id)
        )
    }

    /// Fetch a presentation and wrap it
    pub async fn get_presentation(&self, presentation_id: &str) -> GoogleResult<Presentation> {
        info!("Fetching presentation: {}", presentation_id);

        let raw = self
            .client
            .get(&self.presentation_url(presentation_id), &[])
            .await?;
        Presentation::from_resource(self.clone(), raw)
    }

    /// Fetch one page on its own. The result is read-only.
    pub async fn get_page(&self, presentation_id: &str, page_id: &str) -> GoogleResult<Page> {
        info!("Fetching page {} of presentation: {}", page_id, presentation_id);

        let url = format!(
            "{}/pages/{}",
            self.presentation_url(presentation_id),
            urlencoding::encode(page_id)
        );
        let raw = self.client.get(&url, &[]).await?;
        let resource: PageResource = parse(raw, "Page")?;
        Ok(Page::from_resource(resource, true))
    }

    /// Create an empty presentation
    pub async fn create_presentation(&self, title: &str) -> GoogleResult<Presentation> {
        info!("Creating presentation: {}", title);

        let url = format!("{}/presentations", self.base_url);
        let raw = self
            .client
            .post(&url, &[], &json!({ "title": title }))
            .await?;
        Presentation::from_resource(self.clone(), raw)
    }

    /// Submit a list of requests as one `batchUpdate`
    pub async fn push_updates(
        &self,
        presentation_id: &str,
        requests: &[SlidesRequest],
    ) -> GoogleResult<BatchUpdateResponse> {
        info!(
            "Submitting {} request(s) to presentation: {}",
            requests.len(),
            presentation_id
        );

        let url = format!("{}:batchUpdate", self.presentation_url(presentation_id));
        let raw = self
            .client
            .post(&url, &[], &BatchUpdateRequest { requests })
            .await?;
        parse(raw, "BatchUpdateResponse")
    }
}
