//! Presentation
//!
//! Holds the page graph of a `presentations.get` payload and the queue of
//! batch requests built against it.

use std::collections::BTreeSet;
use std::fmt::Display;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::api::SlidesApi;
use super::element::{ElementKind, PageElement};
use super::model::{Dimension, PageResource, PresentationResource, Size};
use super::page::Page;
use super::requests::SlidesRequest;
use crate::common::{GoogleError, GoogleResult};
use crate::google::{BatchUpdate, BatchUpdateResponse, UpdateQueue};

#[derive(Debug)]
pub struct Presentation {
    api: SlidesApi,
    id: String,
    title: Option<String>,
    locale: Option<String>,
    page_size: Size,
    slides: Vec<Page>,
    masters: Vec<Page>,
    layouts: Vec<Page>,
    updates: UpdateQueue<SlidesRequest>,
}

impl Presentation {
    /// Wrap a raw `Presentation` resource
    pub fn from_resource(api: SlidesApi, raw: Value) -> GoogleResult<Self> {
        let resource: PresentationResource = serde_json::from_value(raw)
            .map_err(|e| GoogleError::parse(format!("Unexpected Presentation payload: {}", e)))?;

        let load = |pages: Vec<PageResource>| -> Vec<Page> {
            pages
                .into_iter()
                .map(|p| Page::from_resource(p, false))
                .collect()
        };

        let presentation = Self {
            api,
            id: resource.presentation_id,
            title: resource.title,
            locale: resource.locale,
            page_size: resource.page_size.unwrap_or_default(),
            slides: load(resource.slides),
            masters: load(resource.masters),
            layouts: load(resource.layouts),
            updates: UpdateQueue::new(),
        };

        debug!(
            "Loaded presentation {} with {} slide(s)",
            presentation.id,
            presentation.slides.len()
        );
        Ok(presentation)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn width(&self) -> Option<&Dimension> {
        self.page_size.width.as_ref()
    }

    pub fn height(&self) -> Option<&Dimension> {
        self.page_size.height.as_ref()
    }

    pub fn slides(&self) -> &[Page] {
        &self.slides
    }

    pub fn masters(&self) -> &[Page] {
        &self.masters
    }

    pub fn layouts(&self) -> &[Page] {
        &self.layouts
    }

    pub fn api(&self) -> &SlidesApi {
        &self.api
    }

    /// Iterate over slides
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.slides.iter()
    }

    fn all_pages(&self) -> impl Iterator<Item = &Page> {
        self.slides
            .iter()
            .chain(self.masters.iter())
            .chain(self.layouts.iter())
    }

    /// Find a slide, master or layout by object ID
    pub fn get_page(&self, page_id: &str) -> Option<&Page> {
        self.all_pages().find(|p| p.id() == page_id)
    }

    pub fn get_element(&self, object_id: &str) -> Option<&PageElement> {
        self.all_pages()
            .flat_map(|p| p.elements())
            .find(|e| e.id() == object_id)
    }

    pub fn get_element_mut(&mut self, object_id: &str) -> Option<&mut PageElement> {
        self.slides
            .iter_mut()
            .chain(self.masters.iter_mut())
            .chain(self.layouts.iter_mut())
            .flat_map(|p| p.elements_mut().iter_mut())
            .find(|e| e.id() == object_id)
    }

    fn element_mut(&mut self, object_id: &str) -> GoogleResult<&mut PageElement> {
        self.get_element_mut(object_id)
            .ok_or_else(|| GoogleError::not_found("page element", object_id))
    }

    /// Distinct matches of `pattern` across all shape and table text on the slides
    pub fn find_tags(&self, pattern: &str) -> GoogleResult<BTreeSet<String>> {
        let re = Regex::new(pattern).map_err(|e| {
            GoogleError::invalid_argument(format!("Invalid tag pattern {:?}: {}", pattern, e))
        })?;

        let mut tags = BTreeSet::new();
        for element in self.slides.iter().flat_map(|p| p.elements()) {
            match element.kind() {
                ElementKind::Shape(shape) => tags.extend(shape.seek(&re)),
                ElementKind::Table(table) => tags.extend(table.seek(&re)),
                _ => {}
            }
        }

        debug!("Found {} distinct tag(s) for {}", tags.len(), pattern);
        Ok(tags)
    }

    /// Queue a presentation-wide replacement of `find` with `replace`.
    ///
    /// Returns `false`, queuing nothing, when `find` is empty.
    pub fn replace_text(&mut self, find: &str, replace: impl Display, match_case: bool) -> bool {
        if find.is_empty() {
            return false;
        }

        self.add_update(SlidesRequest::replace_all_text(
            find,
            replace.to_string(),
            match_case,
        ));
        true
    }

    /// Queue `deleteObject` for an element
    pub fn delete_object(&mut self, object_id: &str) -> GoogleResult<()> {
        let request = self.element_mut(object_id)?.delete();
        self.add_update(request);
        Ok(())
    }

    pub fn set_shape_text(&mut self, object_id: &str, text: &str) -> GoogleResult<()> {
        let requests = self.element_mut(object_id)?.set_text(text)?;
        self.add_updates(requests);
        Ok(())
    }

    pub fn delete_shape_text(&mut self, object_id: &str) -> GoogleResult<()> {
        let requests = self.element_mut(object_id)?.clear_text()?;
        self.add_updates(requests);
        Ok(())
    }

    pub fn set_cell_text(
        &mut self,
        table_id: &str,
        row: u32,
        column: u32,
        text: &str,
    ) -> GoogleResult<()> {
        let requests = self.element_mut(table_id)?.set_cell_text(row, column, text)?;
        self.add_updates(requests);
        Ok(())
    }

    pub fn delete_cell_text(&mut self, table_id: &str, row: u32, column: u32) -> GoogleResult<()> {
        let requests = self.element_mut(table_id)?.clear_cell_text(row, column)?;
        self.add_updates(requests);
        Ok(())
    }
}

impl BatchUpdate for Presentation {
    type Request = SlidesRequest;

    fn updates(&self) -> &UpdateQueue<SlidesRequest> {
        &self.updates
    }

    fn updates_mut(&mut self) -> &mut UpdateQueue<SlidesRequest> {
        &mut self.updates
    }

    async fn push_updates(&self, requests: &[SlidesRequest]) -> GoogleResult<BatchUpdateResponse> {
        self.api.push_updates(&self.id, requests).await
    }
}

impl<'a> IntoIterator for &'a Presentation {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

impl Drop for Presentation {
    fn drop(&mut self) {
        if !self.updates.is_empty() {
            warn!(
                "Presentation {} dropped with {} unsent update(s)",
                self.id,
                self.updates.len()
            );
        }
    }
}
