//! Page
//!
//! A slide, master, layout or notes page and its (flattened) elements.

use super::element::{PageElement, Shape};
use super::model::PageResource;
use super::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    id: String,
    page_type: Option<String>,
    elements: Vec<PageElement>,
    read_only: bool,
}

impl Page {
    /// Wrap a page resource. `read_only` marks pages fetched on their own,
    /// outside any presentation, which have nowhere to queue edits.
    pub fn from_resource(resource: PageResource, read_only: bool) -> Self {
        let mut elements = Vec::with_capacity(resource.page_elements.len());
        for element in resource.page_elements {
            PageElement::load(element, &mut elements);
        }

        Self {
            id: resource.object_id,
            page_type: resource.page_type,
            elements,
            read_only,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `SLIDE`, `MASTER`, `LAYOUT`, `NOTES` or `NOTES_MASTER`
    pub fn page_type(&self) -> Option<&str> {
        self.page_type.as_deref()
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [PageElement] {
        &mut self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageElement> {
        self.elements.iter()
    }

    pub fn get_element(&self, object_id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id() == object_id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.elements.iter().filter_map(PageElement::as_shape)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(PageElement::as_table)
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a PageElement;
    type IntoIter = std::slice::Iter<'a, PageElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
