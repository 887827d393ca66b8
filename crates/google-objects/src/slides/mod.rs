//! Google Slides object layer
//!
//! `SlidesApi` fetches raw resources; `Presentation`, `Page` and
//! `PageElement` wrap them for navigation, tag discovery and queued edits.

pub mod api;
pub mod element;
pub mod model;
pub mod page;
pub mod presentation;
pub mod requests;
pub mod table;

pub use api::{SlidesApi, SLIDES_API_BASE};
pub use element::{ElementKind, PageElement, Shape};
pub use model::{
    AffineTransform, Dimension, PageResource, PresentationResource, Size, TableCellLocation,
    TextContent,
};
pub use page::Page;
pub use presentation::Presentation;
pub use requests::{RangeType, SlidesRequest, SubstringMatchCriteria, TextRange};
pub use table::{Table, TableCell};
