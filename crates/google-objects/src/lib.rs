//! Typed object layer over the Google Sheets and Slides REST APIs.
//!
//! Resources are fetched once and wrapped in navigable objects. Structural
//! edits are queued locally and sent as a single `batchUpdate` when the
//! caller flushes.

pub mod auth;
pub mod common;
pub mod config;
pub mod google;
pub mod sheets;
pub mod slides;

pub use auth::Credentials;
pub use common::{ErrorCode, GoogleError, GoogleResult};
pub use config::Config;
pub use google::{BatchUpdate, BatchUpdateResponse, GoogleClient, UpdateQueue};
pub use sheets::{Block, NamedRange, Sheet, SheetsApi, Spreadsheet};
pub use slides::{Page, PageElement, Presentation, SlidesApi};
