//! The category graph service boundary.
//!
//! The finder never talks to storage directly; everything it knows about
//! categories and pages comes through this trait. All three operations are
//! batched, idempotent, side-effect-free reads.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One (page, problem label) association returned by a problem query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRow {
    pub page: String,
    pub label: String,
}

/// A single result row failed to decode. The batch as a whole is still
/// usable; the aggregator logs and skips these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing field '{0}' in result row")]
    MissingField(&'static str),

    #[error("malformed result row: {0}")]
    Malformed(String),
}

/// A problem query yields a batch of rows, each of which may individually
/// have failed to decode.
pub type RowResult = std::result::Result<ProblemRow, RowError>;

#[async_trait::async_trait]
pub trait GraphService: Send + Sync {
    /// Direct subcategories of the given categories, as one batch.
    async fn subcategories_of(&self, categories: &[String]) -> Result<Vec<String>>;

    /// Pages inside the given categories carrying any of the given
    /// maintenance tags.
    async fn tagged_pages(&self, categories: &[String], tags: &[String]) -> Result<Vec<RowResult>>;

    /// Pages inside the given categories that are also listed in the
    /// broken-citation catalog.
    async fn broken_link_pages(
        &self,
        categories: &[String],
        catalog: &[String],
    ) -> Result<Vec<RowResult>>;
}
