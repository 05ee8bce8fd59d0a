//! HTTP-backed implementation of the category graph service.
//!
//! Speaks JSON to a category graph service exposing one endpoint per
//! logical operation. How that service stores categories and pages, and
//! what query language it uses internally, is its own business.

use crate::error::{FindError, Result};
use crate::graph::{GraphService, ProblemRow, RowError, RowResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

pub struct HttpGraphService {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct SubcategoryQuery<'a> {
    categories: &'a [String],
}

#[derive(Serialize)]
struct TaggedQuery<'a> {
    categories: &'a [String],
    tags: &'a [String],
}

#[derive(Serialize)]
struct BrokenLinkQuery<'a> {
    categories: &'a [String],
    catalog: &'a [String],
}

#[derive(Deserialize)]
struct SubcategoryReply {
    categories: Vec<String>,
}

#[derive(Deserialize)]
struct RowReply {
    rows: Vec<Value>,
}

impl HttpGraphService {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, 10)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self> {
        // A trailing slash makes Url::join treat the last path segment as
        // a directory.
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url =
            Url::parse(&base).map_err(|e| FindError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .user_agent("catscout/0.1 (https://github.com/catscout/catscout)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| FindError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn post_rows<B: Serialize>(&self, path: &str, body: &B) -> Result<Vec<RowResult>> {
        let url = self.endpoint(path)?;
        debug!("Querying {}", url);
        let reply: RowReply = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(reply.rows.iter().map(extract_row).collect())
    }
}

/// Decode one loose-JSON result row. A row missing either field becomes an
/// `Err` entry so the batch survives.
fn extract_row(value: &Value) -> RowResult {
    let page = value
        .get("page")
        .and_then(Value::as_str)
        .ok_or(RowError::MissingField("page"))?;
    let label = value
        .get("problem")
        .and_then(Value::as_str)
        .ok_or(RowError::MissingField("problem"))?;
    Ok(ProblemRow {
        page: page.to_string(),
        label: label.to_string(),
    })
}

#[async_trait::async_trait]
impl GraphService for HttpGraphService {
    async fn subcategories_of(&self, categories: &[String]) -> Result<Vec<String>> {
        let url = self.endpoint("subcategories")?;
        debug!("Querying {} for {} categories", url, categories.len());
        let reply: SubcategoryReply = self
            .client
            .post(url)
            .json(&SubcategoryQuery { categories })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(reply.categories)
    }

    async fn tagged_pages(&self, categories: &[String], tags: &[String]) -> Result<Vec<RowResult>> {
        self.post_rows("pages/tagged", &TaggedQuery { categories, tags })
            .await
    }

    async fn broken_link_pages(
        &self,
        categories: &[String],
        catalog: &[String],
    ) -> Result<Vec<RowResult>> {
        self.post_rows("pages/broken-links", &BrokenLinkQuery { categories, catalog })
            .await
    }
}
