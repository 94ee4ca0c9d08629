//! DynamoDB-backed prediction store (`aws-sdk-dynamodb`).
//!
//! Region and credentials come from the ambient AWS environment. A scan
//! follows `LastEvaluatedKey` until the table is exhausted, so large tables
//! are returned whole rather than cut at the first 1 MB page.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use monitoring_core::error::{MonitoringError, Result};
use monitoring_core::model::PredictionRecord;

use super::PredictionStore;

const SENTIMENT_ATTR: &str = "sentiment";
const CONFIDENCE_ATTR: &str = "confidence";

#[derive(Clone)]
pub struct DynamoPredictionStore {
    client: Client,
}

impl DynamoPredictionStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_env() -> Self {
        let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&shared))
    }
}

type Item = HashMap<String, AttributeValue>;

/// One page of a scan: its items and the key to resume from, if any.
#[derive(Debug, Default, Clone)]
pub(crate) struct ScanPage {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Item>,
}

/// Fetches a single scan page starting after `start_key`.
#[async_trait]
pub(crate) trait PageSource: Send + Sync {
    async fn page(&self, table: &str, start_key: Option<Item>) -> Result<ScanPage>;
}

#[async_trait]
impl PageSource for Client {
    async fn page(&self, table: &str, start_key: Option<Item>) -> Result<ScanPage> {
        let out = self
            .scan()
            .table_name(table)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(|e| {
                MonitoringError::StoreUnavailable(DisplayErrorContext(&e).to_string())
            })?;

        Ok(ScanPage {
            items: out.items().to_vec(),
            last_evaluated_key: out.last_evaluated_key().cloned(),
        })
    }
}

/// Follow `LastEvaluatedKey` until it is absent or empty.
pub(crate) async fn scan_all(
    source: &dyn PageSource,
    table: &str,
) -> Result<Vec<PredictionRecord>> {
    let mut records = Vec::new();
    let mut start_key: Option<Item> = None;
    let mut pages: u32 = 0;

    loop {
        let page = source.page(table, start_key.take()).await?;
        pages += 1;
        records.extend(page.items.iter().map(record_from_item));

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    tracing::debug!(%table, pages, items = records.len(), "dynamodb scan complete");
    Ok(records)
}

#[async_trait]
impl PredictionStore for DynamoPredictionStore {
    async fn scan(&self, table: &str) -> Result<Vec<PredictionRecord>> {
        scan_all(&self.client, table).await
    }
}

/// `sentiment` must be a string attribute; `confidence` may be stored as a
/// number or as a string, both carry decimal text.
fn record_from_item(item: &Item) -> PredictionRecord {
    PredictionRecord {
        sentiment: item.get(SENTIMENT_ATTR).and_then(|v| v.as_s().ok()).cloned(),
        confidence: item.get(CONFIDENCE_ATTR).and_then(|v| match v {
            AttributeValue::N(n) | AttributeValue::S(n) => Some(n.clone()),
            _ => None,
        }),
    }
}
