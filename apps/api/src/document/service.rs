//! Assembly as a service: response envelopes and bounded-concurrency batches.
//!
//! # spawn_blocking pattern
//! Assembly is CPU-only. Batch items run on the blocking pool so a large batch
//! never stalls the async executor. A semaphore caps how many run at once and
//! each item has its own timeout; one failing item never fails the batch.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::document::assembler::{assemble_sections, AssemblyError};
use crate::document::block::DocumentBlock;
use crate::document::sections::SectionKind;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// An assembled document ready for an external renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledDocument {
    pub document_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub block_count: usize,
    /// Sections that made it into the document, in order.
    pub sections: Vec<SectionKind>,
    pub blocks: Vec<DocumentBlock>,
}

/// Outcome for one record of a batch. Exactly one of `document` / `error` is set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<AssembledDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItem {
    fn succeeded(index: usize, document: AssembledDocument) -> Self {
        Self {
            index,
            document: Some(document),
            error: None,
        }
    }

    fn failed(index: usize, error: impl Into<String>) -> Self {
        Self {
            index,
            document: None,
            error: Some(error.into()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Single document
// ────────────────────────────────────────────────────────────────────────────

/// Assembles one record and wraps it with an id and timestamp.
pub fn build_document(record: &ResumeRecord) -> Result<AssembledDocument, AssemblyError> {
    let sections = assemble_sections(record)?;
    let kinds = sections.iter().map(|s| s.kind).collect();
    let blocks: Vec<DocumentBlock> = sections.into_iter().flat_map(|s| s.blocks).collect();

    Ok(AssembledDocument {
        document_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        block_count: blocks.len(),
        sections: kinds,
        blocks,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Batch
// ────────────────────────────────────────────────────────────────────────────

/// Assembles every raw record with at most `limiter`'s permits in flight.
///
/// Results come back in input order. Records that fail to parse, invalid
/// records and timeouts are reported per item; only an infrastructure failure
/// (a panicked task, a closed semaphore) fails the whole call.
pub async fn assemble_batch(
    records: Vec<Value>,
    limiter: Arc<Semaphore>,
    item_timeout: Duration,
) -> Result<Vec<BatchItem>, AppError> {
    run_batch(records, limiter, item_timeout, |raw| {
        let record: ResumeRecord =
            serde_json::from_value(raw).map_err(|e| format!("invalid record: {e}"))?;
        build_document(&record).map_err(|e| e.to_string())
    })
    .await
}

/// Runs `work` once per input on the blocking pool.
///
/// The permit moves into the blocking closure, so a timed-out item keeps its
/// slot until the work actually returns.
async fn run_batch<I, F>(
    inputs: Vec<I>,
    limiter: Arc<Semaphore>,
    item_timeout: Duration,
    work: F,
) -> Result<Vec<BatchItem>, AppError>
where
    I: Send + 'static,
    F: Fn(I) -> Result<AssembledDocument, String> + Send + Sync + 'static,
{
    let total = inputs.len();
    let work = Arc::new(work);
    let mut tasks = JoinSet::new();

    for (index, input) in inputs.into_iter().enumerate() {
        let limiter = Arc::clone(&limiter);
        let work = Arc::clone(&work);
        tasks.spawn(async move {
            let permit = limiter
                .acquire_owned()
                .await
                .map_err(|e| anyhow::anyhow!("batch limiter closed: {e}"))?;

            let job = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                (*work)(input)
            });

            let item = match tokio::time::timeout(item_timeout, job).await {
                Ok(Ok(Ok(document))) => BatchItem::succeeded(index, document),
                Ok(Ok(Err(e))) => BatchItem::failed(index, e),
                Ok(Err(e)) => {
                    return Err(anyhow::anyhow!(
                        "spawn_blocking failed assembling item {index}: {e}"
                    ))
                }
                Err(_) => {
                    warn!(index, timeout_ms = item_timeout.as_millis() as u64, "Assembly timed out");
                    BatchItem::failed(
                        index,
                        format!("assembly timed out after {}ms", item_timeout.as_millis()),
                    )
                }
            };
            Ok::<BatchItem, anyhow::Error>(item)
        });
    }

    let mut items = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        let item = joined.map_err(|e| anyhow::anyhow!("batch task failed: {e}"))??;
        items.push(item);
    }
    items.sort_by_key(|item| item.index);

    let failed = items.iter().filter(|i| i.error.is_some()).count();
    info!(total, failed, "Batch assembly finished");

    Ok(items)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
