//! Axum route handlers for the Document API.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::assemble;
use crate::document::service::{assemble_batch, build_document, AssembledDocument, BatchItem};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::render::PreviewFormat;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchAssembleRequest {
    /// Parsed per item so one malformed record cannot reject the whole batch.
    pub records: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct BatchAssembleResponse {
    pub results: Vec<BatchItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub format: PreviewFormat,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/assemble
///
/// Assembles one tailored résumé into an ordered block sequence for the renderer.
pub async fn handle_assemble(
    Json(record): Json<ResumeRecord>,
) -> Result<Json<AssembledDocument>, AppError> {
    let document = build_document(&record)?;
    info!(
        document_id = %document.document_id,
        blocks = document.block_count,
        "Document assembled"
    );
    Ok(Json(document))
}

/// POST /api/v1/documents/assemble/batch
///
/// Assembles one résumé per job posting. Items are processed with bounded
/// concurrency and returned in input order; invalid items are reported inline.
pub async fn handle_assemble_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAssembleRequest>,
) -> Result<Json<BatchAssembleResponse>, AppError> {
    if request.records.is_empty() {
        return Err(AppError::Validation("records cannot be empty".to_string()));
    }
    let max = state.config.batch_max_records;
    if request.records.len() > max {
        return Err(AppError::UnprocessableEntity(format!(
            "batch of {} records exceeds the limit of {max}",
            request.records.len()
        )));
    }

    let results = assemble_batch(
        request.records,
        state.batch_limiter.clone(),
        state.config.assembly_timeout,
    )
    .await?;

    Ok(Json(BatchAssembleResponse { results }))
}

/// POST /api/v1/documents/preview?format=markdown|text
///
/// Renders the assembled blocks as a textual preview.
pub async fn handle_preview(
    Query(query): Query<PreviewQuery>,
    Json(record): Json<ResumeRecord>,
) -> Result<Response, AppError> {
    let blocks = assemble(&record)?;
    let renderer = query.format.renderer();
    let body = renderer.render(&blocks);
    Ok(([(header::CONTENT_TYPE, renderer.content_type())], body).into_response())
}
