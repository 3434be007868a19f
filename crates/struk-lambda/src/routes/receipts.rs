use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use struk_core::models::batch::BatchRequest;
use struk_export::error::ExportError;
use struk_export::pdf::render_pdf;

use crate::error::ApiError;
use crate::state::AppState;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const PDF_DISPOSITION: &str = "attachment; filename=\"struk.pdf\"";

/// Render a batch of transactions into one multi-page receipt PDF.
///
/// Malformed JSON is answered with a 400 carrying the parser detail.
/// `lambda_http` base64-encodes the binary body on the way out.
pub async fn generate_pdf(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let batch = BatchRequest::from_json(&body)?;
    let render_id = Uuid::new_v4();
    tracing::info!(%render_id, receipts = batch.len(), "rendering receipt batch");

    let html = state.formatter.assemble(&batch)?;
    let pdf = render_document(&state, html).await?;

    tracing::info!(%render_id, bytes = pdf.len(), "receipt batch rendered");
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, PDF_CONTENT_TYPE), (CONTENT_DISPOSITION, PDF_DISPOSITION)],
        pdf,
    ))
}

/// Return the assembled HTML for a batch without launching the browser.
pub async fn preview(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Html<String>, ApiError> {
    let batch = BatchRequest::from_json(&body)?;
    Ok(Html(state.formatter.assemble(&batch)?))
}

/// The engine API blocks, so the whole acquire/render/release cycle runs on
/// a blocking worker.
async fn render_document(state: &AppState, html: String) -> Result<Vec<u8>, ExportError> {
    let engine = Arc::clone(&state.engine);
    let launch = state.launch.clone();
    let page = state.page;

    tokio::task::spawn_blocking(move || render_pdf(engine.as_ref(), &launch, &html, &page))
        .await
        .map_err(|e| ExportError::Worker(e.to_string()))?
}
