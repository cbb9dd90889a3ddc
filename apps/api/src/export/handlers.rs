//! Axum route handlers for the Export API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::model::CanonicalRenderModel;
use crate::export::pipeline::{export_resume_html, prepare_export, PreparedExport};
use crate::export::print::{PrintDocument, PrintOptions};
use crate::export::templates::{TemplateKey, DEFAULT_TEMPLATE};
use crate::extractors::{OwnerId, RequestOrigin};
use crate::state::AppState;
use crate::store::ResumeBundle;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderModelResponse {
    pub template: TemplateKey,
    pub model: CanonicalRenderModel,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<&'static str>,
    pub default: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Resume ids are UUIDs; anything else cannot name a stored resume.
fn parse_resume_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound(format!("Resume {raw} not found")))
}

async fn load_bundle(
    state: &AppState,
    raw_id: &str,
    owner: OwnerId,
) -> Result<ResumeBundle, AppError> {
    let resume_id = parse_resume_id(raw_id)?;
    state
        .store
        .fetch_for_owner(resume_id, owner.0)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

/// GET /api/v1/resumes/:id/export
///
/// Printable HTML document that opens the print dialog once loaded.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
    Query(query): Query<ExportQuery>,
    owner: OwnerId,
    RequestOrigin(origin): RequestOrigin,
) -> Result<PrintDocument, AppError> {
    let bundle = load_bundle(&state, &resume_id, owner).await?;
    let options = PrintOptions {
        auto_print: true,
        delay_ms: state.config.print_delay_ms,
    };
    export_resume_html(bundle, origin, query.template, options).await
}

/// GET /api/v1/resumes/:id/preview
///
/// Same document as `/export` without the print trigger.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
    Query(query): Query<ExportQuery>,
    owner: OwnerId,
    RequestOrigin(origin): RequestOrigin,
) -> Result<PrintDocument, AppError> {
    let bundle = load_bundle(&state, &resume_id, owner).await?;
    let options = PrintOptions {
        auto_print: false,
        delay_ms: state.config.print_delay_ms,
    };
    export_resume_html(bundle, origin, query.template, options).await
}

/// GET /api/v1/resumes/:id/render-model
///
/// The canonical model and resolved template, for client-side renderers.
pub async fn handle_render_model(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
    Query(query): Query<ExportQuery>,
    owner: OwnerId,
    RequestOrigin(origin): RequestOrigin,
) -> Result<Json<RenderModelResponse>, AppError> {
    let bundle = load_bundle(&state, &resume_id, owner).await?;
    let PreparedExport { model, template } =
        prepare_export(&bundle, &origin, query.template.as_deref());
    Ok(Json(RenderModelResponse { template, model }))
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: TemplateKey::all().iter().map(|t| t.as_str()).collect(),
        default: DEFAULT_TEMPLATE,
    })
}
