//! Export pipeline: normalize → render → assemble.
//!
//! Rendering is CPU-bound string assembly and runs inside
//! `tokio::task::spawn_blocking`. A panic there surfaces as `AppError::Render`
//! with the panic message as detail; nothing is retried.

use tracing::info;

use crate::errors::AppError;
use crate::export::model::CanonicalRenderModel;
use crate::export::normalize::{normalize_resume, select_template};
use crate::export::print::{assemble_print_document, PrintDocument, PrintOptions};
use crate::export::templates::{render_template, TemplateKey};
use crate::store::ResumeBundle;

/// Canonical model plus the template it will be rendered with.
pub struct PreparedExport {
    pub model: CanonicalRenderModel,
    pub template: TemplateKey,
}

pub fn prepare_export(
    bundle: &ResumeBundle,
    origin: &str,
    requested_template: Option<&str>,
) -> PreparedExport {
    let key = select_template(
        requested_template,
        bundle.resume.resume.template.as_deref(),
    );
    PreparedExport {
        model: normalize_resume(&bundle.resume, &bundle.profile, origin),
        template: TemplateKey::resolve(&key),
    }
}

/// Synchronous export of one resume into a print-ready document.
pub fn render_export(
    bundle: &ResumeBundle,
    origin: &str,
    requested_template: Option<&str>,
    options: PrintOptions,
) -> PrintDocument {
    let PreparedExport { model, template } = prepare_export(bundle, origin, requested_template);
    let body = render_template(&model, template.as_str());
    assemble_print_document(&model.title, &body, options)
}

pub async fn export_resume_html(
    bundle: ResumeBundle,
    origin: String,
    requested_template: Option<String>,
    options: PrintOptions,
) -> Result<PrintDocument, AppError> {
    let resume_id = bundle.resume.resume.id;

    let document = tokio::task::spawn_blocking(move || {
        render_export(&bundle, &origin, requested_template.as_deref(), options)
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            AppError::Render(panic_detail(e.into_panic()))
        } else {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}"))
        }
    })?;

    info!(
        "Exported resume {resume_id} ({} bytes, auto_print={})",
        document.html.len(),
        options.auto_print
    );
    Ok(document)
}

fn panic_detail(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "renderer panicked".to_string()
    }
}
