//! Axum route handlers for the Fit API.
//!
//! Handlers are thin wrappers: they resolve the template, delegate to the fit
//! engine, and serialize the result. All content semantics live in `fit` and
//! `layout`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::fit::plan::RenderPlan;
use crate::fit::settings::{initial_fit_settings, FitSettings, TemplateId};
use crate::fit::{
    apply_compression_step, apply_fit_constraints, create_render_plan, MAX_COMPRESSION_LEVEL,
};
use crate::layout::{assess_page_fit, run_autofit, EstimatingMeasurer, PageFit};
use crate::models::resume::StructuredResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    pub resume: StructuredResume,
    /// Template name; falls back to the configured default.
    #[serde(default)]
    pub template: Option<String>,
    /// Compression level; 0 when absent. Levels past the ladder clamp.
    #[serde(default)]
    pub compression_level: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct FitSettingsResponse {
    pub template: TemplateId,
    pub compression_level: usize,
    pub max_compression_level: usize,
    pub settings: FitSettings,
}

#[derive(Debug, Serialize)]
pub struct RenderPlanResponse {
    pub plan: RenderPlan,
    pub max_compression_level: usize,
    /// Estimator's verdict on the primary page at this level.
    pub page_fit: PageFit,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub resume: StructuredResume,
    pub settings: FitSettings,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub resume: StructuredResume,
}

#[derive(Debug, Deserialize)]
pub struct AutofitRequest {
    pub resume: StructuredResume,
    #[serde(default)]
    pub template: Option<String>,
    /// Page budget the caller is willing to accept. Defaults to 1.
    #[serde(default)]
    pub max_pages: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct AutofitResponse {
    pub compression_level: usize,
    pub page_count: u8,
    pub passes: u8,
    pub fits_single_page: bool,
    /// Whether the settled page count is within the requested budget.
    pub within_page_budget: bool,
    pub plan: RenderPlan,
}

#[derive(Debug, Serialize)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub settings: FitSettings,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/fit/templates
///
/// Lists the available templates with their default budgets.
pub async fn handle_list_templates() -> Json<Vec<TemplateDescriptor>> {
    Json(
        TemplateId::ALL
            .into_iter()
            .map(|id| TemplateDescriptor {
                id,
                settings: id.default_settings(),
            })
            .collect(),
    )
}

/// POST /api/v1/fit/settings
///
/// Computes the fit settings for a resume at a compression level.
pub async fn handle_fit_settings(
    State(state): State<AppState>,
    Json(request): Json<FitRequest>,
) -> Result<Json<FitSettingsResponse>, AppError> {
    let template = resolve_template(request.template.as_deref(), &state)?;
    let level = request.compression_level.unwrap_or(0);

    let settings =
        apply_compression_step(&initial_fit_settings(&request.resume, template), level);

    Ok(Json(FitSettingsResponse {
        template,
        compression_level: level.min(MAX_COMPRESSION_LEVEL),
        max_compression_level: MAX_COMPRESSION_LEVEL,
        settings,
    }))
}

/// POST /api/v1/fit/plan
///
/// Builds the paginated render plan for a resume at a compression level.
pub async fn handle_render_plan(
    State(state): State<AppState>,
    Json(request): Json<FitRequest>,
) -> Result<Json<RenderPlanResponse>, AppError> {
    let template = resolve_template(request.template.as_deref(), &state)?;
    let plan = create_render_plan(
        &request.resume,
        template,
        request.compression_level.unwrap_or(0),
    );
    let page_fit = assess_page_fit(&plan, &state.geometry);

    Ok(Json(RenderPlanResponse {
        plan,
        max_compression_level: MAX_COMPRESSION_LEVEL,
        page_fit,
    }))
}

/// POST /api/v1/fit/apply
///
/// Reduces a resume to an explicit budget — the shape handed to a document
/// exporter.
pub async fn handle_apply(
    Json(request): Json<ApplyRequest>,
) -> Result<Json<ApplyResponse>, AppError> {
    Ok(Json(ApplyResponse {
        resume: apply_fit_constraints(&request.resume, &request.settings),
    }))
}

/// POST /api/v1/fit/autofit
///
/// Runs the measure/compress loop and returns the settled outcome.
pub async fn handle_autofit(
    State(state): State<AppState>,
    Json(request): Json<AutofitRequest>,
) -> Result<Json<AutofitResponse>, AppError> {
    let template = resolve_template(request.template.as_deref(), &state)?;
    let max_pages = request.max_pages.unwrap_or(1);
    if max_pages == 0 {
        return Err(AppError::Validation("max_pages must be at least 1".to_string()));
    }

    let measurer = EstimatingMeasurer {
        geometry: &state.geometry,
    };
    let outcome = run_autofit(&request.resume, template, &measurer, &state.geometry);

    Ok(Json(AutofitResponse {
        compression_level: outcome.compression_level,
        page_count: outcome.page_count,
        passes: outcome.passes,
        fits_single_page: outcome.fits_single_page,
        within_page_budget: outcome.page_count <= max_pages,
        plan: outcome.plan,
    }))
}

fn resolve_template(requested: Option<&str>, state: &AppState) -> Result<TemplateId, AppError> {
    match requested {
        Some(name) => name.parse::<TemplateId>().map_err(AppError::Validation),
        None => Ok(state.config.default_template),
    }
}
