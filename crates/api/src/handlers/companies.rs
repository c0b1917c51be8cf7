//! Handlers for the `/companies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tally_core::company::code_from_name;
use tally_db::models::company::{CompanyDetail, CreateCompany, UpdateCompany};
use tally_db::repositories::CompanyRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CompaniesEnvelope, CompanyEnvelope, StatusEnvelope};
use crate::state::AppState;

/// GET /companies
///
/// All companies as `{code, name}`, ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let companies = CompanyRepo::list(&state.pool).await?;

    Ok(Json(CompaniesEnvelope { companies }))
}

/// GET /companies/{code}
///
/// Company detail plus the ids of its invoices.
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let company = CompanyRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::not_found("company", &code))?;

    let invoices = CompanyRepo::invoice_ids(&state.pool, &code).await?;

    Ok(Json(CompanyEnvelope {
        company: CompanyDetail {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        },
    }))
}

/// POST /companies
///
/// The company code is derived from the submitted name; callers never
/// supply it. A duplicate or missing name surfaces as a constraint
/// violation.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<impl IntoResponse> {
    let code = code_from_name(input.name.as_deref().unwrap_or_default());

    let company = CompanyRepo::create(&state.pool, &code, &input).await?;

    tracing::info!(code = %company.code, "Company created");

    Ok((StatusCode::CREATED, Json(CompanyEnvelope { company })))
}

/// PUT /companies/{code}
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<impl IntoResponse> {
    let company = CompanyRepo::update(&state.pool, &code, &input)
        .await?
        .ok_or_else(|| AppError::not_found("company", &code))?;

    Ok(Json(CompanyEnvelope { company }))
}

/// DELETE /companies/{code}
///
/// Returns a status acknowledgement, not the deleted entity.
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = CompanyRepo::delete(&state.pool, &code).await?;

    if !deleted {
        return Err(AppError::not_found("company", &code));
    }

    tracing::info!(code = %code, "Company deleted");

    Ok(Json(StatusEnvelope { status: "Deleted" }))
}
