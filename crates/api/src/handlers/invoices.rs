//! Handlers for the `/invoices` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tally_core::types::DbId;
use tally_db::models::invoice::{CreateInvoice, UpdateInvoice};
use tally_db::repositories::InvoiceRepo;

use crate::error::{AppError, AppResult};
use crate::response::{InvoiceEnvelope, InvoicesEnvelope, StatusEnvelope};
use crate::state::AppState;

/// GET /invoices
///
/// All invoices as `{id, comp_code}`, ordered by id.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let invoices = InvoiceRepo::list(&state.pool).await?;

    Ok(Json(InvoicesEnvelope { invoices }))
}

/// GET /invoices/{id}
///
/// Invoice detail with the joined company object.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let invoice = InvoiceRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("invoice", id))?;

    Ok(Json(InvoiceEnvelope { invoice }))
}

/// POST /invoices
///
/// Inserts with store-defaulted `paid`, `add_date` and `paid_date`; a
/// dangling `comp_code` surfaces as a constraint violation. Responds 200,
/// not 201.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoice>,
) -> AppResult<impl IntoResponse> {
    let invoice = InvoiceRepo::create(&state.pool, &input).await?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "Invoice created");

    Ok(Json(InvoiceEnvelope { invoice }))
}

/// PUT /invoices/{id}
///
/// Updates `amt` and `paid`; `paid_date` is derived from the paid flag
/// transition, never taken from the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvoice>,
) -> AppResult<impl IntoResponse> {
    let invoice = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("invoice", id))?;

    Ok(Json(InvoiceEnvelope { invoice }))
}

/// DELETE /invoices/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = InvoiceRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::not_found("invoice", id));
    }

    tracing::info!(id, "Invoice deleted");

    Ok(Json(StatusEnvelope { status: "Deleted" }))
}
