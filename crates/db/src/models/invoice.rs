//! Invoice model: an amount billed to a company.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tally_core::types::{DbId, Timestamp};

use crate::models::company::Company;

/// A row from the `invoices` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Invoice {
    pub id: DbId,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Timestamp,
    pub paid_date: Option<Timestamp>,
}

/// Listing projection: `id` and `comp_code` only.
#[derive(Debug, Serialize, FromRow)]
pub struct InvoiceListItem {
    pub id: DbId,
    pub comp_code: String,
}

/// Invoice detail: scalar fields plus the joined company row. The company
/// object reflects the current row, not a snapshot taken at creation.
#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: DbId,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Timestamp,
    pub paid_date: Option<Timestamp>,
    pub company: Company,
}

/// DTO for creating an invoice. `paid`, `add_date` and `paid_date` are
/// store-defaulted.
#[derive(Debug, Deserialize)]
pub struct CreateInvoice {
    pub comp_code: Option<String>,
    pub amt: Option<f64>,
}

/// DTO for updating an invoice. `paid_date` is derived from the `paid`
/// transition, never supplied directly.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoice {
    pub amt: Option<f64>,
    pub paid: Option<bool>,
}
