//! Company model: a business identified by a URL-safe code.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tally_core::types::DbId;

/// A row from the `companies` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Listing projection: `code` and `name` only.
#[derive(Debug, Serialize, FromRow)]
pub struct CompanyListItem {
    pub code: String,
    pub name: String,
}

/// Company detail: the row plus the ids of its invoices, ascending.
#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<DbId>,
}

/// DTO for creating a company. The `code` is derived server-side from
/// `name` and never accepted from the caller.
#[derive(Debug, Deserialize)]
pub struct CreateCompany {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating a company. The `code` is immutable; both remaining
/// fields are replaced wholesale.
#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub description: Option<String>,
}
