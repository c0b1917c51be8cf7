//! Repository for the `invoices` table.

use chrono::Utc;
use sqlx::{FromRow, PgPool};
use tally_core::invoice::derive_paid_date;
use tally_core::types::{DbId, Timestamp};

use crate::models::company::Company;
use crate::models::invoice::{
    CreateInvoice, Invoice, InvoiceDetail, InvoiceListItem, UpdateInvoice,
};

/// Column list for invoices queries.
const COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// Flat projection of the invoices/companies join.
#[derive(FromRow)]
struct InvoiceCompanyRow {
    id: DbId,
    comp_code: String,
    amt: f64,
    paid: bool,
    add_date: Timestamp,
    paid_date: Option<Timestamp>,
    name: String,
    description: Option<String>,
}

impl From<InvoiceCompanyRow> for InvoiceDetail {
    fn from(row: InvoiceCompanyRow) -> Self {
        InvoiceDetail {
            id: row.id,
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
            company: Company {
                code: row.comp_code,
                name: row.name,
                description: row.description,
            },
        }
    }
}

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// List all invoices, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<InvoiceListItem>, sqlx::Error> {
        sqlx::query_as::<_, InvoiceListItem>("SELECT id, comp_code FROM invoices ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Find an invoice by id, joined to its company row.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InvoiceDetail>, sqlx::Error> {
        let row = sqlx::query_as::<_, InvoiceCompanyRow>(
            "SELECT i.id, i.comp_code, i.amt, i.paid, i.add_date, i.paid_date,
                    c.name, c.description
             FROM invoices AS i
             INNER JOIN companies AS c ON i.comp_code = c.code
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(InvoiceDetail::from))
    }

    /// Insert an invoice, returning the created row with its generated id
    /// and defaulted `paid`, `add_date` and `paid_date`.
    ///
    /// A dangling `comp_code` or missing field comes back as a
    /// `sqlx::Error::Database` constraint violation.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (comp_code, amt)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(&input.comp_code)
            .bind(input.amt)
            .fetch_one(pool)
            .await
    }

    /// Update an invoice's amount and paid flag, deriving `paid_date` from
    /// the flag transition. Returns `None` when the id does not exist.
    ///
    /// The read and the write are two separate round trips, not a
    /// transaction; two concurrent updates to the same invoice can
    /// interleave between them.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let current: Option<(Option<Timestamp>,)> =
            sqlx::query_as("SELECT paid_date FROM invoices WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        let Some((current_paid_date,)) = current else {
            return Ok(None);
        };

        // A missing paid flag skips derivation and is bound as NULL below,
        // failing the NOT NULL constraint.
        let paid_date = match input.paid {
            Some(paid) => derive_paid_date(current_paid_date, paid, Utc::now()),
            None => current_paid_date,
        };

        let query = format!(
            "UPDATE invoices SET amt = $2, paid = $3, paid_date = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.amt)
            .bind(input.paid)
            .bind(paid_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invoice by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
