//! Repository for the `companies` table.

use sqlx::PgPool;
use tally_core::types::DbId;

use crate::models::company::{Company, CompanyListItem, CreateCompany, UpdateCompany};

/// Column list for companies queries.
const COLUMNS: &str = "code, name, description";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// List all companies, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanyListItem>, sqlx::Error> {
        sqlx::query_as::<_, CompanyListItem>("SELECT code, name FROM companies ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a company by its code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE code = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List the ids of all invoices billed to a company, ascending.
    pub async fn invoice_ids(pool: &PgPool, code: &str) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id ASC")
            .bind(code)
            .fetch_all(pool)
            .await
    }

    /// Insert a company under the given code, returning the created row.
    ///
    /// Required-field and uniqueness enforcement is left to the table
    /// constraints; violations come back as `sqlx::Error::Database`.
    pub async fn create(
        pool: &PgPool,
        code: &str,
        input: &CreateCompany,
    ) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (code, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Replace a company's name and description, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET name = $2, description = $3
             WHERE code = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company by code. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign-key violation while invoices still reference
    /// the company.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
