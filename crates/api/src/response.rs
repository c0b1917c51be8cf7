//! Response envelopes for API handlers.
//!
//! Every successful response wraps its resource under a named key
//! (`{ "company": {...} }`, `{ "invoices": [...] }`). Use these instead of
//! ad-hoc `serde_json::json!` to keep serialization typed.

use serde::Serialize;

/// `{ "companies": [...] }`
#[derive(Debug, Serialize)]
pub struct CompaniesEnvelope<T: Serialize> {
    pub companies: T,
}

/// `{ "company": {...} }`
#[derive(Debug, Serialize)]
pub struct CompanyEnvelope<T: Serialize> {
    pub company: T,
}

/// `{ "invoices": [...] }`
#[derive(Debug, Serialize)]
pub struct InvoicesEnvelope<T: Serialize> {
    pub invoices: T,
}

/// `{ "invoice": {...} }`
#[derive(Debug, Serialize)]
pub struct InvoiceEnvelope<T: Serialize> {
    pub invoice: T,
}

/// `{ "status": "Deleted" }` acknowledgement for DELETE endpoints.
#[derive(Debug, Serialize)]
pub struct StatusEnvelope {
    pub status: &'static str,
}
