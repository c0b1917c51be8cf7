pub mod companies;
pub mod health;
pub mod invoices;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// GET    /companies              list (code, name; ordered by name)
/// POST   /companies              create (code derived from name) -> 201
/// GET    /companies/{code}       detail with invoice ids
/// PUT    /companies/{code}       replace name/description
/// DELETE /companies/{code}       delete -> {status: "Deleted"}
///
/// GET    /invoices               list (id, comp_code; ordered by id)
/// POST   /invoices               create -> 200
/// GET    /invoices/{id}          detail with joined company
/// PUT    /invoices/{id}          update amt/paid (paid_date derived)
/// DELETE /invoices/{id}          delete -> {status: "Deleted"}
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", companies::router())
        .nest("/invoices", invoices::router())
}
