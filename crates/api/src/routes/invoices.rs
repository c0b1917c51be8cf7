//! Route definitions for the `/invoices` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

/// Routes mounted at `/invoices`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(invoices::list).post(invoices::create))
        .route(
            "/{id}",
            get(invoices::get_by_id)
                .put(invoices::update)
                .delete(invoices::delete),
        )
}
