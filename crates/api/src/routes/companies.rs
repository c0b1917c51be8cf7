//! Route definitions for the `/companies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::companies;
use crate::state::AppState;

/// Routes mounted at `/companies`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(companies::list).post(companies::create))
        .route(
            "/{code}",
            get(companies::get_by_code)
                .put(companies::update)
                .delete(companies::delete),
        )
}
