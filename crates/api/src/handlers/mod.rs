//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `tally-db` and
//! funnel every failure through [`crate::error::AppError`].

pub mod companies;
pub mod invoices;
