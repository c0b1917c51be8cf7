/// Expected, reportable domain failures.
///
/// Anything not covered here (constraint violations, connection failures,
/// malformed statements) travels as a raw `sqlx::Error` and is treated as
/// unexpected by the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested row does not exist. `id` is the display form of the
    /// lookup key, so it covers both string codes and numeric ids.
    #[error("No {entity} with id: {id}")]
    NotFound { entity: &'static str, id: String },
}
