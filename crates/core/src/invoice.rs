//! Invoice paid-date derivation.
//!
//! `paid_date` is never accepted from the caller; it is a function of the
//! paid flag transition and the date already on the row.

use crate::types::Timestamp;

/// Compute the `paid_date` an invoice should carry after an update.
///
/// Stamped with `now` the first time the paid flag goes true, cleared
/// whenever the flag is false, and left untouched on an already-paid
/// invoice.
pub fn derive_paid_date(
    current: Option<Timestamp>,
    paid: bool,
    now: Timestamp,
) -> Option<Timestamp> {
    if paid {
        current.or(Some(now))
    } else {
        None
    }
}
