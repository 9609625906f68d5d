//! Follow-up field gating.
//!
//! A lead carries an optional follow-up reminder: a flag, a date, and free
//! notes. The flag gates the other two fields; when it is off the date and
//! notes must be stored as NULL regardless of what the client sent, so a
//! disabled reminder never leaves stale data behind.

use chrono::NaiveDate;

/// Normalize follow-up fields against the gate flag.
///
/// Returns the `(date, notes)` pair to persist. With the flag off both are
/// `None`; with it on the submitted values pass through unchanged (a set flag
/// with no date is allowed).
pub fn apply_follow_up_gate(
    follow_up: bool,
    date: Option<NaiveDate>,
    notes: Option<String>,
) -> (Option<NaiveDate>, Option<String>) {
    if follow_up {
        (date, notes)
    } else {
        (None, None)
    }
}
