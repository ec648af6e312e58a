//! Regeneration trigger for stored structured data.

use chrono::{DateTime, Utc};

/// Whether the stored graph/report for an entity is stale.
///
/// Regeneration is due when nothing has been generated yet, or when the
/// entity changed after the last generation. Equal timestamps are not stale.
#[must_use]
pub fn needs_regeneration(last_generated: Option<DateTime<Utc>>, updated_at: DateTime<Utc>) -> bool {
    last_generated.is_none_or(|generated| updated_at > generated)
}
