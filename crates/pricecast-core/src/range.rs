//! Range filter for raw provider history.

use crate::{DateWindow, PricePoint};

/// Returns the in-window subsequence of `records`, ordered ascending by date.
///
/// Input order is not trusted; providers commonly return newest-first. The
/// sort is stable, so records sharing a date keep their relative input order.
/// Both window edges are inclusive. Never fails; an empty result is the
/// caller's signal that no data covers the window.
pub fn clip_to_window(mut records: Vec<PricePoint>, window: &DateWindow) -> Vec<PricePoint> {
    records.sort_by_key(|point| point.date);
    records.retain(|point| window.contains(point.date));
    records
}
