//! End-to-end pipeline: plan text in, sorted rooms out.
//!
//! One sequential pass over the rows builds the region set, then one pass
//! over the closed regions derives the rooms. There are no error paths in
//! here — malformed or empty input just yields fewer rooms.

use crate::region::{Region, RegionBuilder};
use crate::room::{Room, RoomExtractor};
use crate::segment::SegmentExtractor;

/// Stitch the full region set out of a plan, in creation order. Every
/// returned region is closed. Exposed for inspection and tests; most
/// callers want [`process_plan`].
pub fn collect_regions(plan: &str) -> Vec<Region> {
    let extractor = SegmentExtractor::new();
    let mut builder = RegionBuilder::new();
    for (y, row) in plan.lines().enumerate() {
        builder.push_row(extractor.segments(row, y));
    }
    builder.finish()
}

/// Scan a full plan and return its named rooms, sorted ascending by name.
pub fn process_plan(plan: &str) -> Vec<Room> {
    let regions = collect_regions(plan);
    RoomExtractor::new().extract(&regions)
}
