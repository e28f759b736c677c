//! Chair tallies per region and the grand total across rooms.

use std::collections::BTreeMap;

use crate::constants::chair_types;
use crate::region::Region;
use crate::room::Room;

/// Marker → occurrence count. Markers that never occur carry no key;
/// consumers treat a missing key as zero.
pub type ChairCounts = BTreeMap<char, u32>;

/// Count furniture markers across the concatenation of a region's segment
/// text. Case-sensitive; characters outside the alphabet are ignored.
pub fn count_chairs(region: &Region) -> ChairCounts {
    let mut counts = ChairCounts::new();
    for seg in region.segments() {
        for ch in seg.text.chars() {
            if chair_types::is_chair(ch) {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Sum chair counts across all rooms.
pub fn total_chairs(rooms: &[Room]) -> ChairCounts {
    let mut total = ChairCounts::new();
    for room in rooms {
        for (&marker, &count) in &room.chairs {
            *total.entry(marker).or_insert(0) += count;
        }
    }
    total
}
