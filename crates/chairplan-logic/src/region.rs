//! Region stitching: grouping per-row segments into multi-row room regions.
//!
//! Plan rows are processed one at a time, and a hand-drawn room outline may
//! drift horizontally between rows. A region therefore accepts a new row's
//! segment when either edge lands within one column of the segment it holds
//! on the previous row.

use crate::segment::Segment;

/// An in-progress or finished grouping of row-segments belonging to one room.
///
/// Segments are kept in insertion order, which is row order; a region holds
/// at most one segment per row. Once closed, a region never reopens.
#[derive(Debug, Clone)]
pub struct Region {
    segments: Vec<Segment>,
    closed: bool,
}

impl Region {
    fn open(seed: Segment) -> Self {
        Self {
            segments: vec![seed],
            closed: false,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True if `seg` can extend this region: the region has no segment on
    /// `seg`'s row, and some segment on the row directly above has a start
    /// or end edge within one column of `seg`'s.
    pub fn connects(&self, seg: &Segment) -> bool {
        // One segment per row, regardless of how well the edges line up.
        if self.segments.iter().any(|p| p.row == seg.row) {
            return false;
        }
        self.segments.iter().any(|p| {
            p.row + 1 == seg.row
                && (p.x_start.abs_diff(seg.x_start) <= 1 || p.x_end.abs_diff(seg.x_end) <= 1)
        })
    }

    fn append(&mut self, seg: Segment) {
        debug_assert!(!self.closed, "segment appended to closed region");
        self.segments.push(seg);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Builds the full region set from successive rows of segments.
///
/// Owns the working set exclusively for the duration of the scan; no region
/// is ever deleted, only extended or closed. [`RegionBuilder::finish`] hands
/// the whole set back by value.
#[derive(Debug, Default)]
pub struct RegionBuilder {
    regions: Vec<Region>,
}

impl RegionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stitch one row's segments (in left-to-right order) into the working
    /// set.
    ///
    /// Each open region, in creation order, claims the first still-unclaimed
    /// segment it connects to. First match wins on both sides: a claimed
    /// segment is unavailable to later regions in the same row. Open regions
    /// that claim nothing are closed; each unclaimed segment opens a new
    /// region.
    pub fn push_row(&mut self, segments: impl IntoIterator<Item = Segment>) {
        let mut pool: Vec<Option<Segment>> = segments.into_iter().map(Some).collect();
        // Touched-this-row bookkeeping is positional, not value-based, so
        // duplicate-content rows stay well-defined.
        let mut touched = vec![false; self.regions.len()];

        for (i, region) in self.regions.iter_mut().enumerate() {
            if region.is_closed() {
                continue;
            }
            for slot in pool.iter_mut() {
                let connected = slot.as_ref().map_or(false, |s| region.connects(s));
                if connected {
                    if let Some(seg) = slot.take() {
                        region.append(seg);
                        touched[i] = true;
                    }
                    break;
                }
            }
        }

        for (region, touched) in self.regions.iter_mut().zip(touched) {
            if !touched && !region.is_closed() {
                region.close();
            }
        }

        for seg in pool.into_iter().flatten() {
            self.regions.push(Region::open(seg));
        }
    }

    /// Close every region still open (end of input) and return the full
    /// region set, in creation order.
    pub fn finish(mut self) -> Vec<Region> {
        for region in &mut self.regions {
            region.close();
        }
        self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_seg(row: usize, x_start: usize, x_end: usize) -> Segment {
        Segment {
            text: String::new(),
            row,
            x_start,
            x_end,
        }
    }

    #[test]
    fn test_same_row_never_connects() {
        let region = Region::open(make_seg(1, 1, 10));
        assert!(!region.connects(&make_seg(1, 11, 20)));
    }

    #[test]
    fn test_edge_within_tolerance_connects() {
        let region = Region::open(make_seg(1, 1, 10));
        // Both edges drift by one column.
        assert!(region.connects(&make_seg(2, 2, 9)));
        // Exact edge match.
        assert!(region.connects(&make_seg(2, 1, 10)));
        // Start drifts too far but end is aligned.
        assert!(region.connects(&make_seg(2, 5, 10)));
    }

    #[test]
    fn test_edges_too_far_apart() {
        let region = Region::open(make_seg(1, 1, 10));
        assert!(!region.connects(&make_seg(2, 3, 12)));
    }

    #[test]
    fn test_row_gap_never_connects() {
        let region = Region::open(make_seg(1, 1, 10));
        assert!(!region.connects(&make_seg(3, 1, 10)));
    }

    #[test]
    fn test_duplicate_row_rejected_even_with_aligned_edges() {
        // Region already spans rows 1-2; another row-2 segment whose edges
        // line up with the row-1 segment still must not connect.
        let mut builder = RegionBuilder::new();
        builder.push_row(vec![make_seg(1, 1, 10)]);
        builder.push_row(vec![make_seg(2, 1, 10)]);
        let regions = builder.finish();
        assert!(!regions[0].connects(&make_seg(2, 1, 10)));
    }

    #[test]
    fn test_unclaimed_segments_open_new_regions() {
        let mut builder = RegionBuilder::new();
        builder.push_row(vec![make_seg(0, 1, 10), make_seg(0, 15, 20)]);
        let regions = builder.finish();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].segments().len(), 1);
        assert_eq!(regions[1].segments().len(), 1);
    }

    #[test]
    fn test_extension_across_rows() {
        let mut builder = RegionBuilder::new();
        builder.push_row(vec![make_seg(0, 1, 10)]);
        builder.push_row(vec![make_seg(1, 2, 10)]);
        builder.push_row(vec![make_seg(2, 2, 9)]);
        let regions = builder.finish();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].segments().len(), 3);
    }

    #[test]
    fn test_untouched_region_closes() {
        let mut builder = RegionBuilder::new();
        builder.push_row(vec![make_seg(0, 1, 10)]);
        // Empty row (walls only): nothing to claim.
        builder.push_row(vec![]);
        // A later segment with matching edges lands in a new region.
        builder.push_row(vec![make_seg(2, 1, 10)]);
        let regions = builder.finish();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].segments().len(), 1);
        assert!(regions[0].is_closed());
    }

    #[test]
    fn test_first_region_wins_contested_segment() {
        let mut builder = RegionBuilder::new();
        // Two regions with identical footprints, created left to right.
        builder.push_row(vec![make_seg(0, 1, 10), make_seg(0, 20, 30)]);
        // One candidate both could claim (edges align with the first).
        builder.push_row(vec![make_seg(1, 1, 10)]);
        let regions = builder.finish();
        assert_eq!(regions[0].segments().len(), 2);
        assert_eq!(regions[1].segments().len(), 1);
    }

    #[test]
    fn test_region_takes_one_segment_per_row() {
        let mut builder = RegionBuilder::new();
        builder.push_row(vec![make_seg(0, 1, 10)]);
        // Both candidates connect; only the first is claimed, the second
        // opens a fresh region.
        builder.push_row(vec![make_seg(1, 1, 10), make_seg(1, 2, 9)]);
        let regions = builder.finish();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].segments().len(), 2);
        let rows: Vec<usize> = regions[0].segments().iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn test_no_region_is_ever_deleted() {
        let mut builder = RegionBuilder::new();
        builder.push_row(vec![make_seg(0, 1, 10)]);
        builder.push_row(vec![]);
        builder.push_row(vec![make_seg(2, 40, 50)]);
        builder.push_row(vec![]);
        let regions = builder.finish();
        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(Region::is_closed));
    }

    #[test]
    fn test_finish_closes_open_regions() {
        let mut builder = RegionBuilder::new();
        builder.push_row(vec![make_seg(0, 1, 10)]);
        let regions = builder.finish();
        assert!(regions[0].is_closed());
    }
}
