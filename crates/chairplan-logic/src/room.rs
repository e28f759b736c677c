//! Room extraction: promoting closed regions to named rooms.
//!
//! A room's display name is the first parenthesized label found anywhere in
//! the region's text. Regions without a label are dropped silently; a plan
//! artifact like the margin outside the outer wall never becomes a room.

use regex::Regex;
use serde::Serialize;

use crate::region::Region;
use crate::tally::{count_chairs, ChairCounts};

/// A finalized, named region with its chair tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub name: String,
    pub chairs: ChairCounts,
}

/// Derives rooms from closed regions. Holds the compiled name pattern.
pub struct RoomExtractor {
    name: Regex,
}

impl Default for RoomExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomExtractor {
    pub fn new() -> Self {
        Self {
            name: Regex::new(r"\(([\w ]+)\)").unwrap(),
        }
    }

    /// The first parenthesized label across the region's segments, in region
    /// order, with the parentheses stripped. `None` if no segment has one.
    pub fn find_name(&self, region: &Region) -> Option<String> {
        region
            .segments()
            .iter()
            .find_map(|seg| self.name.captures(&seg.text).map(|caps| caps[1].to_string()))
    }

    /// Promote every closed, named region to a [`Room`], sorted ascending by
    /// name. Duplicate names keep their relative order (stable sort).
    pub fn extract(&self, regions: &[Region]) -> Vec<Room> {
        let mut rooms: Vec<Room> = regions
            .iter()
            .filter(|r| r.is_closed())
            .filter_map(|r| {
                self.find_name(r).map(|name| Room {
                    name,
                    chairs: count_chairs(r),
                })
            })
            .collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        rooms
    }
}
