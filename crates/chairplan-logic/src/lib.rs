//! Pure floor-plan scanning logic for chairplan.
//!
//! This crate contains the whole scanning pipeline, independent of any I/O
//! or rendering. Functions take plain data and return results, making them
//! unit-testable and portable across the CLI and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Furniture marker alphabet and display order |
//! | [`segment`] | Per-row extraction of non-wall character runs |
//! | [`region`] | Row-by-row stitching of segments into room regions |
//! | [`room`] | Name extraction and promotion of regions to rooms |
//! | [`tally`] | Chair counts per region and grand totals |
//! | [`plan`] | End-to-end pipeline over a full plan text |

pub mod constants;
pub mod plan;
pub mod region;
pub mod room;
pub mod segment;
pub mod tally;
