//! Summary views over the airline table.
//!
//! Groups airlines by their Notes text, picks the most and least used
//! groups, runs the phrase filters and averages the delay column while
//! skipping missing values.

pub mod groups;
pub mod summary;
pub mod utility;

pub use groups::{GroupCounts, NotesGroup};
pub use summary::{AirlineSummary, Analysis};
