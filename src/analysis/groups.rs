use serde::Serialize;
use std::collections::BTreeMap;

use crate::table::AirlineRecord;

/// One Notes value and how many airlines carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesGroup {
    pub notes: String,
    pub count: usize,
}

/// Per-Notes counts, ordered by count descending.
///
/// Groups start out in byte-wise key order and are then stably sorted by
/// count, so equal counts keep their key order. `most_used` and `least_used`
/// both return the first group holding the extreme count in this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GroupCounts {
    groups: Vec<NotesGroup>,
}

impl GroupCounts {
    pub fn by_notes(records: &[AirlineRecord]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.notes.as_str()).or_default() += 1;
        }

        let mut groups: Vec<NotesGroup> = counts
            .into_iter()
            .map(|(notes, count)| NotesGroup {
                notes: notes.to_string(),
                count,
            })
            .collect();
        groups.sort_by(|a, b| b.count.cmp(&a.count));

        Self { groups }
    }

    pub fn groups(&self) -> &[NotesGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn count_of(&self, notes: &str) -> Option<usize> {
        self.groups
            .iter()
            .find(|g| g.notes == notes)
            .map(|g| g.count)
    }

    pub fn most_used(&self) -> Option<&NotesGroup> {
        let max = self.groups.iter().map(|g| g.count).max()?;
        self.groups.iter().find(|g| g.count == max)
    }

    pub fn least_used(&self) -> Option<&NotesGroup> {
        let min = self.groups.iter().map(|g| g.count).min()?;
        self.groups.iter().find(|g| g.count == min)
    }
}
