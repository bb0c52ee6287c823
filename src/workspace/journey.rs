//! Journey islands: per-tab kanban groupings with ordered task lists.
//!
//! The only mutation is reordering a task within its island. Cross-island
//! moves are not supported by this contract.

use std::collections::BTreeMap;

use crate::models::Island;
use crate::{Error, Result};

/// Journey islands for every workspace tab.
#[derive(Debug, Clone, Default)]
pub struct JourneyBoard {
    tabs: BTreeMap<String, Vec<Island>>,
}

impl JourneyBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the islands of one tab.
    pub fn insert_tab(&mut self, tab: &str, islands: Vec<Island>) {
        self.tabs.insert(tab.to_string(), islands);
    }

    /// Islands for a tab. Unknown tab is a typed error.
    pub fn islands(&self, tab: &str) -> Result<&[Island]> {
        self.tabs
            .get(tab)
            .map(|v| v.as_slice())
            .ok_or_else(|| Error::NotFound(tab.to_string()))
    }

    /// Move a task to a new position within its island.
    ///
    /// The task is removed from its current position and reinserted at the
    /// target index clamped to the remaining list, so an out-of-range
    /// target lands at the nearest valid position (including the end)
    /// instead of erroring or corrupting the list. All other islands and
    /// their tasks are unaffected.
    pub fn reorder_task(
        &mut self,
        tab: &str,
        island_id: &str,
        task_id: &str,
        target: usize,
    ) -> Result<()> {
        let islands = self
            .tabs
            .get_mut(tab)
            .ok_or_else(|| Error::NotFound(tab.to_string()))?;
        let island = islands
            .iter_mut()
            .find(|i| i.id == island_id)
            .ok_or_else(|| Error::NotFound(island_id.to_string()))?;
        let current = island
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| Error::NotFound(task_id.to_string()))?;

        let task = island.tasks.remove(current);
        let target = target.min(island.tasks.len());
        island.tasks.insert(target, task);
        Ok(())
    }

    /// Task count per island title for a tab. Islands sharing a title are
    /// summed, matching the stage-count chips on the workflow header.
    pub fn stage_counts(&self, tab: &str) -> Result<BTreeMap<String, usize>> {
        let islands = self.islands(tab)?;
        let mut counts = BTreeMap::new();
        for island in islands {
            *counts.entry(island.title.clone()).or_insert(0) += island.tasks.len();
        }
        Ok(counts)
    }
}
