use tracing::debug;

use crate::models::AgentRecord;

/// Single slot naming the agent whose detail drawer is open.
///
/// Holds the id rather than a copy of the record, so the drawer always shows
/// what the current roster says about that agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any prior selection. Returns false when `record` was already selected.
    pub fn select(&mut self, record: &AgentRecord) -> bool {
        if self.selected.as_deref() == Some(record.id.as_str()) {
            return false;
        }
        debug!(agent_id = %record.id, "Agent selected");
        self.selected = Some(record.id.clone());
        true
    }

    /// Empties the slot. Returns false when nothing was selected.
    pub fn clear(&mut self) -> bool {
        match self.selected.take() {
            Some(id) => {
                debug!(agent_id = %id, "Selection cleared");
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected record, or `None` when the id is no longer in `records`.
    pub fn resolve<'a>(&self, records: &'a [AgentRecord]) -> Option<&'a AgentRecord> {
        let id = self.selected.as_deref()?;
        records.iter().find(|r| r.id == id)
    }
}
