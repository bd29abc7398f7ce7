use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BrokerdashError, BrokerdashResult};
use crate::models::{AgentActivity, AgentRecord, AnalyticsDataset};

/// Everything one dashboard session renders. Immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub agents: Vec<AgentRecord>,
    #[serde(default)]
    pub activity: Vec<AgentActivity>,
    #[serde(default)]
    pub analytics: AnalyticsDataset,
}

impl Dataset {
    pub fn new(agents: Vec<AgentRecord>) -> Self {
        Self {
            agents,
            ..Default::default()
        }
    }

    pub fn agent(&self, id: &str) -> Option<&AgentRecord> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn require_agent(&self, id: &str) -> BrokerdashResult<&AgentRecord> {
        self.agent(id)
            .ok_or_else(|| BrokerdashError::AgentNotFound(id.to_string()))
    }

    pub fn activity_for(&self, id: &str) -> Option<&AgentActivity> {
        self.activity.iter().find(|a| a.agent_id == id)
    }

    /// Checks the record-level invariants. The first violation wins.
    pub fn validate(&self) -> BrokerdashResult<()> {
        let mut seen = HashSet::with_capacity(self.agents.len());

        for agent in &self.agents {
            if agent.id.trim().is_empty() {
                return Err(BrokerdashError::invalid_field(
                    &agent.name,
                    "id",
                    "must not be empty",
                ));
            }
            if !seen.insert(agent.id.as_str()) {
                return Err(BrokerdashError::DuplicateAgentId(agent.id.clone()));
            }
            if agent.name.trim().is_empty() {
                return Err(BrokerdashError::invalid_field(
                    &agent.id,
                    "name",
                    "must not be empty",
                ));
            }
            if !agent.conversion.is_finite() || !(0.0..=100.0).contains(&agent.conversion) {
                return Err(BrokerdashError::invalid_field(
                    &agent.id,
                    "conversion",
                    format!("{} is outside 0-100", agent.conversion),
                ));
            }
        }

        for activity in &self.activity {
            if !activity.rating.is_finite() || !(0.0..=5.0).contains(&activity.rating) {
                return Err(BrokerdashError::invalid_field(
                    &activity.agent_id,
                    "rating",
                    format!("{} is outside 0-5", activity.rating),
                ));
            }
        }

        Ok(())
    }

    /// Drops activity entries that belong to no agent in the roster.
    /// Returns how many were removed.
    pub fn prune_orphan_activity(&mut self) -> usize {
        let ids: HashSet<String> = self.agents.iter().map(|a| a.id.clone()).collect();
        let before = self.activity.len();

        self.activity.retain(|entry| {
            let known = ids.contains(&entry.agent_id);
            if !known {
                warn!(
                    agent_id = %entry.agent_id,
                    "Ignoring activity for unknown agent"
                );
            }
            known
        });

        let removed = before - self.activity.len();
        if removed > 0 {
            debug!("Pruned {} orphan activity entries", removed);
        }
        removed
    }
}
