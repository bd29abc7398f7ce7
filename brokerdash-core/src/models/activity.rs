use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-agent drill-down data, keyed by agent id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentActivity {
    pub agent_id: String,
    /// Client rating, 0-5.
    pub rating: f32,
    /// Monthly results in chronological order.
    #[serde(default)]
    pub performance: Vec<PerformancePoint>,
    #[serde(default)]
    pub leads: Vec<AssignedLead>,
    #[serde(default)]
    pub commissions: Vec<CommissionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub month: String,
    pub revenue: u64,
    pub deals: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStage {
    New,
    Contacted,
    Viewing,
    Negotiation,
    Closed,
}

impl LeadStage {
    pub fn label(&self) -> &'static str {
        match self {
            LeadStage::New => "New",
            LeadStage::Contacted => "Contacted",
            LeadStage::Viewing => "Viewing",
            LeadStage::Negotiation => "Negotiation",
            LeadStage::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedLead {
    pub name: String,
    pub property: String,
    pub stage: LeadStage,
    /// Whole currency units.
    pub budget: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayoutStatus {
    Paid,
    Pending,
}

impl PayoutStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PayoutStatus::Paid => "Paid",
            PayoutStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionEntry {
    pub date: NaiveDate,
    pub property: String,
    /// Whole currency units.
    pub amount: u64,
    pub status: PayoutStatus,
}

impl AgentActivity {
    pub fn lead_count(&self) -> usize {
        self.leads.len()
    }

    pub fn pending_commission(&self) -> u64 {
        self.commissions
            .iter()
            .filter(|c| c.status == PayoutStatus::Pending)
            .map(|c| c.amount)
            .sum()
    }
}
