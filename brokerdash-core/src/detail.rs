use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::BrokerdashResult;
use crate::models::{
    AgentActivity, AgentRecord, AgentRole, AgentStatus, AssignedLead, Avatar, CommissionEntry,
    ResponseTime,
};
use crate::roster::revenue_rank;
use crate::shapers::{performance_trend, TrendPoint};

/// Everything the detail drawer shows for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDetail {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub role: AgentRole,
    pub status: AgentStatus,
    pub avatar: Avatar,
    pub deals: u32,
    pub revenue: u64,
    pub commission: u64,
    pub conversion: f64,
    pub response_time: ResponseTime,
    /// Position by revenue among the whole roster.
    pub rank: Option<usize>,
    pub roster_size: usize,
    pub rating: Option<f32>,
    pub lead_count: usize,
    pub pending_commission: u64,
    pub trend: Vec<TrendPoint>,
    pub leads: Vec<AssignedLead>,
    pub commissions: Vec<CommissionEntry>,
}

impl AgentDetail {
    /// `activity` is the agent's own entry, if any. Without one the drawer
    /// shows an empty trend, empty lists and no rating.
    pub fn build(
        record: &AgentRecord,
        records: &[AgentRecord],
        activity: Option<&AgentActivity>,
    ) -> Self {
        let activity = activity.filter(|a| a.agent_id == record.id);

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            initials: record.initials(),
            role: record.role,
            status: record.status,
            avatar: record.avatar(),
            deals: record.deals,
            revenue: record.revenue,
            commission: record.commission,
            conversion: record.conversion,
            response_time: record.response_time,
            rank: revenue_rank(records, &record.id),
            roster_size: records.len(),
            rating: activity.map(|a| a.rating),
            lead_count: activity.map(AgentActivity::lead_count).unwrap_or(0),
            pending_commission: activity
                .map(AgentActivity::pending_commission)
                .unwrap_or(0),
            trend: performance_trend(activity),
            leads: activity.map(|a| a.leads.clone()).unwrap_or_default(),
            commissions: activity.map(|a| a.commissions.clone()).unwrap_or_default(),
        }
    }

    /// Looks the agent up by id and builds its drawer from the whole dataset.
    pub fn for_agent(dataset: &Dataset, id: &str) -> BrokerdashResult<Self> {
        let record = dataset.require_agent(id)?;
        Ok(Self::build(record, &dataset.agents, dataset.activity_for(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadStage, PerformancePoint};

    fn record(id: &str, revenue: u64) -> AgentRecord {
        AgentRecord {
            id: id.to_string(),
            name: "Priya Raman".to_string(),
            role: AgentRole::PropertyConsultant,
            deals: 14,
            revenue,
            conversion: 21.7,
            response_time: ResponseTime::from_minutes(5),
            commission: 1_375_000,
            status: AgentStatus::Active,
            avatar: "https://img.example.com/p.jpg".to_string(),
        }
    }

    fn activity(id: &str, months: &[(&str, u64)]) -> AgentActivity {
        AgentActivity {
            agent_id: id.to_string(),
            rating: 4.8,
            performance: months
                .iter()
                .map(|(m, r)| PerformancePoint {
                    month: m.to_string(),
                    revenue: *r,
                    deals: 2,
                })
                .collect(),
            leads: vec![AssignedLead {
                name: "Ravi Menon".to_string(),
                property: "Town Square 312".to_string(),
                stage: LeadStage::Contacted,
                budget: 1_450_000,
            }],
            commissions: Vec::new(),
        }
    }

    #[test]
    fn test_build_with_activity() {
        let records = vec![record("A", 10_000_000), record("B", 20_000_000)];
        let act = activity("A", &[("Jan", 1_500_000), ("Feb", 2_000_000)]);
        let detail = AgentDetail::build(&records[0], &records, Some(&act));

        assert_eq!(detail.rank, Some(2));
        assert_eq!(detail.roster_size, 2);
        assert_eq!(detail.rating, Some(4.8));
        assert_eq!(detail.lead_count, 1);
        assert_eq!(detail.trend.len(), 2);
        assert_eq!(detail.trend[0].revenue_millions, 1.5);
        assert_eq!(detail.initials, "PR");
        assert!(!detail.avatar.is_placeholder());
    }

    #[test]
    fn test_build_without_activity() {
        let records = vec![record("A", 10_000_000)];
        let detail = AgentDetail::build(&records[0], &records, None);

        assert_eq!(detail.rank, Some(1));
        assert_eq!(detail.rating, None);
        assert_eq!(detail.lead_count, 0);
        assert!(detail.trend.is_empty());
        assert!(detail.leads.is_empty());
        assert!(detail.commissions.is_empty());
    }

    #[test]
    fn test_trend_is_per_agent() {
        let records = vec![record("A", 1), record("B", 2)];
        let a = activity("A", &[("Jan", 1_000_000)]);
        let b = activity("B", &[("Jan", 3_000_000)]);

        let detail_a = AgentDetail::build(&records[0], &records, Some(&a));
        let detail_b = AgentDetail::build(&records[1], &records, Some(&b));
        assert_ne!(detail_a.trend, detail_b.trend);
    }

    #[test]
    fn test_for_agent_lookup() {
        let mut dataset = Dataset::new(vec![record("A", 1)]);
        dataset.activity.push(activity("A", &[("Jan", 1_000_000)]));

        let detail = AgentDetail::for_agent(&dataset, "A").unwrap();
        assert_eq!(detail.trend.len(), 1);
        assert!(AgentDetail::for_agent(&dataset, "Z").is_err());
    }

    #[test]
    fn test_mismatched_activity_is_ignored() {
        let records = vec![record("A", 1)];
        let other = activity("B", &[("Jan", 1_000_000)]);
        let detail = AgentDetail::build(&records[0], &records, Some(&other));
        assert_eq!(detail.rating, None);
        assert!(detail.trend.is_empty());
    }
}
