use serde::{Deserialize, Serialize};

use crate::models::{AgentRecord, AgentRole, AgentStatus, ResponseTime};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub name: String,
    pub revenue_millions: f64,
}

/// One revenue bar per agent, in roster order.
pub fn revenue_by_agent(records: &[AgentRecord]) -> Vec<RevenuePoint> {
    records
        .iter()
        .map(|r| RevenuePoint {
            name: r.name.clone(),
            revenue_millions: r.revenue as f64 / 1_000_000.0,
        })
        .collect()
}

/// A roster table row. Values are raw; formatting happens at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub role: AgentRole,
    pub deals: u32,
    pub revenue: u64,
    pub conversion: f64,
    pub response_time: ResponseTime,
    pub commission: u64,
    pub status: AgentStatus,
}

impl From<&AgentRecord> for RosterRow {
    fn from(record: &AgentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            initials: record.initials(),
            role: record.role,
            deals: record.deals,
            revenue: record.revenue,
            conversion: record.conversion,
            response_time: record.response_time,
            commission: record.commission,
            status: record.status,
        }
    }
}

/// Display rows in input order. Listings are never sorted.
pub fn roster_rows(records: &[AgentRecord]) -> Vec<RosterRow> {
    records.iter().map(RosterRow::from).collect()
}

/// Headline KPIs for the performance screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub active_agents: usize,
    pub total_agents: usize,
    pub total_deals: u64,
    pub total_revenue: u64,
    pub total_commission: u64,
    /// Mean over every record, active or not.
    pub average_conversion: Option<f64>,
    pub average_response: Option<ResponseTime>,
}

impl RosterSummary {
    pub fn from_records(records: &[AgentRecord]) -> Self {
        let mut summary = RosterSummary {
            total_agents: records.len(),
            ..Default::default()
        };

        let mut conversion_sum = 0.0;
        for record in records {
            if record.is_active() {
                summary.active_agents += 1;
            }
            summary.total_deals += record.deals as u64;
            summary.total_revenue = summary.total_revenue.saturating_add(record.revenue);
            summary.total_commission = summary.total_commission.saturating_add(record.commission);
            conversion_sum += record.conversion;
        }

        if !records.is_empty() {
            summary.average_conversion = Some(conversion_sum / records.len() as f64);
        }
        summary.average_response = ResponseTime::average(records.iter().map(|r| r.response_time));

        summary
    }

    pub fn inactive_agents(&self) -> usize {
        self.total_agents - self.active_agents
    }
}

/// 1-based position of `id` when the roster is ranked by revenue, highest
/// first. Equal revenues keep their input order.
pub fn revenue_rank(records: &[AgentRecord], id: &str) -> Option<usize> {
    let target = records.iter().position(|r| r.id == id)?;
    let revenue = records[target].revenue;
    let ahead = records
        .iter()
        .enumerate()
        .filter(|(idx, r)| r.revenue > revenue || (r.revenue == revenue && *idx < target))
        .count();
    Some(ahead + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, revenue: u64, status: AgentStatus) -> AgentRecord {
        AgentRecord {
            id: id.to_string(),
            name: format!("Agent {}", id),
            role: AgentRole::SeniorAdvisor,
            deals: 2,
            revenue,
            conversion: 10.0,
            response_time: ResponseTime::from_minutes(10),
            commission: revenue / 50,
            status,
            avatar: String::new(),
        }
    }

    #[test]
    fn test_revenue_by_agent_scales_to_millions() {
        let records = vec![
            record("A", 142_000_000, AgentStatus::Active),
            record("B", 92_400_000, AgentStatus::Active),
        ];
        let series = revenue_by_agent(&records);
        let values: Vec<f64> = series.iter().map(|p| p.revenue_millions).collect();
        assert_eq!(values, vec![142.0, 92.4]);
        assert_eq!(series[0].name, "Agent A");
    }

    #[test]
    fn test_roster_rows_keep_order() {
        let records = vec![
            record("A", 1, AgentStatus::Active),
            record("B", 3, AgentStatus::Inactive),
            record("C", 2, AgentStatus::Active),
        ];
        let ids: Vec<String> = roster_rows(&records).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_summary_empty() {
        let summary = RosterSummary::from_records(&[]);
        assert_eq!(summary.active_agents, 0);
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.average_conversion, None);
        assert_eq!(summary.average_response, None);
    }

    #[test]
    fn test_summary_totals() {
        let mut records = vec![
            record("A", 10_000_000, AgentStatus::Active),
            record("B", 20_000_000, AgentStatus::Inactive),
        ];
        records[1].conversion = 20.0;
        records[1].response_time = ResponseTime::from_minutes(20);

        let summary = RosterSummary::from_records(&records);
        assert_eq!(summary.active_agents, 1);
        assert_eq!(summary.inactive_agents(), 1);
        assert_eq!(summary.total_deals, 4);
        assert_eq!(summary.total_revenue, 30_000_000);
        assert_eq!(summary.total_commission, 600_000);
        assert_eq!(summary.average_conversion, Some(15.0));
        assert_eq!(
            summary.average_response,
            Some(ResponseTime::from_minutes(15))
        );
    }

    #[test]
    fn test_revenue_rank_with_ties() {
        let records = vec![
            record("A", 5, AgentStatus::Active),
            record("B", 9, AgentStatus::Active),
            record("C", 5, AgentStatus::Active),
        ];
        assert_eq!(revenue_rank(&records, "B"), Some(1));
        assert_eq!(revenue_rank(&records, "A"), Some(2));
        assert_eq!(revenue_rank(&records, "C"), Some(3));
        assert_eq!(revenue_rank(&records, "Z"), None);
    }
}
