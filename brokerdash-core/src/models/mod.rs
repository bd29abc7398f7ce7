mod activity;
mod agent;
mod analytics;
mod response_time;

pub use activity::{
    AgentActivity, AssignedLead, CommissionEntry, LeadStage, PayoutStatus, PerformancePoint,
};
pub use agent::{AgentRecord, AgentRole, AgentStatus, Avatar};
pub use analytics::{
    AnalyticsDataset, CampaignRoi, EngagementPoint, FunnelStage, LeadSource, TrafficPoint,
};
pub use response_time::ResponseTime;
