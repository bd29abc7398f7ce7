use serde::{Deserialize, Serialize};

/// Marketing and pipeline series behind the executive analytics screen.
/// Independent of the agent roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDataset {
    #[serde(default)]
    pub traffic: Vec<TrafficPoint>,
    #[serde(default)]
    pub lead_sources: Vec<LeadSource>,
    #[serde(default)]
    pub funnel: Vec<FunnelStage>,
    #[serde(default)]
    pub roi: Vec<CampaignRoi>,
    #[serde(default)]
    pub engagement: Vec<EngagementPoint>,
}

impl AnalyticsDataset {
    pub fn is_empty(&self) -> bool {
        self.traffic.is_empty()
            && self.lead_sources.is_empty()
            && self.funnel.is_empty()
            && self.roi.is_empty()
            && self.engagement.is_empty()
    }
}

/// Website visits for one time bucket, split by channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub name: String,
    pub organic: u64,
    pub paid: u64,
    pub referral: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSource {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u64,
}

/// Spend and attributed revenue for one marketing channel, whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRoi {
    pub channel: String,
    pub spend: u64,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPoint {
    pub name: String,
    pub views: u64,
    pub inquiries: u64,
    pub tours: u64,
}
