//! Pure functions from records to chart-ready series.
//!
//! Every shaper preserves input order and only scales units. Rounding is left
//! to [`crate::format`].

use serde::{Deserialize, Serialize};

use crate::models::{
    AgentActivity, AgentRecord, AnalyticsDataset, CampaignRoi, EngagementPoint, FunnelStage,
    LeadSource, TrafficPoint,
};

pub use crate::roster::{revenue_by_agent as revenue_series, RevenuePoint};

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionPoint {
    pub name: String,
    pub commission_thousands: f64,
}

pub fn commission_series(records: &[AgentRecord]) -> Vec<CommissionPoint> {
    records
        .iter()
        .map(|r| CommissionPoint {
            name: r.name.clone(),
            commission_thousands: r.commission as f64 / THOUSAND,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealPoint {
    pub name: String,
    pub deals: u32,
}

pub fn deal_series(records: &[AgentRecord]) -> Vec<DealPoint> {
    records
        .iter()
        .map(|r| DealPoint {
            name: r.name.clone(),
            deals: r.deals,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionBar {
    pub name: String,
    pub conversion: f64,
    /// Bar fill, 0-100.
    pub width_percent: f64,
}

pub fn conversion_bars(records: &[AgentRecord]) -> Vec<ConversionBar> {
    records
        .iter()
        .map(|r| ConversionBar {
            name: r.name.clone(),
            conversion: r.conversion,
            width_percent: if r.conversion.is_nan() {
                0.0
            } else {
                r.conversion.clamp(0.0, 100.0)
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSeriesPoint {
    pub name: String,
    pub organic: u64,
    pub paid: u64,
    pub referral: u64,
    pub total: u64,
}

pub fn traffic_series(points: &[TrafficPoint]) -> Vec<TrafficSeriesPoint> {
    points
        .iter()
        .map(|p| TrafficSeriesPoint {
            name: p.name.clone(),
            organic: p.organic,
            paid: p.paid,
            referral: p.referral,
            total: p.organic + p.paid + p.referral,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSourceShare {
    pub name: String,
    pub value: u64,
    pub share_percent: f64,
}

pub fn lead_source_shares(sources: &[LeadSource]) -> Vec<LeadSourceShare> {
    let total: u64 = sources.iter().map(|s| s.value).sum();
    sources
        .iter()
        .map(|s| LeadSourceShare {
            name: s.name.clone(),
            value: s.value,
            share_percent: percent_of(s.value, total),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelBar {
    pub stage: String,
    pub count: u64,
    /// Relative to the first (widest) stage.
    pub width_percent: f64,
    /// Share of the previous stage that made it here.
    pub step_conversion: Option<f64>,
}

pub fn funnel_bars(stages: &[FunnelStage]) -> Vec<FunnelBar> {
    let top = stages.first().map(|s| s.count).unwrap_or(0);
    stages
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let step_conversion = idx
                .checked_sub(1)
                .map(|prev| stages[prev].count)
                .filter(|&prev| prev > 0)
                .map(|prev| percent_of(s.count, prev));
            FunnelBar {
                stage: s.stage.clone(),
                count: s.count,
                width_percent: percent_of(s.count, top),
                step_conversion,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiPoint {
    pub channel: String,
    pub spend_thousands: f64,
    pub revenue_thousands: f64,
    pub roi_percent: Option<f64>,
}

fn roi_percent(spend: u64, revenue: u64) -> Option<f64> {
    if spend == 0 {
        return None;
    }
    Some((revenue as f64 - spend as f64) * 100.0 / spend as f64)
}

pub fn roi_series(campaigns: &[CampaignRoi]) -> Vec<RoiPoint> {
    campaigns
        .iter()
        .map(|c| RoiPoint {
            channel: c.channel.clone(),
            spend_thousands: c.spend as f64 / THOUSAND,
            revenue_thousands: c.revenue as f64 / THOUSAND,
            roi_percent: roi_percent(c.spend, c.revenue),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSeriesPoint {
    pub name: String,
    pub views: u64,
    pub inquiries: u64,
    pub tours: u64,
    pub inquiry_rate: f64,
}

pub fn engagement_series(points: &[EngagementPoint]) -> Vec<EngagementSeriesPoint> {
    points
        .iter()
        .map(|p| EngagementSeriesPoint {
            name: p.name.clone(),
            views: p.views,
            inquiries: p.inquiries,
            tours: p.tours,
            inquiry_rate: percent_of(p.inquiries, p.views),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub revenue_millions: f64,
    pub deals: u32,
}

/// Monthly trend for one agent. Empty when the agent has no activity.
pub fn performance_trend(activity: Option<&AgentActivity>) -> Vec<TrendPoint> {
    activity
        .map(|a| {
            a.performance
                .iter()
                .map(|p| TrendPoint {
                    month: p.month.clone(),
                    revenue_millions: p.revenue as f64 / MILLION,
                    deals: p.deals,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Headline KPIs for the analytics screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_visits: u64,
    /// Count at the top of the funnel.
    pub total_leads: u64,
    /// Last funnel stage over the first, as a percentage.
    pub close_rate: Option<f64>,
    pub marketing_spend: u64,
    pub marketing_revenue: u64,
    pub blended_roi: Option<f64>,
    pub top_source: Option<String>,
}

impl AnalyticsSummary {
    pub fn from_dataset(dataset: &AnalyticsDataset) -> Self {
        let total_visits = dataset
            .traffic
            .iter()
            .map(|p| p.organic + p.paid + p.referral)
            .sum();

        let total_leads = dataset.funnel.first().map(|s| s.count).unwrap_or(0);
        let close_rate = match (dataset.funnel.first(), dataset.funnel.last()) {
            (Some(first), Some(last)) if first.count > 0 => {
                Some(percent_of(last.count, first.count))
            }
            _ => None,
        };

        let marketing_spend: u64 = dataset.roi.iter().map(|c| c.spend).sum();
        let marketing_revenue: u64 = dataset.roi.iter().map(|c| c.revenue).sum();

        // First of the largest wins on ties.
        let top_source = dataset
            .lead_sources
            .iter()
            .fold(None::<&LeadSource>, |best, s| match best {
                Some(b) if b.value >= s.value => Some(b),
                _ => Some(s),
            })
            .map(|s| s.name.clone());

        Self {
            total_visits,
            total_leads,
            close_rate,
            marketing_spend,
            marketing_revenue,
            blended_roi: roi_percent(marketing_spend, marketing_revenue),
            top_source,
        }
    }
}
