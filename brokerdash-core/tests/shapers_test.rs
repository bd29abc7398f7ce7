use brokerdash_core::models::{
    AnalyticsDataset, CampaignRoi, EngagementPoint, FunnelStage, LeadSource, TrafficPoint,
};
use brokerdash_core::shapers::{
    commission_series, conversion_bars, deal_series, engagement_series, funnel_bars,
    lead_source_shares, roi_series, traffic_series, AnalyticsSummary,
};
use brokerdash_core::source::{RecordSource, SampleSource};

fn analytics() -> AnalyticsDataset {
    AnalyticsDataset {
        traffic: vec![
            TrafficPoint {
                name: "Jan".to_string(),
                organic: 100,
                paid: 50,
                referral: 10,
            },
            TrafficPoint {
                name: "Feb".to_string(),
                organic: 120,
                paid: 40,
                referral: 20,
            },
        ],
        lead_sources: vec![
            LeadSource {
                name: "Portals".to_string(),
                value: 30,
            },
            LeadSource {
                name: "Website".to_string(),
                value: 50,
            },
            LeadSource {
                name: "Walk-ins".to_string(),
                value: 20,
            },
        ],
        funnel: vec![
            FunnelStage {
                stage: "Leads".to_string(),
                count: 400,
            },
            FunnelStage {
                stage: "Viewings".to_string(),
                count: 100,
            },
            FunnelStage {
                stage: "Closed".to_string(),
                count: 20,
            },
        ],
        roi: vec![
            CampaignRoi {
                channel: "Portals".to_string(),
                spend: 200_000,
                revenue: 600_000,
            },
            CampaignRoi {
                channel: "Print".to_string(),
                spend: 50_000,
                revenue: 25_000,
            },
        ],
        engagement: vec![EngagementPoint {
            name: "Jan".to_string(),
            views: 2_000,
            inquiries: 50,
            tours: 12,
        }],
    }
}

mod analytics_shaper_tests {
    use super::*;

    #[test]
    fn test_traffic_totals_keep_order() {
        let series = traffic_series(&analytics().traffic);
        assert_eq!(series[0].name, "Jan");
        assert_eq!(series[0].total, 160);
        assert_eq!(series[1].total, 180);
    }

    #[test]
    fn test_lead_source_shares_sum_to_hundred() {
        let shares = lead_source_shares(&analytics().lead_sources);
        let names: Vec<&str> = shares.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Portals", "Website", "Walk-ins"]);
        assert_eq!(shares[1].share_percent, 50.0);
        let total: f64 = shares.iter().map(|s| s.share_percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lead_source_shares_all_zero() {
        let shares = lead_source_shares(&[LeadSource {
            name: "Website".to_string(),
            value: 0,
        }]);
        assert_eq!(shares[0].share_percent, 0.0);
    }

    #[test]
    fn test_funnel_widths() {
        let bars = funnel_bars(&analytics().funnel);
        let widths: Vec<f64> = bars.iter().map(|b| b.width_percent).collect();
        assert_eq!(widths, vec![100.0, 25.0, 5.0]);
        assert_eq!(bars[2].step_conversion, Some(20.0));
    }

    #[test]
    fn test_roi_in_thousands() {
        let series = roi_series(&analytics().roi);
        assert_eq!(series[0].spend_thousands, 200.0);
        assert_eq!(series[0].revenue_thousands, 600.0);
        assert_eq!(series[0].roi_percent, Some(200.0));
        assert_eq!(series[1].roi_percent, Some(-50.0));
    }

    #[test]
    fn test_engagement_inquiry_rate() {
        let series = engagement_series(&analytics().engagement);
        assert_eq!(series[0].inquiry_rate, 2.5);
        assert_eq!(
            engagement_series(&[EngagementPoint {
                name: "Feb".to_string(),
                views: 0,
                inquiries: 3,
                tours: 0,
            }])[0]
                .inquiry_rate,
            0.0
        );
    }

    #[test]
    fn test_analytics_summary() {
        let summary = AnalyticsSummary::from_dataset(&analytics());
        assert_eq!(summary.total_visits, 340);
        assert_eq!(summary.total_leads, 400);
        assert_eq!(summary.close_rate, Some(5.0));
        assert_eq!(summary.marketing_spend, 250_000);
        assert_eq!(summary.marketing_revenue, 625_000);
        assert_eq!(summary.blended_roi, Some(150.0));
        assert_eq!(summary.top_source.as_deref(), Some("Website"));
    }
}

mod roster_shaper_tests {
    use super::*;

    #[test]
    fn test_sample_roster_series_align() {
        let dataset = SampleSource.load().unwrap();
        let n = dataset.agents.len();

        assert_eq!(commission_series(&dataset.agents).len(), n);
        assert_eq!(deal_series(&dataset.agents).len(), n);
        let bars = conversion_bars(&dataset.agents);
        assert_eq!(bars.len(), n);
        for (bar, agent) in bars.iter().zip(&dataset.agents) {
            assert_eq!(bar.name, agent.name);
            assert!(bar.width_percent >= 0.0 && bar.width_percent <= 100.0);
        }
    }

    #[test]
    fn test_commission_series_in_thousands() {
        let dataset = SampleSource.load().unwrap();
        let series = commission_series(&dataset.agents);
        for (point, agent) in series.iter().zip(&dataset.agents) {
            assert_eq!(point.commission_thousands, agent.commission as f64 / 1_000.0);
        }
    }
}
