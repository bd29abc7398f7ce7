use std::fs;

use brokerdash_core::source::{open_source, FileSource, RecordSource, SampleSource};
use brokerdash_core::{AgentDetail, BrokerdashError};
use tempfile::TempDir;

const JSON_DATASET: &str = r#"{
  "agents": [
    {
      "id": "AG-1",
      "name": "Layla Haddad",
      "role": "Senior Advisor",
      "deals": 21,
      "revenue": 142000000,
      "conversion": 18.4,
      "responseTime": "8m",
      "commission": 2840000,
      "status": "Active",
      "avatar": "https://img.example.com/layla.jpg"
    },
    {
      "id": "AG-2",
      "name": "Omar Siddiqui",
      "role": "Sales Manager",
      "deals": 17,
      "revenue": 92400000,
      "conversion": 15.2,
      "responseTime": "12m",
      "commission": 1848000,
      "status": "Inactive"
    }
  ],
  "activity": [
    { "agentId": "AG-1", "rating": 4.9 },
    { "agentId": "AG-404", "rating": 3.0 }
  ]
}"#;

const YAML_DATASET: &str = r#"
agents:
  - id: AG-1
    name: Priya Raman
    role: Property Consultant
    deals: 14
    revenue: 68750000
    conversion: 21.7
    responseTime: 5m
    commission: 1375000
    status: Active
analytics:
  leadSources:
    - name: Website
      value: 860
"#;

const TOML_DATASET: &str = r#"
[[agents]]
id = "AG-1"
name = "Sofia Marchetti"
role = "Senior Advisor"
deals = 12
revenue = 77900000
conversion = 16.3
responseTime = "1h 5m"
commission = 1558000
status = "Active"

[[activity]]
agentId = "AG-1"
rating = 4.4

[[activity.commissions]]
date = "2024-06-08"
property = "Bluewaters 604"
amount = 276000
status = "Paid"

[[analytics.funnel]]
stage = "Leads"
count = 3300

[[analytics.funnel]]
stage = "Closed"
count = 79
"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

mod file_source_tests {
    use super::*;

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "agents.json", JSON_DATASET);

        let dataset = FileSource::new(&path).load().unwrap();
        assert_eq!(dataset.agents.len(), 2);
        assert_eq!(dataset.agents[1].avatar, "");
        assert_eq!(dataset.agents[0].response_time.as_seconds(), 480);
    }

    #[test]
    fn test_orphan_activity_is_dropped() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "agents.json", JSON_DATASET);

        let dataset = FileSource::new(&path).load().unwrap();
        assert_eq!(dataset.activity.len(), 1);
        assert_eq!(dataset.activity[0].agent_id, "AG-1");
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "agents.yaml", YAML_DATASET);

        let dataset = FileSource::new(&path).load().unwrap();
        assert_eq!(dataset.agents[0].name, "Priya Raman");
        assert!(dataset.activity.is_empty());
        assert_eq!(dataset.analytics.lead_sources.len(), 1);
        assert!(dataset.analytics.traffic.is_empty());
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "agents.toml", TOML_DATASET);

        let dataset = FileSource::new(&path).load().unwrap();
        assert_eq!(dataset.agents[0].response_time.as_seconds(), 3900);
        assert_eq!(dataset.activity[0].commissions.len(), 1);
        assert_eq!(dataset.analytics.funnel.len(), 2);
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "agents.json", "{ \"agents\": [ { \"id\": 1 } ] }");

        let err = FileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, BrokerdashError::DatasetParse { .. }));
        assert!(err.is_dataset_error());
    }

    #[test]
    fn test_bad_response_time_is_rejected() {
        let dir = TempDir::new().unwrap();
        let contents = JSON_DATASET.replace("\"8m\"", "\"whenever\"");
        let path = write_file(&dir, "agents.json", &contents);

        let err = FileSource::new(&path).load().unwrap_err();
        assert_eq!(err.error_code(), "E1003");
        assert!(err.to_string().contains("whenever"));
    }

    #[test]
    fn test_duplicate_ids_rejected_at_boundary() {
        let dir = TempDir::new().unwrap();
        let contents = JSON_DATASET.replace("\"AG-2\"", "\"AG-1\"");
        let path = write_file(&dir, "agents.json", &contents);

        let err = FileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, BrokerdashError::DuplicateAgentId(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "agents.csv", "id,name\n");

        let err = FileSource::new(&path).load().unwrap_err();
        assert_eq!(err.error_code(), "E1002");
    }

    #[test]
    fn test_empty_file_object_is_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.json", "{}");

        let dataset = open_source(Some(path.as_path())).load().unwrap();
        assert!(dataset.agents.is_empty());
        assert!(dataset.analytics.is_empty());
    }
}

mod sample_source_tests {
    use super::*;

    #[test]
    fn test_sample_has_mixed_statuses() {
        let dataset = SampleSource.load().unwrap();
        assert!(dataset.agents.iter().any(|a| a.is_active()));
        assert!(dataset.agents.iter().any(|a| !a.is_active()));
    }

    #[test]
    fn test_every_sample_agent_builds_a_detail() {
        let dataset = SampleSource.load().unwrap();
        for agent in &dataset.agents {
            let detail = AgentDetail::for_agent(&dataset, &agent.id).unwrap();
            assert!(detail.rank.is_some());
            assert_eq!(detail.roster_size, dataset.agents.len());
        }
    }

    #[test]
    fn test_sample_trends_differ_between_agents() {
        let dataset = SampleSource.load().unwrap();
        let first = AgentDetail::for_agent(&dataset, &dataset.agents[0].id).unwrap();
        let second = AgentDetail::for_agent(&dataset, &dataset.agents[1].id).unwrap();
        assert_ne!(first.trend, second.trend);
    }
}
