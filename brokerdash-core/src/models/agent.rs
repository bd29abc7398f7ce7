use serde::{Deserialize, Serialize};

use super::ResponseTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    #[serde(rename = "Senior Advisor")]
    SeniorAdvisor,
    #[serde(rename = "Property Consultant")]
    PropertyConsultant,
    #[serde(rename = "Sales Manager")]
    SalesManager,
}

impl AgentRole {
    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::SeniorAdvisor => "Senior Advisor",
            AgentRole::PropertyConsultant => "Property Consultant",
            AgentRole::SalesManager => "Sales Manager",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentStatus {
    Active,
    Inactive,
}

impl AgentStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Inactive => "Inactive",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AgentStatus::Active => "●",
            AgentStatus::Inactive => "○",
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One brokerage agent as supplied by the record source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub role: AgentRole,
    pub deals: u32,
    /// Whole currency units.
    pub revenue: u64,
    /// Percentage, 0-100.
    pub conversion: f64,
    pub response_time: ResponseTime,
    /// Whole currency units.
    pub commission: u64,
    pub status: AgentStatus,
    #[serde(default)]
    pub avatar: String,
}

impl AgentRecord {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Up to two uppercase initials, used in place of the avatar image.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    pub fn avatar(&self) -> Avatar {
        Avatar::from_uri(&self.avatar)
    }
}

/// Resolved avatar reference.
///
/// Anything that is not a recognisable image URI falls back to the generic
/// placeholder instead of surfacing an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "uri")]
pub enum Avatar {
    Remote(String),
    Placeholder,
}

impl Avatar {
    pub const PLACEHOLDER_GLYPH: &'static str = "◍";

    pub fn from_uri(uri: &str) -> Self {
        let uri = uri.trim();
        let has_scheme = ["http://", "https://", "file://"]
            .iter()
            .any(|scheme| uri.len() > scheme.len() && uri.starts_with(scheme));
        if has_scheme {
            Avatar::Remote(uri.to_string())
        } else {
            Avatar::Placeholder
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Avatar::Placeholder)
    }
}
