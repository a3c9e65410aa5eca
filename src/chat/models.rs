use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// Label shown next to the message body.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Bot => "FloatChat AI",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<VisualizationPayload>,
}

impl ChatMessage {
    pub(crate) fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            text: text.into(),
            created_at: Utc::now(),
            visualization: None,
        }
    }

    pub(crate) fn bot(
        id: u64,
        text: impl Into<String>,
        visualization: Option<VisualizationPayload>,
    ) -> Self {
        Self {
            id,
            role: Role::Bot,
            text: text.into(),
            created_at: Utc::now(),
            visualization,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationKind {
    Temperature,
    Salinity,
    Currents,
}

impl VisualizationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationKind::Temperature => "temperature",
            VisualizationKind::Salinity => "salinity",
            VisualizationKind::Currents => "currents",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyReading {
    pub month: String,
    pub temperature: f64,
    pub depth: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepthReading {
    pub depth: u32,
    pub salinity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Series {
    Monthly(Vec<MonthlyReading>),
    DepthProfile(Vec<DepthReading>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisualizationPayload {
    pub kind: VisualizationKind,
    pub title: String,
    pub description: String,
    pub series: Series,
}
