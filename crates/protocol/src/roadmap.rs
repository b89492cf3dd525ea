use serde::{Deserialize, Serialize};
use std::fmt;

use crate::levels::{Horizon, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    DiagnosticFinding,
    ExecutiveBrief,
}

/// Pointer from derived output back to the record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    pub kind: SourceKind,
    pub id: String,
}

impl SourceRef {
    pub fn finding(id: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::DiagnosticFinding,
            id: id.into(),
        }
    }

    pub fn brief(id: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::ExecutiveBrief,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub rationale: String,
    pub sources: Vec<SourceRef>,
    pub risk_level: RiskLevel,
    pub horizon: Horizon,
    pub internal_only: bool,
}

impl RoadmapItem {
    /// Ids of the findings this item was derived from.
    pub fn finding_ids(&self) -> impl Iterator<Item = &str> {
        self.sources
            .iter()
            .filter(|source| source.kind == SourceKind::DiagnosticFinding)
            .map(|source| source.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapSection {
    pub id: String,
    pub title: String,
    pub order: u32,
    pub horizon: Option<Horizon>,
    /// Opaque hint for the renderer.
    pub render_mode: String,
    pub max_items: usize,
    pub items: Vec<RoadmapItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl RoadmapSection {
    /// A section with no items and no (non-blank) summary is never emitted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self
                .summary
                .as_deref()
                .map_or(true, |summary| summary.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoadmapStatus {
    Draft,
    InReview,
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBundle {
    pub executive_brief_id: String,
    pub finding_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapMetadata {
    pub generated_at_unix_ms: u64,
    pub clarity_score: Option<f64>,
    pub execution_risk_level: Option<String>,
    pub constraint_consensus_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapModel {
    pub id: String,
    pub firm_id: String,
    pub version: String,
    pub status: RoadmapStatus,
    pub sections: Vec<RoadmapSection>,
    pub snapshot_id: Option<String>,
    pub sources: SourceBundle,
    pub metadata: RoadmapMetadata,
}

impl RoadmapModel {
    pub fn section(&self, id: &str) -> Option<&RoadmapSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|section| section.id.as_str()).collect()
    }

    /// Every item across all sections, in section order. Items listed in
    /// more than one section are yielded once per placement.
    pub fn items(&self) -> impl Iterator<Item = &RoadmapItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }
}

/// Audience a roadmap is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewerClass {
    Executive,
    Delegate,
}

impl ViewerClass {
    pub const fn has_full_visibility(self) -> bool {
        matches!(self, Self::Executive)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Executive => "EXECUTIVE",
            Self::Delegate => "DELEGATE",
        }
    }
}

impl fmt::Display for ViewerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
