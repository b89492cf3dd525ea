//! Boundary mapping from loosely shaped upstream records to canonical types.
//!
//! Upstream services disagree on field names (`id` vs `ticket_id`, camelCase
//! vs snake_case) and send enumerations as free-form strings. Everything is
//! folded onto one shape here so the assembler only sees
//! [`DiagnosticFinding`] and friends.

use roadmap_protocol::{DiagnosticFinding, ExecutiveBrief, IntakeMetadata, Priority, RiskLevel};
use serde::Deserialize;

use crate::assembler::AssemblyInput;
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFinding {
    #[serde(default, alias = "ticket_id", alias = "ticketId", alias = "finding_id")]
    pub id: Option<String>,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default, alias = "summary")]
    pub description: Option<String>,
    #[serde(default, alias = "why")]
    pub rationale: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, alias = "type", alias = "finding_type")]
    pub category: Option<String>,
    #[serde(default, alias = "riskLevel", alias = "risk")]
    pub risk_level: Option<String>,
    #[serde(default, alias = "isInternalOnly", alias = "internal_only")]
    pub is_internal_only: Option<bool>,
}

impl RawFinding {
    pub fn normalize(self) -> DiagnosticFinding {
        let id = self.id.map(|id| id.trim().to_string()).unwrap_or_default();
        let priority = match self.priority.as_deref() {
            Some(raw) => Priority::try_parse(raw).unwrap_or_else(|| {
                log::warn!("Finding {id}: unknown priority '{raw}', using LOW");
                Priority::Low
            }),
            None => Priority::Low,
        };
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        DiagnosticFinding {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            rationale: self.rationale.unwrap_or_default(),
            priority,
            category,
            risk_level: self
                .risk_level
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .map(RiskLevel::parse)
                .unwrap_or_default(),
            internal_only: self.is_internal_only.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBrief {
    #[serde(default, alias = "brief_id", alias = "briefId")]
    pub id: Option<String>,
    #[serde(default, alias = "text", alias = "body")]
    pub content: Option<String>,
}

impl RawBrief {
    pub fn normalize(self) -> ExecutiveBrief {
        ExecutiveBrief {
            id: self.id.map(|id| id.trim().to_string()).unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIntake {
    #[serde(default, alias = "clarityScore", alias = "org_clarity_score")]
    pub clarity_score: Option<f64>,
    #[serde(default, alias = "executionRiskLevel", alias = "execution_risk")]
    pub execution_risk_level: Option<String>,
    #[serde(
        default,
        alias = "constraintConsensusLevel",
        alias = "constraint_consensus"
    )]
    pub constraint_consensus_level: Option<String>,
}

impl RawIntake {
    pub fn normalize(self) -> IntakeMetadata {
        IntakeMetadata {
            clarity_score: self.clarity_score,
            execution_risk_level: self.execution_risk_level,
            constraint_consensus_level: self.constraint_consensus_level,
        }
    }
}

/// One roadmap generation request as hosts send it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default, alias = "firmId")]
    pub firm_id: Option<String>,
    #[serde(default, alias = "versionTag")]
    pub version: Option<String>,
    #[serde(default, alias = "executiveBrief", alias = "brief")]
    pub executive_brief: Option<RawBrief>,
    #[serde(default, alias = "diagnostics")]
    pub findings: Vec<RawFinding>,
    #[serde(default, alias = "intake_metadata", alias = "intakeMetadata")]
    pub intake: Option<RawIntake>,
    #[serde(default, alias = "snapshotId")]
    pub snapshot_id: Option<String>,
}

impl RoadmapRequest {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Map onto canonical types. Missing required values come through blank
    /// and are rejected by the assembler's validation.
    pub fn normalize(self) -> AssemblyInput {
        AssemblyInput {
            firm_id: self.firm_id.map(|v| v.trim().to_string()).unwrap_or_default(),
            version: self.version.map(|v| v.trim().to_string()).unwrap_or_default(),
            executive_brief: self.executive_brief.map(RawBrief::normalize),
            findings: self.findings.into_iter().map(RawFinding::normalize).collect(),
            intake: self.intake.map(RawIntake::normalize).unwrap_or_default(),
            snapshot_id: self.snapshot_id.filter(|id| !id.trim().is_empty()),
        }
    }
}
