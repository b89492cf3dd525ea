use serde::{Deserialize, Serialize};

use crate::levels::{Priority, RiskLevel};

/// A moderated diagnostic finding in canonical form.
///
/// Hosts with loosely shaped records should go through the compiler's
/// normalization step rather than building this by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticFinding {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub priority: Priority,
    /// Explicit type tag, e.g. `INFRASTRUCTURE`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub internal_only: bool,
}

impl DiagnosticFinding {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            rationale: String::new(),
            priority: Priority::default(),
            category: None,
            risk_level: RiskLevel::default(),
            internal_only: false,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_risk(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    #[must_use]
    pub fn internal_only(mut self, internal_only: bool) -> Self {
        self.internal_only = internal_only;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    /// Whether the explicit category marks this as infrastructure work.
    pub fn is_infrastructure(&self) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.trim().eq_ignore_ascii_case("INFRASTRUCTURE"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveBrief {
    pub id: String,
    #[serde(default)]
    pub content: String,
}

impl ExecutiveBrief {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Intake signals carried through to roadmap metadata untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeMetadata {
    #[serde(default)]
    pub clarity_score: Option<f64>,
    #[serde(default)]
    pub execution_risk_level: Option<String>,
    #[serde(default)]
    pub constraint_consensus_level: Option<String>,
}
