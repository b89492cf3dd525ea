use once_cell::sync::Lazy;
use roadmap_protocol::{Horizon, RiskLevel, RoadmapItem, RoadmapSection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, RoadmapError};

pub const EXECUTIVE_LOGIC: &str = "executive-logic";
pub const OPERATIONAL_INTEGRITY: &str = "operational-integrity";
pub const OPERATIONAL_INFRASTRUCTURE: &str = "operational-infrastructure";
pub const STRATEGIC_CAPABILITIES: &str = "strategic-capabilities";
pub const RISK_WATCHPOINTS: &str = "risk-watchpoints";

/// How a section gets its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionFill {
    /// Carries the executive brief excerpt as its summary; never holds items
    ExecutiveSummary,

    /// Items whose computed horizon equals `days`
    Horizon { days: Horizon },

    /// Items whose risk level equals `level`, regardless of horizon
    Risk { level: RiskLevel },
}

/// One row of the section contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
    /// Ascending; earlier sections have lower values
    pub order: u32,
    pub render_mode: String,
    pub max_items: usize,
    pub fill: SectionFill,
}

impl SectionSpec {
    fn new(
        id: &str,
        title: &str,
        order: u32,
        render_mode: &str,
        max_items: usize,
        fill: SectionFill,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            order,
            render_mode: render_mode.to_string(),
            max_items,
            fill,
        }
    }

    pub fn horizon(&self) -> Option<Horizon> {
        match self.fill {
            SectionFill::Horizon { days } => Some(days),
            _ => None,
        }
    }

    /// Whether an item qualifies for this section before the cap is applied.
    pub fn accepts(&self, item: &RoadmapItem) -> bool {
        match &self.fill {
            SectionFill::ExecutiveSummary => false,
            SectionFill::Horizon { days } => item.horizon == *days,
            SectionFill::Risk { level } => item.risk_level == *level,
        }
    }

    /// Empty output section shaped by this row.
    pub fn empty_section(&self) -> RoadmapSection {
        RoadmapSection {
            id: self.id.clone(),
            title: self.title.clone(),
            order: self.order,
            horizon: self.horizon(),
            render_mode: self.render_mode.clone(),
            max_items: self.max_items,
            items: Vec::new(),
            summary: None,
        }
    }
}

/// Ordered, immutable table of roadmap sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContract {
    sections: Vec<SectionSpec>,
}

static CANONICAL: Lazy<SectionContract> = Lazy::new(|| SectionContract {
    sections: vec![
        SectionSpec::new(
            EXECUTIVE_LOGIC,
            "Executive Logic & Guardrails",
            10,
            "summary",
            1,
            SectionFill::ExecutiveSummary,
        ),
        SectionSpec::new(
            OPERATIONAL_INTEGRITY,
            "30-Day Operational Integrity",
            20,
            "grid",
            5,
            SectionFill::Horizon {
                days: Horizon::Days30,
            },
        ),
        SectionSpec::new(
            OPERATIONAL_INFRASTRUCTURE,
            "90-Day Operational Infrastructure",
            30,
            "grid",
            5,
            SectionFill::Horizon {
                days: Horizon::Days90,
            },
        ),
        SectionSpec::new(
            STRATEGIC_CAPABILITIES,
            "180-Day Strategic Capabilities",
            40,
            "grid",
            3,
            SectionFill::Horizon {
                days: Horizon::Days180,
            },
        ),
        SectionSpec::new(
            RISK_WATCHPOINTS,
            "Risk Watchpoints",
            50,
            "list",
            5,
            SectionFill::Risk {
                level: RiskLevel::High,
            },
        ),
    ],
});

impl SectionContract {
    /// The five-section contract every roadmap uses unless configured otherwise.
    pub fn canonical() -> &'static SectionContract {
        &CANONICAL
    }

    /// Validate rows and sort them by `order`.
    pub fn new(mut sections: Vec<SectionSpec>) -> Result<Self> {
        if sections.is_empty() {
            return Err(RoadmapError::invalid_contract("contract has no sections"));
        }

        let mut ids = HashSet::new();
        let mut orders = HashSet::new();
        for spec in &sections {
            if spec.id.trim().is_empty() {
                return Err(RoadmapError::invalid_contract(format!(
                    "section with order {} has a blank id",
                    spec.order
                )));
            }
            if !ids.insert(spec.id.as_str()) {
                return Err(RoadmapError::invalid_contract(format!(
                    "duplicate section id '{}'",
                    spec.id
                )));
            }
            if !orders.insert(spec.order) {
                return Err(RoadmapError::invalid_contract(format!(
                    "section '{}' reuses order {}",
                    spec.id, spec.order
                )));
            }
        }

        sections.sort_by_key(|spec| spec.order);
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|spec| spec.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|spec| spec.id.as_str())
    }

    /// Whether `ids` appear in this contract's order with no repeats and no
    /// unknown entries.
    pub fn is_ordered_subsequence<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut canonical = self.ids();
        ids.into_iter()
            .all(|id| canonical.by_ref().any(|known| known == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_contract_order_and_caps() {
        let contract = SectionContract::canonical();
        let ids: Vec<&str> = contract.ids().collect();
        assert_eq!(
            ids,
            vec![
                EXECUTIVE_LOGIC,
                OPERATIONAL_INTEGRITY,
                OPERATIONAL_INFRASTRUCTURE,
                STRATEGIC_CAPABILITIES,
                RISK_WATCHPOINTS,
            ]
        );
        let caps: Vec<usize> = contract.sections().iter().map(|s| s.max_items).collect();
        assert_eq!(caps, vec![1, 5, 5, 3, 5]);
        let horizons: Vec<Option<u16>> = contract
            .sections()
            .iter()
            .map(|s| s.horizon().map(Horizon::days))
            .collect();
        assert_eq!(horizons, vec![None, Some(30), Some(90), Some(180), None]);
    }

    #[test]
    fn new_sorts_rows_by_order() {
        let contract = SectionContract::new(vec![
            SectionSpec::new("late", "Late", 20, "grid", 2, SectionFill::ExecutiveSummary),
            SectionSpec::new("early", "Early", 5, "grid", 2, SectionFill::ExecutiveSummary),
        ])
        .unwrap();
        let ids: Vec<&str> = contract.ids().collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn new_rejects_duplicates_and_blanks() {
        let dup_id = SectionContract::new(vec![
            SectionSpec::new("a", "A", 1, "grid", 1, SectionFill::ExecutiveSummary),
            SectionSpec::new("a", "B", 2, "grid", 1, SectionFill::ExecutiveSummary),
        ]);
        assert!(matches!(dup_id, Err(RoadmapError::InvalidContract(_))));

        let dup_order = SectionContract::new(vec![
            SectionSpec::new("a", "A", 1, "grid", 1, SectionFill::ExecutiveSummary),
            SectionSpec::new("b", "B", 1, "grid", 1, SectionFill::ExecutiveSummary),
        ]);
        assert!(matches!(dup_order, Err(RoadmapError::InvalidContract(_))));

        let blank = SectionContract::new(vec![SectionSpec::new(
            " ",
            "A",
            1,
            "grid",
            1,
            SectionFill::ExecutiveSummary,
        )]);
        assert!(matches!(blank, Err(RoadmapError::InvalidContract(_))));

        assert!(SectionContract::new(Vec::new()).is_err());
    }

    #[test]
    fn ordered_subsequence_check() {
        let contract = SectionContract::canonical();
        assert!(contract.is_ordered_subsequence([EXECUTIVE_LOGIC, RISK_WATCHPOINTS]));
        assert!(contract.is_ordered_subsequence(std::iter::empty()));
        assert!(!contract.is_ordered_subsequence([RISK_WATCHPOINTS, EXECUTIVE_LOGIC]));
        assert!(!contract.is_ordered_subsequence([EXECUTIVE_LOGIC, EXECUTIVE_LOGIC]));
        assert!(!contract.is_ordered_subsequence(["unknown"]));
    }
}
