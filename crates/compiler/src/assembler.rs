use roadmap_protocol::{
    DiagnosticFinding, ExecutiveBrief, Horizon, IntakeMetadata, Priority, RoadmapItem,
    RoadmapMetadata, RoadmapModel, RoadmapStatus, SourceBundle, SourceRef,
};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::CompilerConfig;
use crate::contract::{SectionContract, SectionFill};
use crate::error::{Result, RoadmapError};
use crate::ids;

/// Everything one assembly run needs, already in canonical form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyInput {
    pub firm_id: String,
    pub version: String,
    pub executive_brief: Option<ExecutiveBrief>,
    pub findings: Vec<DiagnosticFinding>,
    pub intake: IntakeMetadata,
    pub snapshot_id: Option<String>,
}

impl AssemblyInput {
    pub fn new(
        firm_id: impl Into<String>,
        version: impl Into<String>,
        executive_brief: ExecutiveBrief,
    ) -> Self {
        Self {
            firm_id: firm_id.into(),
            version: version.into(),
            executive_brief: Some(executive_brief),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_findings(mut self, findings: Vec<DiagnosticFinding>) -> Self {
        self.findings = findings;
        self
    }

    #[must_use]
    pub fn with_intake(mut self, intake: IntakeMetadata) -> Self {
        self.intake = intake;
        self
    }

    #[must_use]
    pub fn with_snapshot(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }
}

/// Builds canonical roadmaps from findings and an executive brief.
///
/// Assembly is pure apart from the generation timestamp, which is read once
/// per call. The assembler holds no mutable state and can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct RoadmapAssembler {
    contract: SectionContract,
    config: CompilerConfig,
}

impl Default for RoadmapAssembler {
    fn default() -> Self {
        Self {
            contract: SectionContract::canonical().clone(),
            config: CompilerConfig::default(),
        }
    }
}

impl RoadmapAssembler {
    pub fn new(contract: SectionContract, config: CompilerConfig) -> Self {
        Self { contract, config }
    }

    /// Build an assembler from config, using its section contract when set
    pub fn from_config(config: CompilerConfig) -> Result<Self> {
        config.validate()?;
        let contract = config.contract()?;
        Ok(Self { contract, config })
    }

    pub fn contract(&self) -> &SectionContract {
        &self.contract
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn assemble(&self, input: &AssemblyInput) -> Result<RoadmapModel> {
        self.assemble_at(input, current_unix_ms())
    }

    /// Assemble with a caller-supplied generation timestamp.
    pub fn assemble_at(
        &self,
        input: &AssemblyInput,
        generated_at_unix_ms: u64,
    ) -> Result<RoadmapModel> {
        let brief = validate(input)?;

        let mut pool: Vec<RoadmapItem> = input.findings.iter().map(derive_item).collect();
        // Stable: equal-risk items keep input order.
        pool.sort_by_key(|item| Reverse(item.risk_level.weight()));

        let summary = self.brief_summary(brief);
        let mut placed: HashSet<String> = HashSet::new();
        let mut sections = Vec::with_capacity(self.contract.sections().len());

        for spec in self.contract.sections() {
            let mut section = spec.empty_section();
            if spec.fill == SectionFill::ExecutiveSummary {
                section.summary = summary.clone();
            } else {
                let mut qualifying = pool.iter().filter(|item| spec.accepts(item));
                section.items = qualifying
                    .by_ref()
                    .take(spec.max_items)
                    .cloned()
                    .collect();
                let dropped = qualifying.count();
                if dropped > 0 {
                    log::debug!(
                        "Section {} over capacity: kept {}, dropped {dropped}",
                        spec.id,
                        spec.max_items
                    );
                }
            }

            if section.is_empty() {
                continue;
            }
            for item in &section.items {
                placed.extend(item.finding_ids().map(str::to_string));
            }
            sections.push(section);
        }

        let finding_ids = input
            .findings
            .iter()
            .filter(|finding| placed.contains(&finding.id))
            .map(|finding| finding.id.clone())
            .collect();

        log::debug!(
            "Assembled roadmap for firm {} ({}): {} findings, {} sections",
            input.firm_id,
            input.version,
            input.findings.len(),
            sections.len()
        );

        Ok(RoadmapModel {
            id: ids::roadmap_id(&input.firm_id, &input.version),
            firm_id: input.firm_id.clone(),
            version: input.version.clone(),
            status: RoadmapStatus::Draft,
            sections,
            snapshot_id: input.snapshot_id.clone(),
            sources: SourceBundle {
                executive_brief_id: brief.id.clone(),
                finding_ids,
            },
            metadata: RoadmapMetadata {
                generated_at_unix_ms,
                clarity_score: input.intake.clarity_score,
                execution_risk_level: input.intake.execution_risk_level.clone(),
                constraint_consensus_level: input.intake.constraint_consensus_level.clone(),
            },
        })
    }

    fn brief_summary(&self, brief: &ExecutiveBrief) -> Option<String> {
        let content = brief.content.trim();
        if content.is_empty() {
            return self.config.empty_brief_summary.clone();
        }
        Some(excerpt(content, self.config.brief_excerpt_chars))
    }
}

/// Assemble with the canonical contract and default config.
pub fn assemble(input: &AssemblyInput) -> Result<RoadmapModel> {
    RoadmapAssembler::default().assemble(input)
}

/// Time bucket for a finding: urgent priorities first, then medium or
/// infrastructure work, everything else long-term.
pub fn horizon_for(finding: &DiagnosticFinding) -> Horizon {
    if finding.priority.is_urgent() {
        Horizon::Days30
    } else if finding.priority == Priority::Medium || finding.is_infrastructure() {
        Horizon::Days90
    } else {
        Horizon::Days180
    }
}

fn derive_item(finding: &DiagnosticFinding) -> RoadmapItem {
    RoadmapItem {
        id: ids::item_id(&finding.id),
        title: finding.title.clone(),
        description: finding.description.clone(),
        rationale: finding.rationale.clone(),
        sources: vec![SourceRef::finding(finding.id.clone())],
        risk_level: finding.risk_level.clone(),
        horizon: horizon_for(finding),
        internal_only: finding.internal_only,
    }
}

fn validate(input: &AssemblyInput) -> Result<&ExecutiveBrief> {
    if input.firm_id.trim().is_empty() {
        return Err(RoadmapError::MissingField("firm_id"));
    }
    if input.version.trim().is_empty() {
        return Err(RoadmapError::MissingField("version"));
    }
    let brief = input
        .executive_brief
        .as_ref()
        .ok_or(RoadmapError::MissingField("executive_brief"))?;
    if brief.id.trim().is_empty() {
        return Err(RoadmapError::MissingField("executive_brief.id"));
    }

    let mut seen = HashSet::with_capacity(input.findings.len());
    for (index, finding) in input.findings.iter().enumerate() {
        if finding.id.trim().is_empty() {
            return Err(RoadmapError::MissingFindingId { index });
        }
        if !seen.insert(finding.id.as_str()) {
            return Err(RoadmapError::DuplicateFinding {
                id: finding.id.clone(),
            });
        }
    }
    Ok(brief)
}

fn excerpt(content: &str, max_chars: usize) -> String {
    content.graphemes(true).take(max_chars).collect()
}

fn current_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|dur| u64::try_from(dur.as_millis()).ok())
        .unwrap_or(0)
}
