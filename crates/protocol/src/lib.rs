//! Shared data model for the roadmap compiler.
//!
//! Inputs ([`DiagnosticFinding`], [`ExecutiveBrief`], [`IntakeMetadata`]) are
//! produced by upstream collaborators; outputs ([`RoadmapModel`] and its
//! sections/items) are consumed read-only by renderers and exporters.

mod input;
mod levels;
mod roadmap;

pub use input::{DiagnosticFinding, ExecutiveBrief, IntakeMetadata};
pub use levels::{Horizon, Priority, RiskLevel};
pub use roadmap::{
    RoadmapItem, RoadmapMetadata, RoadmapModel, RoadmapSection, RoadmapStatus, SourceBundle,
    SourceKind, SourceRef, ViewerClass,
};

pub const ROADMAP_SCHEMA_VERSION: u32 = 1;
