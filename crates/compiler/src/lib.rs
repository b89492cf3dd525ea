//! # Roadmap Compiler
//!
//! Deterministic assembly of strategic roadmaps from moderated diagnostic
//! findings, plus viewer-class projection of the result.
//!
//! ## Architecture
//!
//! ```text
//! Upstream JSON (loosely shaped)
//!     │
//!     ├──> Normalization (RoadmapRequest → AssemblyInput)
//!     │
//!     ├──> Roadmap Assembler
//!     │    ├─> Validate required inputs
//!     │    ├─> Finding → RoadmapItem (stable id, horizon, risk)
//!     │    ├─> Stable sort by risk
//!     │    ├─> Fill sections from the Section Contract (caps applied)
//!     │    └─> Prune empty sections
//!     │
//!     └──> Roadmap Projector (per viewer class)
//!          └─> Drop internal-only items and emptied sections
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roadmap_compiler::{assemble, project, AssemblyInput};
//! use roadmap_protocol::{DiagnosticFinding, ExecutiveBrief, Priority, ViewerClass};
//!
//! let input = AssemblyInput::new("firm-1", "v1", ExecutiveBrief::new("b1", "Stabilize delivery."))
//!     .with_findings(vec![
//!         DiagnosticFinding::new("f1", "Fix invoicing").with_priority(Priority::High),
//!     ]);
//!
//! let roadmap = assemble(&input).unwrap();
//! let delegate_view = project(&roadmap, ViewerClass::Delegate);
//! assert_eq!(delegate_view.section_ids(), roadmap.section_ids());
//! ```

mod assembler;
mod config;
mod contract;
mod error;
mod ids;
mod normalize;
mod projector;

pub use assembler::{assemble, horizon_for, AssemblyInput, RoadmapAssembler};
pub use config::{CompilerConfig, DEFAULT_BRIEF_EXCERPT_CHARS};
pub use contract::{
    SectionContract, SectionFill, SectionSpec, EXECUTIVE_LOGIC, OPERATIONAL_INFRASTRUCTURE,
    OPERATIONAL_INTEGRITY, RISK_WATCHPOINTS, STRATEGIC_CAPABILITIES,
};
pub use error::{Result, RoadmapError};
pub use ids::{item_id, roadmap_id};
pub use normalize::{RawBrief, RawFinding, RawIntake, RoadmapRequest};
pub use projector::project;
