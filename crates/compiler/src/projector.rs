use roadmap_protocol::{RoadmapModel, RoadmapSection, ViewerClass};
use std::collections::HashSet;

/// Redacted view of an assembled roadmap for one viewer class.
///
/// Full-visibility viewers get an unchanged copy. Restricted viewers lose
/// every internal-only item, any section left empty by that, and the
/// redacted findings' ids in the source bundle. Order is never touched.
pub fn project(model: &RoadmapModel, viewer: ViewerClass) -> RoadmapModel {
    if viewer.has_full_visibility() {
        return model.clone();
    }

    let redacted: HashSet<&str> = model
        .items()
        .filter(|item| item.internal_only)
        .flat_map(|item| item.finding_ids())
        .collect();

    let sections: Vec<RoadmapSection> = model
        .sections
        .iter()
        .filter_map(|section| {
            let mut section = section.clone();
            section.items.retain(|item| !item.internal_only);
            (!section.is_empty()).then_some(section)
        })
        .collect();

    let mut projected = model.clone();
    projected
        .sources
        .finding_ids
        .retain(|id| !redacted.contains(id.as_str()));

    log::debug!(
        "Projected roadmap {} for {viewer}: {} -> {} sections",
        model.id,
        model.sections.len(),
        sections.len()
    );
    projected.sections = sections;
    projected
}
