use pretty_assertions::assert_eq;
use roadmap_compiler::{
    project, RoadmapAssembler, RoadmapRequest, EXECUTIVE_LOGIC, OPERATIONAL_INFRASTRUCTURE,
    OPERATIONAL_INTEGRITY, STRATEGIC_CAPABILITIES,
};
use roadmap_protocol::{RoadmapModel, ViewerClass};

const REQUEST: &str = r#"{
    "firmId": "firm-acme",
    "version": "v1",
    "executiveBrief": {"id": "brief-acme", "content": "Acme must stabilize delivery before expanding."},
    "findings": [
        {"id": "dx-1", "title": "High Risk Fix", "priority": "HIGH", "isInternalOnly": true},
        {"ticket_id": "dx-2", "title": "Medium Infra", "priority": "medium", "category": "INFRASTRUCTURE"},
        {"id": "dx-3", "title": "Long Term Bet", "priority": "LOW"}
    ],
    "intakeMetadata": {"clarityScore": 4.0, "executionRiskLevel": "MEDIUM"}
}"#;

fn titles(model: &RoadmapModel, section: &str) -> Vec<String> {
    model
        .section(section)
        .map(|s| s.items.iter().map(|item| item.title.clone()).collect())
        .unwrap_or_default()
}

fn assembled() -> RoadmapModel {
    let input = RoadmapRequest::from_json_slice(REQUEST.as_bytes())
        .unwrap()
        .normalize();
    RoadmapAssembler::default().assemble_at(&input, 1_000).unwrap()
}

#[test]
fn findings_land_in_their_horizon_sections() {
    let model = assembled();
    assert_eq!(titles(&model, OPERATIONAL_INTEGRITY), vec!["High Risk Fix"]);
    assert_eq!(titles(&model, OPERATIONAL_INFRASTRUCTURE), vec!["Medium Infra"]);
    assert_eq!(titles(&model, STRATEGIC_CAPABILITIES), vec!["Long Term Bet"]);
    assert_eq!(
        model.section_ids(),
        vec![
            EXECUTIVE_LOGIC,
            OPERATIONAL_INTEGRITY,
            OPERATIONAL_INFRASTRUCTURE,
            STRATEGIC_CAPABILITIES,
        ]
    );
    assert_eq!(model.metadata.clarity_score, Some(4.0));
    assert_eq!(model.metadata.execution_risk_level.as_deref(), Some("MEDIUM"));
}

#[test]
fn delegate_view_hides_internal_fix_executive_view_keeps_it() {
    let model = assembled();

    let delegate = project(&model, ViewerClass::Delegate);
    assert!(titles(&delegate, OPERATIONAL_INTEGRITY).is_empty());
    assert!(delegate.section(OPERATIONAL_INTEGRITY).is_none());
    assert_eq!(titles(&delegate, OPERATIONAL_INFRASTRUCTURE), vec!["Medium Infra"]);

    let executive = project(&model, ViewerClass::Executive);
    assert_eq!(titles(&executive, OPERATIONAL_INTEGRITY), vec!["High Risk Fix"]);
}

#[test]
fn model_round_trips_through_json() {
    let model = assembled();
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["status"], "DRAFT");
    assert_eq!(json["sections"][1]["horizon"], 30);
    assert_eq!(json["sections"][1]["items"][0]["risk_level"], "MEDIUM");
    assert_eq!(
        json["sections"][1]["items"][0]["sources"][0]["kind"],
        "DIAGNOSTIC_FINDING"
    );
    let back: RoadmapModel = serde_json::from_value(json).unwrap();
    assert_eq!(back, model);
}
