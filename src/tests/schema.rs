use super::{
    apply_compat_aliases, check_registry, validate, validate_label, DocType, AT_A_GLANCE,
    IDEATION_SECTIONS, LEGACY_AT_A_GLANCE, PLAN_SECTIONS,
};
use crate::error::DocError;
use crate::formats::markdown::MarkdownFormat;
use crate::outline::{extract_outline, Outline};

fn document(sections: &[&str]) -> String {
    sections
        .iter()
        .map(|name| format!("## {name}\n\nSome notes about {name}.\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn outline(content: &str) -> Outline {
    extract_outline(content, &MarkdownFormat)
}

#[test]
fn test_complete_plan_passes() {
    let sections = outline(&document(PLAN_SECTIONS));
    let validated = validate(&sections, DocType::Plan).unwrap();

    assert_eq!(validated.doc_type, DocType::Plan);
    assert_eq!(validated.sections, sections);
}

#[test]
fn test_plan_in_any_order_and_nesting_passes() {
    let content = "\
# 9. Handoff
Ship it.
# Plan
## 1) Scope
Everything.
### Success Metrics
Green builds.
### Dependencies
None.
## Risks and Mitigations
### Milestones
M1.
#### Task Checklist
- [ ] one
## Verification Steps
Run the suite.
## Implementation Notes
Keep it small.
";
    assert!(validate(&outline(content), DocType::Plan).is_ok());
}

#[test]
fn test_plan_missing_handoff() {
    let required: Vec<&str> = PLAN_SECTIONS
        .iter()
        .copied()
        .filter(|name| *name != "handoff")
        .collect();
    let sections = outline(&document(&required));

    match validate(&sections, DocType::Plan) {
        Err(DocError::MissingSections(missing)) => assert_eq!(missing, vec!["handoff"]),
        other => panic!("expected missing sections, got {other:?}"),
    }
}

#[test]
fn test_ideation_with_blank_dependencies() {
    let content = document(IDEATION_SECTIONS).replace(
        "## dependencies\n\nSome notes about dependencies.\n",
        "## Dependencies\n\n   \n\t\n",
    );
    let sections = outline(&content);

    match validate(&sections, DocType::Ideation) {
        Err(DocError::EmptySections(empty)) => assert_eq!(empty, vec!["dependencies"]),
        other => panic!("expected empty sections, got {other:?}"),
    }
}

#[test]
fn test_missing_takes_precedence_over_empty() {
    let sections = outline("# Scope\n# Handoff\nDone.\n");

    match validate(&sections, DocType::Plan) {
        Err(DocError::MissingSections(missing)) => {
            assert_eq!(missing.len(), PLAN_SECTIONS.len() - 2);
            assert_eq!(missing[0], "success metrics");
            assert!(!missing.contains(&"scope".to_string()));
        }
        other => panic!("expected missing sections, got {other:?}"),
    }
}

#[test]
fn test_empty_sections_keep_required_order() {
    let content = document(PLAN_SECTIONS)
        .replace("Some notes about milestones.", "")
        .replace("Some notes about scope.", "");

    match validate(&outline(&content), DocType::Plan) {
        Err(DocError::EmptySections(empty)) => assert_eq!(empty, vec!["scope", "milestones"]),
        other => panic!("expected empty sections, got {other:?}"),
    }
}

#[test]
fn test_legacy_at_a_glance_alias() {
    let required: Vec<&str> = IDEATION_SECTIONS
        .iter()
        .copied()
        .filter(|name| *name != AT_A_GLANCE)
        .collect();
    let content = format!(
        "{}\n## At-a-Glance (Bullet List of Outcomes)\n\n- faster reviews\n",
        document(&required)
    );
    let sections = outline(&content);

    assert!(matches!(
        validate(&sections, DocType::Ideation),
        Err(DocError::MissingSections(_))
    ));

    let patched = apply_compat_aliases(sections);
    assert_eq!(patched.get(AT_A_GLANCE), Some("- faster reviews"));
    assert_eq!(patched.get(LEGACY_AT_A_GLANCE), Some("- faster reviews"));
    assert!(validate(&patched, DocType::Ideation).is_ok());
}

#[test]
fn test_alias_never_overwrites_canonical_key() {
    let sections = outline(
        "# At a Glance: Bullet List of Outcomes\ncanonical\n# At-a-Glance Bullet List of Outcomes\nlegacy\n",
    );
    let patched = apply_compat_aliases(sections);

    assert_eq!(patched.get(AT_A_GLANCE), Some("canonical"));
    assert_eq!(patched.get(LEGACY_AT_A_GLANCE), Some("legacy"));
}

#[test]
fn test_alias_is_noop_without_legacy_key() {
    let sections = outline("# Scope\nbody\n");

    assert_eq!(apply_compat_aliases(sections.clone()), sections);
}

#[test]
fn test_unknown_label_fails_before_checking_sections() {
    let sections = outline(&document(PLAN_SECTIONS));

    match validate_label(&sections, "roadmap") {
        Err(DocError::UnknownDocType(label)) => assert_eq!(label, "roadmap"),
        other => panic!("expected unknown doc type, got {other:?}"),
    }
    assert!(validate_label(&sections, "plan").is_ok());
    assert!(matches!(
        validate_label(&sections, "Plan"),
        Err(DocError::UnknownDocType(_))
    ));
}

#[test]
fn test_doc_type_labels_round_trip() {
    for doc_type in DocType::ALL {
        assert_eq!(doc_type.label().parse::<DocType>().unwrap(), doc_type);
    }
    assert_eq!(DocType::Ideation.required_sections().len(), 10);
    assert_eq!(DocType::Plan.required_sections().len(), 9);
}

#[test]
fn test_builtin_registry_passes_self_check() {
    assert!(check_registry().is_ok());
}
