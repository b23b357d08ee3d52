//! Integration tests for groundwork-core.
//!
//! Exercise the extraction → validation → planning pipeline end to end at
//! the domain level. Generator/emitter end-to-end coverage lives in the
//! adapters crate, which owns the built-in generator set.

use groundwork_core::domain::{
    BlockMarkers, DomainError, FieldId, GeneratorId, Violation, allowed_values, extract, plan,
    validate,
};

fn document(block: &str) -> String {
    format!(
        "# demo\n\nSome prose before.\n\n<!-- GROUNDWORK-CONFIG-START -->\n{block}<!-- GROUNDWORK-CONFIG-END -->\n\nSome prose after.\n"
    )
}

const COMPLETE_BLOCK: &str = "\
PROJECT_TYPE: api
LANGUAGE: go
FRAMEWORK: gin
BUILD_SYSTEM: make
DATABASE: postgresql
DEPLOYMENT: docker
CI_CD: github-actions
TESTING: go-test
LICENSE_TYPE: mit
VISIBILITY: public
";

#[test]
fn well_formed_document_validates_with_ten_entries() {
    let raw = extract(&document(COMPLETE_BLOCK), &BlockMarkers::default()).unwrap();
    assert_eq!(raw.len(), 10);
    let config = validate(&raw).unwrap();
    assert_eq!(config.entries().len(), 10);
}

#[test]
fn scenario_a_go_api_docker_plan() {
    let raw = extract(&document(COMPLETE_BLOCK), &BlockMarkers::default()).unwrap();
    let config = validate(&raw).unwrap();
    let actions = plan(&config);

    let ids: Vec<GeneratorId> = actions.iter().map(|a| a.generator).collect();
    assert_eq!(ids[0], GeneratorId::ProjectTree);
    assert!(ids.contains(&GeneratorId::ModuleManifest));
    assert!(ids.contains(&GeneratorId::ContainerManifest));

    let dirs = &actions[0].params.directories;
    for expected in ["src", "tests", "docs", "scripts", "api", "internal", "pkg"] {
        assert!(dirs.iter().any(|d| d == expected), "missing {expected}");
    }
}

#[test]
fn scenario_b_missing_visibility_is_the_only_violation() {
    let block = COMPLETE_BLOCK.replace("VISIBILITY: public\n", "");
    let raw = extract(&document(&block), &BlockMarkers::default()).unwrap();

    match validate(&raw) {
        Err(DomainError::ConfigurationInvalid { violations }) => {
            assert_eq!(
                violations,
                vec![Violation::MissingField {
                    field: FieldId::Visibility
                }]
            );
        }
        other => panic!("expected ConfigurationInvalid, got {other:?}"),
    }
}

#[test]
fn scenario_c_cobol_reports_the_declared_allowed_set() {
    let block = COMPLETE_BLOCK.replace("LANGUAGE: go", "LANGUAGE: cobol");
    let raw = extract(&document(&block), &BlockMarkers::default()).unwrap();

    match validate(&raw) {
        Err(DomainError::ConfigurationInvalid { violations }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(
                violations[0],
                Violation::InvalidValue {
                    field: FieldId::Language,
                    value: "cobol".into(),
                    allowed: allowed_values(FieldId::Language),
                }
            );
        }
        other => panic!("expected ConfigurationInvalid, got {other:?}"),
    }
}

#[test]
fn scenario_d_deployment_none_omits_container_only() {
    let block = COMPLETE_BLOCK.replace("DEPLOYMENT: docker", "DEPLOYMENT: none");
    let raw = extract(&document(&block), &BlockMarkers::default()).unwrap();
    let config = validate(&raw).unwrap();
    let ids: Vec<GeneratorId> = plan(&config).iter().map(|a| a.generator).collect();

    assert!(!ids.contains(&GeneratorId::ContainerManifest));
    for expected in [
        GeneratorId::ProjectTree,
        GeneratorId::ModuleManifest,
        GeneratorId::IgnoreFile,
        GeneratorId::EditorConfig,
        GeneratorId::CiWorkflow,
    ] {
        assert!(ids.contains(&expected), "missing {expected}");
    }
}

#[test]
fn duplicate_key_keeps_first_value_through_validation() {
    let block = format!("{COMPLETE_BLOCK}LANGUAGE: rust\n");
    let raw = extract(&document(&block), &BlockMarkers::default()).unwrap();
    let config = validate(&raw).unwrap();
    assert_eq!(config.language().as_str(), "go");
}

#[test]
fn extraction_and_planning_are_deterministic_end_to_end() {
    let doc = document(COMPLETE_BLOCK);
    let markers = BlockMarkers::default();

    let first = plan(&validate(&extract(&doc, &markers).unwrap()).unwrap());
    let second = plan(&validate(&extract(&doc, &markers).unwrap()).unwrap());
    assert_eq!(first, second);
}

#[test]
fn document_without_block_fails_before_validation() {
    let err = extract("# just a readme\n\nno block here\n", &BlockMarkers::default()).unwrap_err();
    assert!(matches!(err, DomainError::BlockNotFound { .. }));
}
