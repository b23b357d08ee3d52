//! End-to-end tests: document in, files out, through the built-in generator
//! set and the in-memory emitter.

use groundwork_adapters::{MemoryEmitter, builtin_registry};
use groundwork_core::{
    application::ScaffoldPipeline,
    domain::{BlockMarkers, DomainError},
    error::GroundworkError,
};

fn document(block: &str) -> String {
    format!("# demo\n\n<!-- GROUNDWORK-CONFIG-START -->\n{block}<!-- GROUNDWORK-CONFIG-END -->\n")
}

fn pipeline_with_observer() -> (ScaffoldPipeline, MemoryEmitter) {
    let emitter = MemoryEmitter::new();
    let pipeline = ScaffoldPipeline::new(builtin_registry(), Box::new(emitter.clone()));
    (pipeline, emitter)
}

const GO_API_DOCKER: &str = "\
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
fn go_api_docker_scaffolds_the_full_tree() {
    let (pipeline, emitter) = pipeline_with_observer();
    let report = pipeline
        .scaffold(&document(GO_API_DOCKER), &BlockMarkers::default(), "out")
        .unwrap();

    assert!(report.directories_created >= 9);
    assert!(report.files_written >= 6);

    for dir in ["out/src", "out/tests", "out/api", "out/pkg", "out/cmd"] {
        assert!(emitter.exists(dir), "missing directory {dir}");
    }

    let go_mod = emitter.read_file("out/go.mod").unwrap();
    assert!(go_mod.contains("gin-gonic/gin"));

    let dockerfile = emitter.read_file("out/Dockerfile").unwrap();
    assert!(dockerfile.contains("golang:1.21-alpine"));

    assert!(emitter.read_file("out/.gitignore").is_some());
    assert!(emitter.read_file("out/.editorconfig").is_some());
    assert!(emitter.read_file("out/.github/workflows/ci.yml").is_some());
    assert!(emitter.read_file("out/.github/workflows/cd.yml").is_some());
    assert!(
        emitter
            .read_file("out/.github/workflows/security.yml")
            .is_some()
    );
    assert!(emitter.read_file("out/.github/dependabot.yml").is_some());
}

#[test]
fn python_fastapi_injects_framework_dependencies() {
    let block = "\
PROJECT_TYPE: web-app
LANGUAGE: python
FRAMEWORK: fastapi
BUILD_SYSTEM: pip
DATABASE: postgresql
DEPLOYMENT: none
CI_CD: none
TESTING: pytest
LICENSE_TYPE: mit
VISIBILITY: private
";
    let (pipeline, emitter) = pipeline_with_observer();
    pipeline
        .scaffold(&document(block), &BlockMarkers::default(), "out")
        .unwrap();

    let requirements = emitter.read_file("out/requirements.txt").unwrap();
    assert!(requirements.contains("fastapi"));
    assert!(emitter.read_file("out/setup.py").is_some());
    assert!(emitter.read_file("out/pyproject.toml").is_some());
    assert!(emitter.read_file("out/pytest.ini").is_some());

    // DEPLOYMENT: none and CI_CD: none plan nothing extra.
    assert!(emitter.read_file("out/Dockerfile").is_none());
    assert!(emitter.read_file("out/.github/workflows/ci.yml").is_none());
}

#[test]
fn unmapped_language_still_scaffolds_without_a_manifest() {
    let block = "\
PROJECT_TYPE: library
LANGUAGE: ruby
FRAMEWORK: none
BUILD_SYSTEM: make
DATABASE: none
DEPLOYMENT: none
CI_CD: none
TESTING: rspec
LICENSE_TYPE: mit
VISIBILITY: public
";
    let (pipeline, emitter) = pipeline_with_observer();
    pipeline
        .scaffold(&document(block), &BlockMarkers::default(), "out")
        .unwrap();

    // Library directories plus the generic ignore file, no manifest family.
    assert!(emitter.exists("out/examples"));
    assert!(emitter.exists("out/benchmarks"));
    assert!(emitter.read_file("out/.gitignore").is_some());
    assert!(emitter.read_file("out/package.json").is_none());
    assert!(emitter.read_file("out/go.mod").is_none());
    assert!(emitter.read_file("out/Cargo.toml").is_none());
}

#[test]
fn invalid_document_writes_nothing() {
    let block = "\
PROJECT_TYPE: api
LANGUAGE: cobol
FRAMEWORK: none
BUILD_SYSTEM: make
DATABASE: none
DEPLOYMENT: none
CI_CD: none
TESTING: none
LICENSE_TYPE: mit
VISIBILITY: public
";
    let (pipeline, emitter) = pipeline_with_observer();
    let err = pipeline
        .scaffold(&document(block), &BlockMarkers::default(), "out")
        .unwrap_err();

    assert!(matches!(
        err,
        GroundworkError::Domain(DomainError::ConfigurationInvalid { .. })
    ));
    assert_eq!(emitter.file_count(), 0);
    assert!(!emitter.exists("out"));
}

#[test]
fn render_and_scaffold_agree_on_artifacts() {
    let (pipeline, emitter) = pipeline_with_observer();
    let doc = document(GO_API_DOCKER);

    let rendered = pipeline.render(&doc, &BlockMarkers::default()).unwrap();
    let report = pipeline
        .scaffold(&doc, &BlockMarkers::default(), "out")
        .unwrap();

    assert_eq!(rendered.artifacts.files().count(), report.files_written);
    assert_eq!(emitter.file_count(), report.files_written);
}

#[test]
fn scaffolding_twice_overwrites_in_place() {
    let (pipeline, emitter) = pipeline_with_observer();
    let doc = document(GO_API_DOCKER);
    let markers = BlockMarkers::default();

    let first = pipeline.scaffold(&doc, &markers, "out").unwrap();
    let second = pipeline.scaffold(&doc, &markers, "out").unwrap();

    assert_eq!(first, second);
    assert_eq!(emitter.file_count(), first.files_written);
}
