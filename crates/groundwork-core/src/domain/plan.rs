//! Generation planning.
//!
//! # Design Rationale
//!
//! The planner turns a [`ValidatedConfig`] into an ordered list of
//! [`GenerationAction`]s. Every decision is a lookup in a static table, not a
//! conditional chain: project types map to extra directories, languages map
//! to manifest generators, deployment targets map to container support. A
//! value with no table entry plans nothing; absence of a mapping is a
//! deliberate no-op, never an error, so schema growth cannot break planning.
//!
//! Planning is pure and deterministic: the same config always produces the
//! same action sequence, byte for byte. Ordering is directories first, then
//! file generators in fixed table order. The ordering is advisory for
//! emitters (parents before children); generators themselves must not depend
//! on each other's output.

use serde::Serialize;
use std::fmt;

use crate::domain::config::ValidatedConfig;
use crate::domain::fields::{CiCd, Deployment, Framework, Language, ProjectType, Testing};

// ── Generator identifiers ────────────────────────────────────────────────────

/// Names one artifact generator family.
///
/// The planner emits these; the generator registry resolves them. The
/// `builtin_registry_covers_planner` test (adapters crate) keeps the two
/// sides paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorId {
    /// The directory skeleton (always first in a plan).
    ProjectTree,
    /// Python: requirements.txt + setup.py + pyproject.toml.
    DependencyManifest,
    /// JavaScript/TypeScript: package.json.
    PackageManifest,
    /// Go: go.mod.
    ModuleManifest,
    /// Rust: Cargo.toml.
    CrateManifest,
    /// Java with Maven: pom.xml.
    BuildManifest,
    /// .gitignore, language-aware with a generic fallback.
    IgnoreFile,
    /// .editorconfig.
    EditorConfig,
    /// Test-harness configuration (pytest.ini).
    TestConfig,
    /// .github/workflows/ci.yml.
    CiWorkflow,
    /// .github/workflows/cd.yml.
    CdWorkflow,
    /// .github/workflows/security.yml.
    SecurityWorkflow,
    /// .github/dependabot.yml.
    DependabotConfig,
    /// Dockerfile.
    ContainerManifest,
}

impl GeneratorId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectTree => "project-tree",
            Self::DependencyManifest => "dependency-manifest",
            Self::PackageManifest => "package-manifest",
            Self::ModuleManifest => "module-manifest",
            Self::CrateManifest => "crate-manifest",
            Self::BuildManifest => "build-manifest",
            Self::IgnoreFile => "ignore-file",
            Self::EditorConfig => "editor-config",
            Self::TestConfig => "test-config",
            Self::CiWorkflow => "ci-workflow",
            Self::CdWorkflow => "cd-workflow",
            Self::SecurityWorkflow => "security-workflow",
            Self::DependabotConfig => "dependabot-config",
            Self::ContainerManifest => "container-manifest",
        }
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Generation actions ───────────────────────────────────────────────────────

/// The configuration slice a generator needs.
///
/// The planner fills only the fields relevant to each generator; everything
/// else stays `None`/empty. `framework` is `None` both when the user declared
/// `none` and when the field is irrelevant; generators treat the two alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneratorParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<Framework>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testing: Option<Testing>,
}

impl GeneratorParams {
    fn for_language(language: Language) -> Self {
        Self {
            language: Some(language),
            ..Self::default()
        }
    }
}

/// One planned, parameterized unit of artifact production.
///
/// Created by [`plan`], consumed exactly once by the matching generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationAction {
    pub generator: GeneratorId,
    pub params: GeneratorParams,
}

impl GenerationAction {
    fn new(generator: GeneratorId, params: GeneratorParams) -> Self {
        Self { generator, params }
    }
}

// ── Decision tables ──────────────────────────────────────────────────────────

/// Directories every project gets, regardless of configuration.
pub const BASE_DIRECTORIES: &[&str] = &[
    "src",
    "tests",
    "docs",
    "scripts",
    ".github/workflows",
    ".github/ISSUE_TEMPLATE",
];

/// Extra directories per project type. Unlisted types contribute nothing.
static PROJECT_TYPE_DIRECTORIES: &[(ProjectType, &[&str])] = &[
    (ProjectType::WebApp, &["public", "assets", "components"]),
    (ProjectType::CliTool, &["cmd", "internal"]),
    (ProjectType::Library, &["examples", "benchmarks"]),
    (ProjectType::Api, &["api", "internal", "pkg"]),
    (
        ProjectType::DataScience,
        &["data", "notebooks", "models", "reports"],
    ),
];

/// Extra directories per language. Unlisted languages contribute nothing.
///
/// Build-output directories (node_modules, target) are deliberately absent:
/// they belong in the ignore file, not the source tree.
static LANGUAGE_DIRECTORIES: &[(Language, &[&str])] = &[
    (Language::Python, &["requirements"]),
    (Language::Go, &["cmd", "internal", "pkg"]),
    (
        Language::Java,
        &["src/main/java", "src/test/java", "src/main/resources"],
    ),
];

/// Which manifest generator a language selects. One entry per language;
/// unlisted languages get no manifest (skipped, not failed).
static MANIFEST_GENERATORS: &[(Language, GeneratorId)] = &[
    (Language::Python, GeneratorId::DependencyManifest),
    (Language::Javascript, GeneratorId::PackageManifest),
    (Language::Typescript, GeneratorId::PackageManifest),
    (Language::Go, GeneratorId::ModuleManifest),
    (Language::Rust, GeneratorId::CrateManifest),
    (Language::Java, GeneratorId::BuildManifest),
];

/// Languages with a container recipe. The container generator's precondition.
pub static CONTAINER_LANGUAGES: &[Language] = &[
    Language::Python,
    Language::Javascript,
    Language::Typescript,
    Language::Go,
    Language::Rust,
];

/// Test harnesses that get a dedicated config file.
static TEST_HARNESS_CONFIGS: &[Testing] = &[Testing::Pytest];

/// Look up the manifest generator for a language, if any.
pub fn manifest_generator(language: Language) -> Option<GeneratorId> {
    MANIFEST_GENERATORS
        .iter()
        .find(|(l, _)| *l == language)
        .map(|(_, g)| *g)
}

/// Whether a language has a container recipe.
pub fn container_supported(language: Language) -> bool {
    CONTAINER_LANGUAGES.contains(&language)
}

fn project_type_directories(project_type: ProjectType) -> &'static [&'static str] {
    PROJECT_TYPE_DIRECTORIES
        .iter()
        .find(|(t, _)| *t == project_type)
        .map(|(_, dirs)| *dirs)
        .unwrap_or(&[])
}

fn language_directories(language: Language) -> &'static [&'static str] {
    LANGUAGE_DIRECTORIES
        .iter()
        .find(|(l, _)| *l == language)
        .map(|(_, dirs)| *dirs)
        .unwrap_or(&[])
}

// ── Planner ──────────────────────────────────────────────────────────────────

/// Produce the ordered action sequence for a validated configuration.
///
/// Pure function of its input. Never fails: schema-valid values with no
/// mapping simply plan fewer actions.
pub fn plan(config: &ValidatedConfig) -> Vec<GenerationAction> {
    let mut actions = Vec::new();

    // Directories come first so emitters create parents before files.
    actions.push(GenerationAction::new(
        GeneratorId::ProjectTree,
        GeneratorParams {
            directories: planned_directories(config),
            ..GeneratorParams::default()
        },
    ));

    // Language manifest, framework-parameterized. Java's pom.xml only makes
    // sense under Maven; other build systems leave Java manifest-less.
    if let Some(generator) = manifest_generator(config.language()) {
        let maven_gated = generator == GeneratorId::BuildManifest
            && config.build_system() != crate::domain::fields::BuildSystem::Maven;
        if !maven_gated {
            let mut params = GeneratorParams::for_language(config.language());
            params.framework = match config.framework() {
                Framework::None => None,
                framework => Some(framework),
            };
            actions.push(GenerationAction::new(generator, params));
        }
    }

    // Ignore file and editor config are unconditional.
    actions.push(GenerationAction::new(
        GeneratorId::IgnoreFile,
        GeneratorParams::for_language(config.language()),
    ));
    actions.push(GenerationAction::new(
        GeneratorId::EditorConfig,
        GeneratorParams::default(),
    ));

    if TEST_HARNESS_CONFIGS.contains(&config.testing()) {
        actions.push(GenerationAction::new(
            GeneratorId::TestConfig,
            GeneratorParams {
                testing: Some(config.testing()),
                ..GeneratorParams::default()
            },
        ));
    }

    if config.ci_cd() == CiCd::GithubActions {
        let mut ci = GeneratorParams::for_language(config.language());
        ci.testing = Some(config.testing());
        actions.push(GenerationAction::new(GeneratorId::CiWorkflow, ci));

        actions.push(GenerationAction::new(
            GeneratorId::CdWorkflow,
            GeneratorParams {
                deployment: Some(config.deployment()),
                ..GeneratorParams::default()
            },
        ));
        actions.push(GenerationAction::new(
            GeneratorId::SecurityWorkflow,
            GeneratorParams::for_language(config.language()),
        ));
        actions.push(GenerationAction::new(
            GeneratorId::DependabotConfig,
            GeneratorParams::for_language(config.language()),
        ));
    }

    if config.deployment() == Deployment::Docker && container_supported(config.language()) {
        actions.push(GenerationAction::new(
            GeneratorId::ContainerManifest,
            GeneratorParams::for_language(config.language()),
        ));
    }

    actions
}

/// Base + project-type + language directories, first occurrence kept.
fn planned_directories(config: &ValidatedConfig) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    BASE_DIRECTORIES
        .iter()
        .chain(project_type_directories(config.project_type()))
        .chain(language_directories(config.language()))
        .filter(|d| seen.insert(**d))
        .map(|d| (*d).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::FieldId;
    use crate::domain::{config::RawConfig, validate::validate};

    fn config_from(pairs: &[(FieldId, &str)]) -> ValidatedConfig {
        let mut raw = RawConfig::new();
        for (field, value) in pairs {
            raw.insert_first(*field, *value);
        }
        validate(&raw).expect("test config must be valid")
    }

    fn go_api_docker() -> ValidatedConfig {
        config_from(&[
            (FieldId::ProjectType, "api"),
            (FieldId::Language, "go"),
            (FieldId::Framework, "gin"),
            (FieldId::BuildSystem, "make"),
            (FieldId::Database, "postgresql"),
            (FieldId::Deployment, "docker"),
            (FieldId::CiCd, "github-actions"),
            (FieldId::Testing, "go-test"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ])
    }

    fn generators(actions: &[GenerationAction]) -> Vec<GeneratorId> {
        actions.iter().map(|a| a.generator).collect()
    }

    #[test]
    fn planning_is_deterministic() {
        let config = go_api_docker();
        assert_eq!(plan(&config), plan(&config));
    }

    #[test]
    fn project_tree_is_always_first() {
        let actions = plan(&go_api_docker());
        assert_eq!(actions[0].generator, GeneratorId::ProjectTree);
    }

    #[test]
    fn go_api_docker_plans_module_and_container_manifests() {
        // End-to-end scenario: api + go + docker.
        let actions = plan(&go_api_docker());
        let ids = generators(&actions);
        assert!(ids.contains(&GeneratorId::ModuleManifest));
        assert!(ids.contains(&GeneratorId::ContainerManifest));

        let tree = &actions[0].params.directories;
        for dir in ["src", "tests", "api", "pkg", "cmd"] {
            assert!(tree.iter().any(|d| d == dir), "missing directory {dir}");
        }
    }

    #[test]
    fn deployment_none_plans_no_container_manifest() {
        let config = config_from(&[
            (FieldId::ProjectType, "api"),
            (FieldId::Language, "go"),
            (FieldId::Framework, "gin"),
            (FieldId::BuildSystem, "make"),
            (FieldId::Database, "postgresql"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "github-actions"),
            (FieldId::Testing, "go-test"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ]);
        let ids = generators(&plan(&config));
        assert!(!ids.contains(&GeneratorId::ContainerManifest));
        // Everything else still planned.
        assert!(ids.contains(&GeneratorId::ModuleManifest));
        assert!(ids.contains(&GeneratorId::IgnoreFile));
        assert!(ids.contains(&GeneratorId::EditorConfig));
    }

    #[test]
    fn unmapped_language_skips_manifest_without_failing() {
        let config = config_from(&[
            (FieldId::ProjectType, "library"),
            (FieldId::Language, "ruby"),
            (FieldId::Framework, "none"),
            (FieldId::BuildSystem, "make"),
            (FieldId::Database, "none"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "none"),
            (FieldId::Testing, "rspec"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ]);
        let ids = generators(&plan(&config));
        assert!(!ids.iter().any(|id| matches!(
            id,
            GeneratorId::DependencyManifest
                | GeneratorId::PackageManifest
                | GeneratorId::ModuleManifest
                | GeneratorId::CrateManifest
                | GeneratorId::BuildManifest
        )));
        assert!(ids.contains(&GeneratorId::IgnoreFile));
    }

    #[test]
    fn unmapped_project_type_contributes_no_extra_directories() {
        let config = config_from(&[
            (FieldId::ProjectType, "documentation"),
            (FieldId::Language, "python"),
            (FieldId::Framework, "none"),
            (FieldId::BuildSystem, "pip"),
            (FieldId::Database, "none"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "none"),
            (FieldId::Testing, "pytest"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ]);
        let dirs = &plan(&config)[0].params.directories;
        // base + python's "requirements", nothing from project type
        assert_eq!(dirs.len(), BASE_DIRECTORIES.len() + 1);
    }

    #[test]
    fn non_github_ci_plans_no_workflows() {
        let config = config_from(&[
            (FieldId::ProjectType, "api"),
            (FieldId::Language, "go"),
            (FieldId::Framework, "gin"),
            (FieldId::BuildSystem, "make"),
            (FieldId::Database, "none"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "jenkins"),
            (FieldId::Testing, "go-test"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ]);
        let ids = generators(&plan(&config));
        assert!(!ids.contains(&GeneratorId::CiWorkflow));
        assert!(!ids.contains(&GeneratorId::CdWorkflow));
        assert!(!ids.contains(&GeneratorId::SecurityWorkflow));
        assert!(!ids.contains(&GeneratorId::DependabotConfig));
    }

    #[test]
    fn java_manifest_requires_maven() {
        let base = [
            (FieldId::ProjectType, "api"),
            (FieldId::Language, "java"),
            (FieldId::Framework, "spring"),
            (FieldId::Database, "none"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "none"),
            (FieldId::Testing, "junit"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ];

        let mut with_maven = base.to_vec();
        with_maven.push((FieldId::BuildSystem, "maven"));
        let ids = generators(&plan(&config_from(&with_maven)));
        assert!(ids.contains(&GeneratorId::BuildManifest));

        let mut with_gradle = base.to_vec();
        with_gradle.push((FieldId::BuildSystem, "gradle"));
        let ids = generators(&plan(&config_from(&with_gradle)));
        assert!(!ids.contains(&GeneratorId::BuildManifest));
    }

    #[test]
    fn pytest_plans_test_config() {
        let config = config_from(&[
            (FieldId::ProjectType, "cli-tool"),
            (FieldId::Language, "python"),
            (FieldId::Framework, "none"),
            (FieldId::BuildSystem, "pip"),
            (FieldId::Database, "none"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "none"),
            (FieldId::Testing, "pytest"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ]);
        assert!(generators(&plan(&config)).contains(&GeneratorId::TestConfig));
    }

    #[test]
    fn explicit_none_framework_is_not_passed_to_generators() {
        let config = config_from(&[
            (FieldId::ProjectType, "cli-tool"),
            (FieldId::Language, "python"),
            (FieldId::Framework, "none"),
            (FieldId::BuildSystem, "pip"),
            (FieldId::Database, "none"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "none"),
            (FieldId::Testing, "pytest"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ]);
        let actions = plan(&config);
        let manifest = actions
            .iter()
            .find(|a| a.generator == GeneratorId::DependencyManifest)
            .unwrap();
        assert_eq!(manifest.params.framework, None);
    }

    #[test]
    fn shared_directories_are_deduplicated() {
        // go (cmd/internal/pkg) + cli-tool (cmd/internal) overlap.
        let config = config_from(&[
            (FieldId::ProjectType, "cli-tool"),
            (FieldId::Language, "go"),
            (FieldId::Framework, "none"),
            (FieldId::BuildSystem, "make"),
            (FieldId::Database, "none"),
            (FieldId::Deployment, "none"),
            (FieldId::CiCd, "none"),
            (FieldId::Testing, "go-test"),
            (FieldId::LicenseType, "mit"),
            (FieldId::Visibility, "public"),
        ]);
        let dirs = &plan(&config)[0].params.directories;
        let unique: std::collections::HashSet<&String> = dirs.iter().collect();
        assert_eq!(unique.len(), dirs.len());
    }
}
