//! GitHub Actions workflow and dependency-bot generators.
//!
//! Planned only when CI_CD is github-actions. Workflow bodies are literal
//! YAML keyed on the language/deployment parameter, with generic fallbacks
//! for ecosystems without a dedicated pipeline.

use groundwork_core::{
    application::ports::ArtifactGenerator,
    domain::{Artifact, Deployment, GeneratorId, GeneratorParams, Language},
    error::GroundworkResult,
};
use tracing::debug;

use super::{require_language, unmapped};

// ── CI ───────────────────────────────────────────────────────────────────────

/// Continuous-integration workflow, language-parameterized.
pub struct CiWorkflowGenerator;

impl ArtifactGenerator for CiWorkflowGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::CiWorkflow
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        let content = match language {
            Language::Python => CI_PYTHON,
            Language::Javascript | Language::Typescript => CI_NODE,
            other => {
                debug!(language = %other, "no dedicated CI pipeline, using generic");
                CI_GENERIC
            }
        };
        Ok(vec![Artifact::file(".github/workflows/ci.yml", content)])
    }
}

const CI_PYTHON: &str = r#"name: CI

on:
  push:
    branches: [main, develop]
  pull_request:
    branches: [main]

jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        python-version: ['3.8', '3.9', '3.10', '3.11']
    steps:
      - uses: actions/checkout@v4
      - name: Set up Python
        uses: actions/setup-python@v4
        with:
          python-version: ${{ matrix.python-version }}
      - name: Install dependencies
        run: pip install -r requirements.txt
      - name: Lint with flake8
        run: |
          pip install flake8
          flake8 . --count --select=E9,F63,F7,F82 --show-source --statistics
          flake8 . --count --exit-zero --max-complexity=10 --max-line-length=127 --statistics
      - name: Test with pytest
        run: |
          pip install pytest pytest-cov
          pytest --cov=./ --cov-report=xml
      - name: Upload coverage reports
        uses: codecov/codecov-action@v3
        with:
          file: ./coverage.xml
          flags: unittests
          name: codecov-umbrella
          fail_ci_if_error: true
"#;

const CI_NODE: &str = r#"name: CI

on:
  push:
    branches: [main, develop]
  pull_request:
    branches: [main]

jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        node-version: ['16', '18', '20']
    steps:
      - uses: actions/checkout@v4
      - name: Use Node.js
        uses: actions/setup-node@v3
        with:
          node-version: ${{ matrix.node-version }}
          cache: npm
      - name: Install dependencies
        run: npm ci
      - name: Run linter
        run: npm run lint
      - name: Run tests
        run: npm test
      - name: Build project
        run: npm run build
"#;

const CI_GENERIC: &str = r#"name: CI

on:
  push:
    branches: [main, develop]
  pull_request:
    branches: [main]

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Run tests
        run: echo "Add your test commands here"
"#;

// ── CD ───────────────────────────────────────────────────────────────────────

/// Continuous-deployment workflow, deployment-parameterized.
pub struct CdWorkflowGenerator;

impl ArtifactGenerator for CdWorkflowGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::CdWorkflow
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let deployment = params
            .deployment
            .ok_or_else(|| unmapped(self.id(), "missing deployment parameter"))?;

        let deploy_steps = match deployment {
            Deployment::Docker => CD_STEPS_DOCKER,
            Deployment::Vercel => CD_STEPS_VERCEL,
            _ => CD_STEPS_GENERIC,
        };

        let content = format!("{CD_HEADER}{deploy_steps}");
        Ok(vec![Artifact::file(".github/workflows/cd.yml", content)])
    }
}

const CD_HEADER: &str = r#"name: CD

on:
  push:
    branches: [main]
  release:
    types: [published]

jobs:
  deploy:
    runs-on: ubuntu-latest
    needs: test
    steps:
      - uses: actions/checkout@v4
"#;

const CD_STEPS_DOCKER: &str = r#"      - name: Set up Docker Buildx
        uses: docker/setup-buildx-action@v3
      - name: Login to DockerHub
        uses: docker/login-action@v3
        with:
          username: ${{ secrets.DOCKERHUB_USERNAME }}
          password: ${{ secrets.DOCKERHUB_TOKEN }}
      - name: Build and push
        uses: docker/build-push-action@v5
        with:
          context: .
          push: true
          tags: user/app:latest
"#;

const CD_STEPS_VERCEL: &str = r#"      - name: Deploy to Vercel
        uses: amondnet/vercel-action@v25
        with:
          vercel-token: ${{ secrets.VERCEL_TOKEN }}
          vercel-org-id: ${{ secrets.ORG_ID }}
          vercel-project-id: ${{ secrets.PROJECT_ID }}
          vercel-args: '--prod'
"#;

const CD_STEPS_GENERIC: &str = r#"      - name: Deploy
        run: echo "Add your deployment commands here"
"#;

// ── Security ─────────────────────────────────────────────────────────────────

/// CodeQL security scanning workflow.
pub struct SecurityWorkflowGenerator;

impl ArtifactGenerator for SecurityWorkflowGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::SecurityWorkflow
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        let content = format!(
            r#"name: Security

on:
  push:
    branches: [main]
  pull_request:
    branches: [main]
  schedule:
    - cron: '0 6 * * 1'

jobs:
  analyze:
    name: Analyze
    runs-on: ubuntu-latest
    permissions:
      actions: read
      contents: read
      security-events: write
    strategy:
      fail-fast: false
      matrix:
        language: [{language}]
    steps:
      - name: Checkout repository
        uses: actions/checkout@v4
      - name: Initialize CodeQL
        uses: github/codeql-action/init@v2
        with:
          languages: ${{{{ matrix.language }}}}
      - name: Autobuild
        uses: github/codeql-action/autobuild@v2
      - name: Perform CodeQL Analysis
        uses: github/codeql-action/analyze@v2
"#
        );
        Ok(vec![Artifact::file(
            ".github/workflows/security.yml",
            content,
        )])
    }
}

// ── Dependabot ───────────────────────────────────────────────────────────────

/// Dependabot configuration keyed on the package ecosystem.
pub struct DependabotGenerator;

impl ArtifactGenerator for DependabotGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::DependabotConfig
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;

        let package_entry = package_ecosystem(language)
            .map(|eco| {
                format!(
                    r#"  - package-ecosystem: {eco}
    directory: /
    schedule:
      interval: weekly
      day: monday
    open-pull-requests-limit: 10
"#
                )
            })
            .unwrap_or_default();

        let content = format!(
            r#"version: 2
updates:
{package_entry}  - package-ecosystem: github-actions
    directory: /
    schedule:
      interval: weekly
"#
        );
        Ok(vec![Artifact::file(".github/dependabot.yml", content)])
    }
}

/// Dependabot ecosystem name for a language, if one exists.
fn package_ecosystem(language: Language) -> Option<&'static str> {
    match language {
        Language::Python => Some("pip"),
        Language::Javascript | Language::Typescript => Some("npm"),
        Language::Go => Some("gomod"),
        Language::Rust => Some("cargo"),
        Language::Java => Some("maven"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language_params(language: Language) -> GeneratorParams {
        GeneratorParams {
            language: Some(language),
            ..GeneratorParams::default()
        }
    }

    fn content_of(artifacts: &[Artifact]) -> &str {
        match &artifacts[0] {
            Artifact::File { content, .. } => content,
            Artifact::Directory { .. } => panic!("expected a file"),
        }
    }

    #[test]
    fn python_ci_runs_pytest_matrix() {
        let artifacts = CiWorkflowGenerator
            .generate(&language_params(Language::Python))
            .unwrap();
        assert_eq!(
            artifacts[0].path().to_str(),
            Some(".github/workflows/ci.yml")
        );
        let content = content_of(&artifacts);
        assert!(content.contains("python-version: ['3.8', '3.9', '3.10', '3.11']"));
        assert!(content.contains("pytest --cov"));
    }

    #[test]
    fn go_ci_falls_back_to_generic() {
        let artifacts = CiWorkflowGenerator
            .generate(&language_params(Language::Go))
            .unwrap();
        let content = content_of(&artifacts);
        assert!(content.contains("Add your test commands here"));
    }

    #[test]
    fn docker_cd_pushes_an_image() {
        let params = GeneratorParams {
            deployment: Some(Deployment::Docker),
            ..GeneratorParams::default()
        };
        let content_owner = CdWorkflowGenerator.generate(&params).unwrap();
        let content = content_of(&content_owner);
        assert!(content.contains("docker/build-push-action@v5"));
        assert!(content.contains("needs: test"));
    }

    #[test]
    fn non_container_cd_gets_a_placeholder_step() {
        let params = GeneratorParams {
            deployment: Some(Deployment::Heroku),
            ..GeneratorParams::default()
        };
        let artifacts = CdWorkflowGenerator.generate(&params).unwrap();
        assert!(content_of(&artifacts).contains("Add your deployment commands here"));
    }

    #[test]
    fn security_workflow_scans_the_declared_language() {
        let artifacts = SecurityWorkflowGenerator
            .generate(&language_params(Language::Python))
            .unwrap();
        let content = content_of(&artifacts);
        assert!(content.contains("language: [python]"));
        assert!(content.contains("${{ matrix.language }}"));
    }

    #[test]
    fn dependabot_maps_go_to_gomod() {
        let artifacts = DependabotGenerator
            .generate(&language_params(Language::Go))
            .unwrap();
        let content = content_of(&artifacts);
        assert!(content.contains("package-ecosystem: gomod"));
        assert!(content.contains("package-ecosystem: github-actions"));
    }

    #[test]
    fn dependabot_without_ecosystem_still_updates_actions() {
        let artifacts = DependabotGenerator
            .generate(&language_params(Language::Swift))
            .unwrap();
        let content = content_of(&artifacts);
        assert!(!content.contains("open-pull-requests-limit"));
        assert!(content.contains("package-ecosystem: github-actions"));
    }
}
