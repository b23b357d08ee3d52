//! Ignore-file, editor-config, and test-harness config generators.

use groundwork_core::{
    application::ports::ArtifactGenerator,
    domain::{Artifact, GeneratorId, GeneratorParams, Language, Testing},
    error::GroundworkResult,
};
use tracing::debug;

use super::{require_language, unmapped};

// ── .gitignore ───────────────────────────────────────────────────────────────

/// Language-aware .gitignore with a language-agnostic fallback.
pub struct IgnoreFileGenerator;

impl ArtifactGenerator for IgnoreFileGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::IgnoreFile
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        let content = match language {
            Language::Python => GITIGNORE_PYTHON,
            Language::Javascript | Language::Typescript => GITIGNORE_NODE,
            Language::Go => GITIGNORE_GO,
            Language::Rust => GITIGNORE_RUST,
            other => {
                debug!(language = %other, "no dedicated ignore template, using generic");
                GITIGNORE_GENERIC
            }
        };
        Ok(vec![Artifact::file(".gitignore", content)])
    }
}

const GITIGNORE_PYTHON: &str = r"# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# PyInstaller
*.manifest
*.spec

# Installer logs
pip-log.txt
pip-delete-this-directory.txt

# Unit test / coverage reports
htmlcov/
.tox/
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
.hypothesis/
.pytest_cache/

# Environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db
";

const GITIGNORE_NODE: &str = r"# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage directory used by tools like istanbul
coverage/

# Build outputs
dist/
build/

# Environment variables
.env
.env.local
.env.development.local
.env.test.local
.env.production.local

# IDE
.vscode/
.idea/

# OS
.DS_Store
Thumbs.db
";

const GITIGNORE_GO: &str = r"# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with `go test -c`
*.test

# Output of the go coverage tool
*.out

# Dependency directories
vendor/

# Go workspace file
go.work

# IDE
.vscode/
.idea/

# OS
.DS_Store
Thumbs.db
";

const GITIGNORE_RUST: &str = r"# Generated by Cargo
/target/

# Remove Cargo.lock from gitignore if creating an executable
Cargo.lock

# These are backup files generated by rustfmt
**/*.rs.bk

# IDE
.vscode/
.idea/

# OS
.DS_Store
Thumbs.db
";

const GITIGNORE_GENERIC: &str = r"# Build outputs
build/
dist/
out/

# Environment variables
.env

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db
";

// ── .editorconfig ────────────────────────────────────────────────────────────

/// Static .editorconfig shared by every project.
pub struct EditorConfigGenerator;

impl ArtifactGenerator for EditorConfigGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::EditorConfig
    }

    fn generate(&self, _params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        Ok(vec![Artifact::file(".editorconfig", EDITORCONFIG)])
    }
}

const EDITORCONFIG: &str = r"root = true

[*]
charset = utf-8
end_of_line = lf
insert_final_newline = true
trim_trailing_whitespace = true
indent_style = space
indent_size = 2

[*.py]
indent_size = 4

[*.go]
indent_style = tab

[*.md]
trim_trailing_whitespace = false
";

// ── Test harness config ──────────────────────────────────────────────────────

/// Test-harness configuration. Currently only pytest has one.
pub struct TestConfigGenerator;

impl ArtifactGenerator for TestConfigGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::TestConfig
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        match params.testing {
            Some(Testing::Pytest) => Ok(vec![Artifact::file("pytest.ini", PYTEST_INI)]),
            Some(other) => Err(unmapped(
                self.id(),
                format!("no config template for '{other}'"),
            )),
            None => Err(unmapped(self.id(), "missing testing parameter")),
        }
    }
}

const PYTEST_INI: &str = r"[tool:pytest]
testpaths = tests
python_files = test_*.py
python_functions = test_*
python_classes = Test*
addopts = -v --tb=short --strict-markers
markers =
    slow: marks tests as slow
    integration: marks tests as integration tests
    unit: marks tests as unit tests
";
