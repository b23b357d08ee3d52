//! Language manifest generators.
//!
//! One generator per ecosystem manifest family. Each requires its own
//! language parameter and treats anything else as a planner fault. The
//! FRAMEWORK parameter injects extra dependency entries into the manifest
//! rather than producing separate artifacts.

use groundwork_core::{
    application::ports::ArtifactGenerator,
    domain::{Artifact, Framework, GeneratorId, GeneratorParams, Language},
    error::GroundworkResult,
};
use serde_json::json;

use super::{require_language, unmapped};

// ── Python ───────────────────────────────────────────────────────────────────

/// Python dependency manifest: requirements.txt, setup.py, pyproject.toml.
pub struct DependencyManifestGenerator;

impl ArtifactGenerator for DependencyManifestGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::DependencyManifest
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        if language != Language::Python {
            return Err(unmapped(
                self.id(),
                format!("expected python, got {language}"),
            ));
        }

        Ok(vec![
            Artifact::file("requirements.txt", requirements_txt(params.framework)),
            Artifact::file("setup.py", SETUP_PY),
            Artifact::file("pyproject.toml", PYPROJECT_TOML),
        ])
    }
}

fn requirements_txt(framework: Option<Framework>) -> String {
    let mut lines = vec![
        "# Production dependencies".to_owned(),
        "requests>=2.28.0".to_owned(),
        "click>=8.0.0".to_owned(),
        String::new(),
        "# Development dependencies".to_owned(),
        "pytest>=7.0.0".to_owned(),
        "black>=22.0.0".to_owned(),
        "flake8>=5.0.0".to_owned(),
        "mypy>=0.991".to_owned(),
    ];

    match framework {
        Some(Framework::FastApi) => {
            lines.insert(1, "fastapi>=0.100.0".to_owned());
            lines.insert(2, "uvicorn[standard]>=0.20.0".to_owned());
        }
        Some(Framework::Django) => {
            lines.insert(1, "django>=4.2.0".to_owned());
        }
        _ => {}
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

const SETUP_PY: &str = r#"from setuptools import setup, find_packages

setup(
    name="your-project",
    version="0.1.0",
    packages=find_packages(),
    install_requires=[
        "requests>=2.28.0",
    ],
    python_requires=">=3.8",
    author="Your Name",
    author_email="your.email@example.com",
    description="A brief description of your project",
    long_description=open("README.md").read(),
    long_description_content_type="text/markdown",
    url="https://github.com/yourusername/your-project",
    classifiers=[
        "Programming Language :: Python :: 3",
        "License :: OSI Approved :: MIT License",
        "Operating System :: OS Independent",
    ],
)
"#;

const PYPROJECT_TOML: &str = r#"[build-system]
requires = ["setuptools>=61.0", "wheel"]
build-backend = "setuptools.build_meta"

[project]
name = "your-project"
version = "0.1.0"
description = "A brief description of your project"
readme = "README.md"
requires-python = ">=3.8"
dependencies = [
    "requests>=2.28.0",
]

[tool.black]
line-length = 88
target-version = ['py38']

[tool.mypy]
python_version = "3.8"
warn_return_any = true
warn_unused_configs = true
"#;

// ── JavaScript / TypeScript ──────────────────────────────────────────────────

/// Node package manifest: package.json, TypeScript-aware.
pub struct PackageManifestGenerator;

impl ArtifactGenerator for PackageManifestGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::PackageManifest
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        if !matches!(language, Language::Javascript | Language::Typescript) {
            return Err(unmapped(
                self.id(),
                format!("expected javascript or typescript, got {language}"),
            ));
        }

        let mut package = json!({
            "name": "your-project",
            "version": "1.0.0",
            "description": "A brief description of your project",
            "main": "src/index.js",
            "scripts": {
                "start": "node src/index.js",
                "dev": "nodemon src/index.js",
                "test": "jest",
                "build": "webpack --mode=production",
                "lint": "eslint src/"
            },
            "dependencies": {},
            "devDependencies": {
                "jest": "^29.0.0",
                "eslint": "^8.0.0",
                "nodemon": "^3.0.0"
            }
        });

        if language == Language::Typescript {
            package["main"] = json!("dist/index.js");
            package["scripts"]["build"] = json!("tsc");
            package["scripts"]["dev"] = json!("ts-node src/index.ts");
            package["devDependencies"]["typescript"] = json!("^5.0.0");
            package["devDependencies"]["ts-node"] = json!("^10.0.0");
            package["devDependencies"]["@types/node"] = json!("^20.0.0");
        }

        match params.framework {
            Some(Framework::React) => {
                package["dependencies"]["react"] = json!("^18.0.0");
                package["dependencies"]["react-dom"] = json!("^18.0.0");
            }
            Some(Framework::Express) => {
                package["dependencies"]["express"] = json!("^4.18.0");
            }
            Some(Framework::Vue) => {
                package["dependencies"]["vue"] = json!("^3.4.0");
            }
            _ => {}
        }

        let mut content = serde_json::to_string_pretty(&package)
            .map_err(|e| unmapped(self.id(), format!("package.json render failed: {e}")))?;
        content.push('\n');

        Ok(vec![Artifact::file("package.json", content)])
    }
}

// ── Go ───────────────────────────────────────────────────────────────────────

/// Go module manifest: go.mod.
pub struct ModuleManifestGenerator;

impl ArtifactGenerator for ModuleManifestGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::ModuleManifest
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        if language != Language::Go {
            return Err(unmapped(self.id(), format!("expected go, got {language}")));
        }

        let mut requires = vec![
            "\tgithub.com/gorilla/mux v1.8.0",
            "\tgithub.com/spf13/cobra v1.7.0",
        ];
        if params.framework == Some(Framework::Gin) {
            requires.insert(0, "\tgithub.com/gin-gonic/gin v1.9.1");
        }

        let content = format!(
            "module your-project\n\ngo 1.21\n\nrequire (\n{}\n)\n",
            requires.join("\n")
        );

        Ok(vec![Artifact::file("go.mod", content)])
    }
}

// ── Rust ─────────────────────────────────────────────────────────────────────

/// Rust crate manifest: Cargo.toml.
pub struct CrateManifestGenerator;

impl ArtifactGenerator for CrateManifestGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::CrateManifest
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        if language != Language::Rust {
            return Err(unmapped(
                self.id(),
                format!("expected rust, got {language}"),
            ));
        }

        let mut dependencies = vec![
            r#"clap = { version = "4.0", features = ["derive"] }"#,
            r#"tokio = { version = "1", features = ["full"] }"#,
            r#"serde = { version = "1.0", features = ["derive"] }"#,
            r#"serde_json = "1.0""#,
        ];
        if params.framework == Some(Framework::Actix) {
            dependencies.push(r#"actix-web = "4""#);
        }

        let content = format!(
            "[package]\nname = \"your-project\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\n{}\n\n[dev-dependencies]\ncriterion = \"0.5\"\n",
            dependencies.join("\n")
        );

        Ok(vec![Artifact::file("Cargo.toml", content)])
    }
}

// ── Java ─────────────────────────────────────────────────────────────────────

/// Java build manifest: pom.xml. Planned only under Maven.
pub struct BuildManifestGenerator;

impl ArtifactGenerator for BuildManifestGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::BuildManifest
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        if language != Language::Java {
            return Err(unmapped(
                self.id(),
                format!("expected java, got {language}"),
            ));
        }

        let spring_dependency = if params.framework == Some(Framework::Spring) {
            "\n        <dependency>\n            <groupId>org.springframework.boot</groupId>\n            <artifactId>spring-boot-starter-web</artifactId>\n            <version>3.2.0</version>\n        </dependency>"
        } else {
            ""
        };

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
         http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <groupId>com.example</groupId>
    <artifactId>your-project</artifactId>
    <version>1.0.0</version>
    <packaging>jar</packaging>

    <properties>
        <maven.compiler.source>17</maven.compiler.source>
        <maven.compiler.target>17</maven.compiler.target>
        <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
    </properties>

    <dependencies>
        <dependency>
            <groupId>junit</groupId>
            <artifactId>junit</artifactId>
            <version>4.13.2</version>
            <scope>test</scope>
        </dependency>{spring_dependency}
    </dependencies>
</project>
"#
        );

        Ok(vec![Artifact::file("pom.xml", content)])
    }
}
