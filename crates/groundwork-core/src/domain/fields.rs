//! Configuration fields and their value types.
//!
//! # Design
//!
//! [`FieldId`] names the ten recognized configuration keys. Its declaration
//! order IS the schema order: validators and reports iterate fields in this
//! order, so violation listings are deterministic.
//!
//! Each field with an enumerated value set gets its own value enum. These are
//! pure `Copy` value types holding only their string representations and
//! parsers. Which generator a value maps to lives in `plan.rs`; this file's
//! only job is the types.
//!
//! # Adding a New Value
//!
//! 1. Add the enum variant here (plus `ALL`, `as_str`, `FromStr` arms)
//! 2. Add the string to the matching allowed list in `schema.rs`
//! 3. The `schema_matches_value_enums` test fails until both agree

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FieldId ──────────────────────────────────────────────────────────────────

/// A recognized configuration key.
///
/// Declaration order defines the schema order used for deterministic
/// violation reporting. Derives `Ord` so callers can sort by it directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldId {
    ProjectType,
    Language,
    Framework,
    BuildSystem,
    Database,
    Deployment,
    CiCd,
    Testing,
    LicenseType,
    Visibility,
}

impl FieldId {
    /// All fields, in schema order.
    pub const ALL: &'static [Self] = &[
        Self::ProjectType,
        Self::Language,
        Self::Framework,
        Self::BuildSystem,
        Self::Database,
        Self::Deployment,
        Self::CiCd,
        Self::Testing,
        Self::LicenseType,
        Self::Visibility,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectType => "PROJECT_TYPE",
            Self::Language => "LANGUAGE",
            Self::Framework => "FRAMEWORK",
            Self::BuildSystem => "BUILD_SYSTEM",
            Self::Database => "DATABASE",
            Self::Deployment => "DEPLOYMENT",
            Self::CiCd => "CI_CD",
            Self::Testing => "TESTING",
            Self::LicenseType => "LICENSE_TYPE",
            Self::Visibility => "VISIBILITY",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = DomainError;

    /// Keys are matched exactly (case-sensitive). The extractor uses a failed
    /// parse to skip unrecognized keys, so this is not a user-facing error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_owned()))
    }
}

// ── ProjectType ──────────────────────────────────────────────────────────────

/// The kind of project being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    WebApp,
    CliTool,
    Library,
    Api,
    MobileApp,
    DesktopApp,
    DataScience,
    Documentation,
}

impl ProjectType {
    pub const ALL: &'static [Self] = &[
        Self::WebApp,
        Self::CliTool,
        Self::Library,
        Self::Api,
        Self::MobileApp,
        Self::DesktopApp,
        Self::DataScience,
        Self::Documentation,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WebApp => "web-app",
            Self::CliTool => "cli-tool",
            Self::Library => "library",
            Self::Api => "api",
            Self::MobileApp => "mobile-app",
            Self::DesktopApp => "desktop-app",
            Self::DataScience => "data-science",
            Self::Documentation => "documentation",
        }
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

/// A declarable implementation language.
///
/// Not every language maps to a manifest generator; unmapped languages are
/// valid configuration and simply plan fewer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Typescript,
    Go,
    Rust,
    Java,
    Cpp,
    C,
    Php,
    Ruby,
    Swift,
    Kotlin,
    Scala,
    R,
}

impl Language {
    pub const ALL: &'static [Self] = &[
        Self::Python,
        Self::Javascript,
        Self::Typescript,
        Self::Go,
        Self::Rust,
        Self::Java,
        Self::Cpp,
        Self::C,
        Self::Php,
        Self::Ruby,
        Self::Swift,
        Self::Kotlin,
        Self::Scala,
        Self::R,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Scala => "scala",
            Self::R => "r",
        }
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

/// A declarable framework. `None` is a legal, explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Express,
    FastApi,
    Django,
    Spring,
    Gin,
    Actix,
    Electron,
    Flutter,
    Pytorch,
    Tensorflow,
    None,
}

impl Framework {
    pub const ALL: &'static [Self] = &[
        Self::React,
        Self::Vue,
        Self::Angular,
        Self::Express,
        Self::FastApi,
        Self::Django,
        Self::Spring,
        Self::Gin,
        Self::Actix,
        Self::Electron,
        Self::Flutter,
        Self::Pytorch,
        Self::Tensorflow,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Express => "express",
            Self::FastApi => "fastapi",
            Self::Django => "django",
            Self::Spring => "spring",
            Self::Gin => "gin",
            Self::Actix => "actix",
            Self::Electron => "electron",
            Self::Flutter => "flutter",
            Self::Pytorch => "pytorch",
            Self::Tensorflow => "tensorflow",
            Self::None => "none",
        }
    }
}

// ── BuildSystem ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    Npm,
    Yarn,
    Pip,
    Cargo,
    Maven,
    Gradle,
    Make,
    Cmake,
    None,
}

impl BuildSystem {
    pub const ALL: &'static [Self] = &[
        Self::Npm,
        Self::Yarn,
        Self::Pip,
        Self::Cargo,
        Self::Maven,
        Self::Gradle,
        Self::Make,
        Self::Cmake,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pip => "pip",
            Self::Cargo => "cargo",
            Self::Maven => "maven",
            Self::Gradle => "gradle",
            Self::Make => "make",
            Self::Cmake => "cmake",
            Self::None => "none",
        }
    }
}

// ── Database ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgresql,
    Mysql,
    Mongodb,
    Redis,
    Sqlite,
    None,
}

impl Database {
    pub const ALL: &'static [Self] = &[
        Self::Postgresql,
        Self::Mysql,
        Self::Mongodb,
        Self::Redis,
        Self::Sqlite,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
            Self::Redis => "redis",
            Self::Sqlite => "sqlite",
            Self::None => "none",
        }
    }
}

// ── Deployment ───────────────────────────────────────────────────────────────

/// Deployment target. Only containerized targets trigger extra artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    Docker,
    Kubernetes,
    Aws,
    Gcp,
    Azure,
    Vercel,
    Netlify,
    Heroku,
    None,
}

impl Deployment {
    pub const ALL: &'static [Self] = &[
        Self::Docker,
        Self::Kubernetes,
        Self::Aws,
        Self::Gcp,
        Self::Azure,
        Self::Vercel,
        Self::Netlify,
        Self::Heroku,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Kubernetes => "kubernetes",
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
            Self::Vercel => "vercel",
            Self::Netlify => "netlify",
            Self::Heroku => "heroku",
            Self::None => "none",
        }
    }
}

// ── CiCd ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CiCd {
    GithubActions,
    Jenkins,
    GitlabCi,
    Circleci,
    TravisCi,
    None,
}

impl CiCd {
    pub const ALL: &'static [Self] = &[
        Self::GithubActions,
        Self::Jenkins,
        Self::GitlabCi,
        Self::Circleci,
        Self::TravisCi,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GithubActions => "github-actions",
            Self::Jenkins => "jenkins",
            Self::GitlabCi => "gitlab-ci",
            Self::Circleci => "circleci",
            Self::TravisCi => "travis-ci",
            Self::None => "none",
        }
    }
}

// ── Testing ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Testing {
    Jest,
    Pytest,
    CargoTest,
    Junit,
    GoTest,
    Rspec,
    None,
}

impl Testing {
    pub const ALL: &'static [Self] = &[
        Self::Jest,
        Self::Pytest,
        Self::CargoTest,
        Self::Junit,
        Self::GoTest,
        Self::Rspec,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jest => "jest",
            Self::Pytest => "pytest",
            Self::CargoTest => "cargo-test",
            Self::Junit => "junit",
            Self::GoTest => "go-test",
            Self::Rspec => "rspec",
            Self::None => "none",
        }
    }
}

// ── LicenseType ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseType {
    Mit,
    #[serde(rename = "apache-2.0")]
    Apache2,
    GplV3,
    #[serde(rename = "bsd-3-clause")]
    Bsd3Clause,
    Unlicense,
    Proprietary,
}

impl LicenseType {
    pub const ALL: &'static [Self] = &[
        Self::Mit,
        Self::Apache2,
        Self::GplV3,
        Self::Bsd3Clause,
        Self::Unlicense,
        Self::Proprietary,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "mit",
            Self::Apache2 => "apache-2.0",
            Self::GplV3 => "gpl-v3",
            Self::Bsd3Clause => "bsd-3-clause",
            Self::Unlicense => "unlicense",
            Self::Proprietary => "proprietary",
        }
    }
}

// ── Visibility ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub const ALL: &'static [Self] = &[Self::Public, Self::Private];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

// ── Shared impls ─────────────────────────────────────────────────────────────

/// Implement `Display` + exact-match `FromStr` for a value enum, keyed by the
/// [`FieldId`] it belongs to.
macro_rules! value_enum_strings {
    ($ty:ident, $field:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            /// Values are matched exactly against the allowed set, with no
            /// aliases and no case folding. Membership defines validity.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| DomainError::UnknownValue {
                        field: $field,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

value_enum_strings!(ProjectType, FieldId::ProjectType);
value_enum_strings!(Language, FieldId::Language);
value_enum_strings!(Framework, FieldId::Framework);
value_enum_strings!(BuildSystem, FieldId::BuildSystem);
value_enum_strings!(Database, FieldId::Database);
value_enum_strings!(Deployment, FieldId::Deployment);
value_enum_strings!(CiCd, FieldId::CiCd);
value_enum_strings!(Testing, FieldId::Testing);
value_enum_strings!(LicenseType, FieldId::LicenseType);
value_enum_strings!(Visibility, FieldId::Visibility);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_order_is_schema_order() {
        assert!(FieldId::ProjectType < FieldId::Language);
        assert!(FieldId::Language < FieldId::Visibility);
        assert_eq!(FieldId::ALL.len(), 10);
    }

    #[test]
    fn field_id_parses_exact_names_only() {
        assert_eq!("LANGUAGE".parse::<FieldId>().unwrap(), FieldId::Language);
        assert_eq!("CI_CD".parse::<FieldId>().unwrap(), FieldId::CiCd);
        assert!("language".parse::<FieldId>().is_err());
        assert!("LANG".parse::<FieldId>().is_err());
    }

    #[test]
    fn value_parse_is_exact_match() {
        assert_eq!("go".parse::<Language>().unwrap(), Language::Go);
        assert!("golang".parse::<Language>().is_err());
        assert!("Go".parse::<Language>().is_err());
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn every_value_round_trips_through_from_str() {
        for v in ProjectType::ALL {
            assert_eq!(v.as_str().parse::<ProjectType>().unwrap(), *v);
        }
        for v in Language::ALL {
            assert_eq!(v.as_str().parse::<Language>().unwrap(), *v);
        }
        for v in Framework::ALL {
            assert_eq!(v.as_str().parse::<Framework>().unwrap(), *v);
        }
        for v in BuildSystem::ALL {
            assert_eq!(v.as_str().parse::<BuildSystem>().unwrap(), *v);
        }
        for v in Database::ALL {
            assert_eq!(v.as_str().parse::<Database>().unwrap(), *v);
        }
        for v in Deployment::ALL {
            assert_eq!(v.as_str().parse::<Deployment>().unwrap(), *v);
        }
        for v in CiCd::ALL {
            assert_eq!(v.as_str().parse::<CiCd>().unwrap(), *v);
        }
        for v in Testing::ALL {
            assert_eq!(v.as_str().parse::<Testing>().unwrap(), *v);
        }
        for v in LicenseType::ALL {
            assert_eq!(v.as_str().parse::<LicenseType>().unwrap(), *v);
        }
        for v in Visibility::ALL {
            assert_eq!(v.as_str().parse::<Visibility>().unwrap(), *v);
        }
    }

    #[test]
    fn hyphenated_values_parse() {
        assert_eq!(
            "github-actions".parse::<CiCd>().unwrap(),
            CiCd::GithubActions
        );
        assert_eq!(
            "apache-2.0".parse::<LicenseType>().unwrap(),
            LicenseType::Apache2
        );
        assert_eq!(
            "bsd-3-clause".parse::<LicenseType>().unwrap(),
            LicenseType::Bsd3Clause
        );
        assert_eq!("cargo-test".parse::<Testing>().unwrap(), Testing::CargoTest);
    }

    #[test]
    fn none_is_a_legal_framework() {
        assert_eq!("none".parse::<Framework>().unwrap(), Framework::None);
    }
}
