//! The configuration schema registry.
//!
//! # Design Rationale
//!
//! One static table describes every recognized field exactly once: its
//! required status and its allowed-value set. All validation and reporting
//! derive from this table, so violation messages, the `init` starter block,
//! and the validator can never disagree about what is legal.
//!
//! The string tables here duplicate the value enums in `fields.rs` on
//! purpose: the registry stays pure data (usable in error messages without
//! allocation), while the enums give the rest of the crate type safety. The
//! `schema_matches_value_enums` test keeps the two in lockstep.

use crate::domain::fields::FieldId;

// ── Allowed-value tables ─────────────────────────────────────────────────────

const PROJECT_TYPE_VALUES: &[&str] = &[
    "web-app",
    "cli-tool",
    "library",
    "api",
    "mobile-app",
    "desktop-app",
    "data-science",
    "documentation",
];

const LANGUAGE_VALUES: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "go",
    "rust",
    "java",
    "cpp",
    "c",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "scala",
    "r",
];

const FRAMEWORK_VALUES: &[&str] = &[
    "react",
    "vue",
    "angular",
    "express",
    "fastapi",
    "django",
    "spring",
    "gin",
    "actix",
    "electron",
    "flutter",
    "pytorch",
    "tensorflow",
    "none",
];

const BUILD_SYSTEM_VALUES: &[&str] = &[
    "npm", "yarn", "pip", "cargo", "maven", "gradle", "make", "cmake", "none",
];

const DATABASE_VALUES: &[&str] = &[
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "sqlite",
    "none",
];

const DEPLOYMENT_VALUES: &[&str] = &[
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "vercel",
    "netlify",
    "heroku",
    "none",
];

const CI_CD_VALUES: &[&str] = &[
    "github-actions",
    "jenkins",
    "gitlab-ci",
    "circleci",
    "travis-ci",
    "none",
];

const TESTING_VALUES: &[&str] = &[
    "jest",
    "pytest",
    "cargo-test",
    "junit",
    "go-test",
    "rspec",
    "none",
];

const LICENSE_TYPE_VALUES: &[&str] = &[
    "mit",
    "apache-2.0",
    "gpl-v3",
    "bsd-3-clause",
    "unlicense",
    "proprietary",
];

const VISIBILITY_VALUES: &[&str] = &["public", "private"];

// ── Registry ─────────────────────────────────────────────────────────────────

/// One recognized configuration key: required status plus allowed values.
///
/// An empty `allowed` slice would mean free-form; every current field is
/// enumerated, but the representation keeps that door open.
#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub field: FieldId,
    pub required: bool,
    pub allowed: &'static [&'static str],
}

/// Single source of truth for the schema, in [`FieldId`] declaration order.
///
/// Initialized once at process start, never mutated. Validation iterates this
/// slice top to bottom, which is what makes violation ordering deterministic.
pub static SCHEMA: &[SchemaField] = &[
    SchemaField {
        field: FieldId::ProjectType,
        required: true,
        allowed: PROJECT_TYPE_VALUES,
    },
    SchemaField {
        field: FieldId::Language,
        required: true,
        allowed: LANGUAGE_VALUES,
    },
    SchemaField {
        field: FieldId::Framework,
        required: true,
        allowed: FRAMEWORK_VALUES,
    },
    SchemaField {
        field: FieldId::BuildSystem,
        required: true,
        allowed: BUILD_SYSTEM_VALUES,
    },
    SchemaField {
        field: FieldId::Database,
        required: true,
        allowed: DATABASE_VALUES,
    },
    SchemaField {
        field: FieldId::Deployment,
        required: true,
        allowed: DEPLOYMENT_VALUES,
    },
    SchemaField {
        field: FieldId::CiCd,
        required: true,
        allowed: CI_CD_VALUES,
    },
    SchemaField {
        field: FieldId::Testing,
        required: true,
        allowed: TESTING_VALUES,
    },
    SchemaField {
        field: FieldId::LicenseType,
        required: true,
        allowed: LICENSE_TYPE_VALUES,
    },
    SchemaField {
        field: FieldId::Visibility,
        required: true,
        allowed: VISIBILITY_VALUES,
    },
];

// ── Lookup API ───────────────────────────────────────────────────────────────

/// Find the schema entry for a field.
///
/// Returns `None` only if the field is not registered — a programming error,
/// not a user error. The `every_field_is_registered` test catches it.
pub fn find_field(field: FieldId) -> Option<&'static SchemaField> {
    SCHEMA.iter().find(|f| f.field == field)
}

/// The declared allowed-value set for a field (empty = unconstrained).
pub fn allowed_values(field: FieldId) -> &'static [&'static str] {
    find_field(field).map(|f| f.allowed).unwrap_or(&[])
}
