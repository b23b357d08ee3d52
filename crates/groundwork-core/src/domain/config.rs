//! Raw and validated configuration types.
//!
//! [`RawConfig`] is the transient product of extraction: recognized keys
//! mapped to unchecked string values. [`ValidatedConfig`] is the typed result
//! of validation. The type system enforces the pipeline's core invariant: a
//! `ValidatedConfig` cannot be built from unvalidated input because its only
//! constructor is `pub(crate)` and called solely by the validator.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::domain::fields::{
    BuildSystem, CiCd, Database, Deployment, FieldId, Framework, Language, LicenseType,
    ProjectType, Testing, Visibility,
};

// ── RawConfig ────────────────────────────────────────────────────────────────

/// Extracted key/value pairs, prior to validation.
///
/// Duplicate keys follow a first-write-wins policy: the first occurrence in
/// the document is kept and later ones are dropped with a warning. This
/// mirrors how authors read a config block top-down, but it does mean a
/// forgotten stale line silently shadows a later edit; `groundwork check`
/// output always shows which value won.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    entries: BTreeMap<FieldId, String>,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unless the field is already present.
    ///
    /// Returns `false` when the insert was ignored as a duplicate.
    pub fn insert_first(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        let value = value.into();
        if let Some(kept) = self.entries.get(&field) {
            warn!(
                field = %field,
                kept = %kept,
                ignored = %value,
                "duplicate configuration key ignored (first occurrence wins)"
            );
            return false;
        }
        self.entries.insert(field, value);
        true
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in schema (field declaration) order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

// ── ValidatedConfig ──────────────────────────────────────────────────────────

/// A configuration that passed schema validation.
///
/// Every field is present and parsed into its value enum, so downstream
/// planning code never re-checks membership. Immutable after construction;
/// the only constructor is `pub(crate)` and lives behind the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedConfig {
    project_type: ProjectType,
    language: Language,
    framework: Framework,
    build_system: BuildSystem,
    database: Database,
    deployment: Deployment,
    ci_cd: CiCd,
    testing: Testing,
    license_type: LicenseType,
    visibility: Visibility,
}

impl ValidatedConfig {
    /// Construct from already-validated parts. Only the validator calls this.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        project_type: ProjectType,
        language: Language,
        framework: Framework,
        build_system: BuildSystem,
        database: Database,
        deployment: Deployment,
        ci_cd: CiCd,
        testing: Testing,
        license_type: LicenseType,
        visibility: Visibility,
    ) -> Self {
        Self {
            project_type,
            language,
            framework,
            build_system,
            database,
            deployment,
            ci_cd,
            testing,
            license_type,
            visibility,
        }
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn build_system(&self) -> BuildSystem {
        self.build_system
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn deployment(&self) -> Deployment {
        self.deployment
    }

    pub fn ci_cd(&self) -> CiCd {
        self.ci_cd
    }

    pub fn testing(&self) -> Testing {
        self.testing
    }

    pub fn license_type(&self) -> LicenseType {
        self.license_type
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// All ten entries as display strings, in schema order.
    pub fn entries(&self) -> Vec<(FieldId, &'static str)> {
        vec![
            (FieldId::ProjectType, self.project_type.as_str()),
            (FieldId::Language, self.language.as_str()),
            (FieldId::Framework, self.framework.as_str()),
            (FieldId::BuildSystem, self.build_system.as_str()),
            (FieldId::Database, self.database.as_str()),
            (FieldId::Deployment, self.deployment.as_str()),
            (FieldId::CiCd, self.ci_cd.as_str()),
            (FieldId::Testing, self.testing.as_str()),
            (FieldId::LicenseType, self.license_type.as_str()),
            (FieldId::Visibility, self.visibility.as_str()),
        ]
    }
}
