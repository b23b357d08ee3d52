//! Schema validation.
//!
//! The validator is the single gate between [`RawConfig`] and
//! [`ValidatedConfig`]. It reports every violation in one pass so callers can
//! show the user the full list instead of one error per edit-retry cycle.
//!
//! Violation ordering is deterministic: missing-field violations first, then
//! invalid-value violations, each in schema declaration order. Golden-output
//! tests rely on this.
//!
//! Cross-field consistency (say, FRAMEWORK belonging to LANGUAGE) is
//! intentionally not checked; membership is per-field only. An incoherent
//! but schema-legal combination plans fewer actions instead of failing.

use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::config::{RawConfig, ValidatedConfig};
use crate::domain::error::{DomainError, Violation};
use crate::domain::fields::FieldId;
use crate::domain::schema::SCHEMA;

/// Validate `raw` against the schema.
///
/// # Errors
///
/// [`DomainError::ConfigurationInvalid`] carrying the complete, ordered
/// violation list when any check fails.
#[instrument(skip(raw), fields(fields = raw.len()))]
pub fn validate(raw: &RawConfig) -> Result<ValidatedConfig, DomainError> {
    let violations = violations(raw);
    if !violations.is_empty() {
        debug!(count = violations.len(), "validation failed");
        return Err(DomainError::ConfigurationInvalid { violations });
    }

    let config = ValidatedConfig::new(
        parse_field(raw, FieldId::ProjectType)?,
        parse_field(raw, FieldId::Language)?,
        parse_field(raw, FieldId::Framework)?,
        parse_field(raw, FieldId::BuildSystem)?,
        parse_field(raw, FieldId::Database)?,
        parse_field(raw, FieldId::Deployment)?,
        parse_field(raw, FieldId::CiCd)?,
        parse_field(raw, FieldId::Testing)?,
        parse_field(raw, FieldId::LicenseType)?,
        parse_field(raw, FieldId::Visibility)?,
    );
    debug!("configuration validated");
    Ok(config)
}

/// The ordered violation list for `raw`, empty when valid.
///
/// Exposed separately so callers (the `check` command) can render the list
/// without unwrapping an error.
pub fn violations(raw: &RawConfig) -> Vec<Violation> {
    let mut out = Vec::new();

    // Pass 1: required-field presence, schema order.
    for schema_field in SCHEMA {
        if schema_field.required && !raw.contains(schema_field.field) {
            out.push(Violation::MissingField {
                field: schema_field.field,
            });
        }
    }

    // Pass 2: value membership for present fields, schema order. A missing
    // field cannot also appear here, so the two passes never overlap.
    for schema_field in SCHEMA {
        if schema_field.allowed.is_empty() {
            continue;
        }
        if let Some(value) = raw.get(schema_field.field) {
            if !schema_field.allowed.contains(&value) {
                out.push(Violation::InvalidValue {
                    field: schema_field.field,
                    value: value.to_owned(),
                    allowed: schema_field.allowed,
                });
            }
        }
    }

    out
}

/// Parse one field's value into its typed enum.
///
/// Only called after `violations()` returned empty, so both arms' failures
/// are unreachable in practice; they still produce honest errors rather than
/// panicking.
fn parse_field<T>(raw: &RawConfig, field: FieldId) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    match raw.get(field) {
        Some(value) => value.parse(),
        None => Err(DomainError::ConfigurationInvalid {
            violations: vec![Violation::MissingField { field }],
        }),
    }
}
