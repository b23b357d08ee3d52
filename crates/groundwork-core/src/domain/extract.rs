//! Configuration block extraction.
//!
//! Locates the first delimited configuration region in a document and parses
//! its interior into a [`RawConfig`]. Extraction is purely lexical: it knows
//! nothing about required fields or allowed values, which are the validator's
//! job. The split keeps unknown keys forward-compatible (a newer document
//! can carry keys an older binary ignores).

use tracing::{debug, instrument};

use crate::domain::config::RawConfig;
use crate::domain::error::DomainError;
use crate::domain::fields::FieldId;

/// Default start marker for the embedded configuration block.
pub const DEFAULT_START_MARKER: &str = "<!-- GROUNDWORK-CONFIG-START -->";
/// Default end marker for the embedded configuration block.
pub const DEFAULT_END_MARKER: &str = "<!-- GROUNDWORK-CONFIG-END -->";

/// The delimiter pair bounding a configuration block.
///
/// Markers are matched exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarkers {
    pub start: String,
    pub end: String,
}

impl Default for BlockMarkers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_owned(),
            end: DEFAULT_END_MARKER.to_owned(),
        }
    }
}

/// Extract the raw configuration from `document`.
///
/// # Errors
///
/// [`DomainError::BlockNotFound`] when either marker is absent, or the end
/// marker only occurs before the start marker.
///
/// # Line grammar
///
/// - `KEY: value` or `KEY: [value]`, split on the FIRST `:` only, so values
///   may themselves contain colons.
/// - Surrounding whitespace and enclosing `[`/`]` are stripped from values.
/// - Lines without a separator, comment lines, and unrecognized keys are
///   silently skipped.
/// - A repeated key keeps its first value (see [`RawConfig::insert_first`]).
#[instrument(skip(document), fields(doc_len = document.len()))]
pub fn extract(document: &str, markers: &BlockMarkers) -> Result<RawConfig, DomainError> {
    let block = locate_block(document, markers)?;

    let mut raw = RawConfig::new();
    for line in block.lines() {
        let line = line.trim();
        if line.starts_with("<!--") {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim();
        let value = value.trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace());

        match key.parse::<FieldId>() {
            Ok(field) => {
                raw.insert_first(field, value);
            }
            Err(_) => {
                // Unknown keys are future schema fields, not errors.
                debug!(key, "skipping unrecognized configuration key");
            }
        }
    }

    debug!(fields = raw.len(), "configuration block extracted");
    Ok(raw)
}

/// The text strictly between the first start marker and the first end marker
/// after it.
fn locate_block<'a>(document: &'a str, markers: &BlockMarkers) -> Result<&'a str, DomainError> {
    let not_found = || DomainError::BlockNotFound {
        start: markers.start.clone(),
        end: markers.end.clone(),
    };

    let start = document.find(&markers.start).ok_or_else(not_found)?;
    let interior_start = start + markers.start.len();
    let end_offset = document[interior_start..]
        .find(&markers.end)
        .ok_or_else(not_found)?;

    Ok(&document[interior_start..interior_start + end_offset])
}
