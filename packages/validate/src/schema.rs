//! Schema validation for untyped record input.
//!
//! Input arrives as a decoded [`serde_json::Value`] (the wire format is the
//! caller's concern). [`try_validate`] decodes it into a typed record and
//! checks every field constraint, surfacing the first violation in
//! field-declaration order. [`validate`] is the non-propagating variant:
//! failures are written to a [`DiagnosticSink`] and collapse to `None`.

use std::collections::BTreeMap;

use road_safety_report_models::{AccidentRecord, RegulationEntry, SchemaKind};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{DiagnosticSink, ValidationError};

/// A record kind that untyped input can be validated against.
pub trait Schema: DeserializeOwned {
    /// Which schema this type represents, for diagnostics.
    const KIND: SchemaKind;

    /// Checks range and format constraints on an already-decoded record.
    ///
    /// Constraints are checked in field-declaration order; the first
    /// violation is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Constraint`] for the first violated
    /// constraint.
    fn check(&self) -> Result<(), ValidationError>;
}

impl Schema for AccidentRecord {
    const KIND: SchemaKind = SchemaKind::AccidentRecord;

    fn check(&self) -> Result<(), ValidationError> {
        let coords = &self.location.coordinates;
        if !(-90.0..=90.0).contains(&coords.latitude) {
            return Err(constraint::<Self>(
                "location.coordinates.latitude",
                format!("{} is outside [-90, 90]", coords.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&coords.longitude) {
            return Err(constraint::<Self>(
                "location.coordinates.longitude",
                format!("{} is outside [-180, 180]", coords.longitude),
            ));
        }

        // Counts are u32, so non-negativity is enforced at decode time.

        check_url::<Self>("sourceUrl", &self.source_url)?;
        if let Some(map_url) = &self.map_url {
            check_url::<Self>("mapUrl", map_url)?;
        }

        Ok(())
    }
}

impl Schema for RegulationEntry {
    const KIND: SchemaKind = SchemaKind::RegulationEntry;

    fn check(&self) -> Result<(), ValidationError> {
        // Required fields are enforced at decode time; the entry carries no
        // range or format constraints beyond that.
        Ok(())
    }
}

/// Validates untyped input against schema `T`, propagating failures.
///
/// # Errors
///
/// Returns [`ValidationError::Shape`] when the input cannot be decoded into
/// `T`, or [`ValidationError::Constraint`] for the first field whose value
/// violates its declared constraint.
pub fn try_validate<T: Schema>(value: &Value) -> Result<T, ValidationError> {
    let record = T::deserialize(value).map_err(|source| ValidationError::Shape {
        kind: T::KIND,
        source,
    })?;
    record.check()?;
    Ok(record)
}

/// Validates untyped input against schema `T`, logging failures.
///
/// The default, non-propagating mode: on failure, writes one diagnostic
/// entry to `sink` and returns `None`.
pub fn validate<T: Schema>(value: &Value, sink: &dyn DiagnosticSink) -> Option<T> {
    match try_validate::<T>(value) {
        Ok(record) => Some(record),
        Err(err) => {
            let mut context = BTreeMap::new();
            context.insert("schema", T::KIND.to_string());
            if let Some(field) = err.field() {
                context.insert("field", field.to_string());
            }
            context.insert("error", err.to_string());
            sink.record(log::Level::Error, "record failed validation", &context);
            None
        }
    }
}

/// Validates a batch of untyped inputs, keeping the valid records.
///
/// Each element is validated independently in the non-propagating mode, so
/// one bad record costs a diagnostic entry rather than the whole batch.
pub fn validate_all<T: Schema>(values: &[Value], sink: &dyn DiagnosticSink) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| validate::<T>(value, sink))
        .collect()
}

fn constraint<T: Schema>(field: &'static str, reason: String) -> ValidationError {
    ValidationError::Constraint {
        kind: T::KIND,
        field,
        reason,
    }
}

/// Requires a well-formed absolute URL with an authority.
///
/// No scheme allow-list here; callers rendering links should additionally
/// apply [`crate::sanitize::is_safe_url`].
fn check_url<T: Schema>(field: &'static str, input: &str) -> Result<(), ValidationError> {
    match Url::parse(input) {
        Ok(url) if url.has_authority() => Ok(()),
        Ok(_) => Err(constraint::<T>(
            field,
            format!("{input:?} has no authority component"),
        )),
        Err(err) => Err(constraint::<T>(field, format!("{input:?}: {err}"))),
    }
}
