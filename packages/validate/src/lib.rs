#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Validation and sanitization for road-safety records.
//!
//! Untyped input (decoded JSON from a feed or a submitted form) goes through
//! [`schema::validate`] or [`schema::try_validate`] to become a typed record
//! from `road_safety_report_models`. Raw strings go through
//! [`sanitize::sanitize`] for denylist-based script stripping, and URL
//! strings through [`sanitize::is_safe_url`] for protocol allow-listing.

pub mod sanitize;
pub mod schema;

use std::collections::BTreeMap;

use road_safety_report_models::SchemaKind;

/// Errors that can occur while validating a record.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Input could not be decoded into the record shape (missing or
    /// ill-typed fields).
    #[error("{kind} record has invalid shape: {source}")]
    Shape {
        /// Which schema was being applied.
        kind: SchemaKind,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A decoded field violates its range or format constraint.
    #[error("{kind} record field `{field}`: {reason}")]
    Constraint {
        /// Which schema was being applied.
        kind: SchemaKind,
        /// Dotted path of the offending field, in wire (camelCase) form.
        field: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl ValidationError {
    /// The schema that was being applied when validation failed.
    #[must_use]
    pub const fn kind(&self) -> SchemaKind {
        match self {
            Self::Shape { kind, .. } | Self::Constraint { kind, .. } => *kind,
        }
    }

    /// The offending field path, when the failure is a constraint violation.
    ///
    /// Shape failures cover the whole document, so they carry no single
    /// field path.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Shape { .. } => None,
            Self::Constraint { field, .. } => Some(field),
        }
    }
}

/// Destination for validation diagnostics.
///
/// Injected into the non-propagating validation mode so call sites (and
/// tests) control where failure records go.
pub trait DiagnosticSink {
    /// Records one diagnostic entry.
    fn record(&self, level: log::Level, message: &str, context: &BTreeMap<&'static str, String>);
}

/// [`DiagnosticSink`] that routes entries to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, level: log::Level, message: &str, context: &BTreeMap<&'static str, String>) {
        let ctx = context
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        log::log!(level, "{message} ({ctx})");
    }
}
