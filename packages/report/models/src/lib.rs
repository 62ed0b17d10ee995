#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record types for municipal road-safety data.
//!
//! Defines the canonical shape of an accident report and a cited regulation
//! entry as they arrive from external feeds. These types carry no behavior
//! beyond serialization; constraint checking (coordinate ranges, URL
//! well-formedness) lives in `road_safety_validate`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The record schemas this system understands.
///
/// Used to label validation diagnostics so a failure can be traced back to
/// the record kind that produced it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaKind {
    /// A reported traffic incident ([`AccidentRecord`]).
    AccidentRecord,
    /// A cited rule or regulation ([`RegulationEntry`]).
    RegulationEntry,
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinates {
    /// Latitude in degrees. Valid range is [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees. Valid range is [-180, 180].
    pub longitude: f64,
}

impl GeoCoordinates {
    /// Whether both components lie within valid geographic range.
    #[must_use]
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Where an accident happened, from the free-text address down to exact
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentLocation {
    /// Full street address as reported.
    pub full_address: String,
    /// More precise location description (e.g., "northbound lane near exit 4").
    pub exact_location: String,
    /// Neighborhood name.
    pub neighborhood: String,
    /// Municipality name.
    pub municipality: String,
    /// State or province name.
    pub state: String,
    /// Exact coordinate pair.
    pub coordinates: GeoCoordinates,
}

/// The vehicle (or vehicles, described as free text) involved in an accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInvolved {
    /// Vehicle category (e.g., "motorcycle", "bus").
    #[serde(rename = "type")]
    pub vehicle_type: String,
    /// Free-text description of the vehicle(s).
    pub description: String,
}

/// Which emergency services responded to an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyServiceResponse {
    /// Traffic police attended the scene.
    pub traffic_police: bool,
    /// An ambulance attended the scene.
    pub ambulance: bool,
    /// Firefighters attended the scene.
    pub firefighters: bool,
}

/// Severity and public-risk classification assigned to an accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventClassification {
    /// Severity level as reported (free text).
    pub severity_level: String,
    /// Public-risk level as reported (free text).
    pub public_risk_level: String,
}

/// One reported traffic incident.
///
/// Constructed from external input at validation time, never mutated after
/// successful validation, and discarded after consumption by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentRecord {
    /// Opaque identifier, unique per record.
    pub event_id: String,
    /// Free-text accident category.
    pub accident_type: String,
    /// How the accident was reported (free text).
    pub report_medium: String,
    /// Date the accident occurred. Format is not enforced beyond "string".
    pub accident_date: String,
    /// Date the accident was reported.
    pub report_date: String,
    /// Time of day the accident was reported.
    pub report_time: String,
    /// Where the accident happened.
    pub location: AccidentLocation,
    /// Vehicle(s) involved.
    pub vehicle_involved: VehicleInvolved,
    /// Number of injured people. Non-negative by construction.
    pub injured_count: u32,
    /// Number of deaths. Non-negative by construction.
    pub death_count: u32,
    /// Free-text description of material damage.
    pub material_damage: String,
    /// Areas affected by the accident, in reported order.
    pub affected_areas: Vec<String>,
    /// Which emergency services responded, if recorded.
    pub emergency_service_response: Option<EmergencyServiceResponse>,
    /// Institutions that responded, in reported order, if recorded.
    pub responding_institutions: Option<Vec<String>>,
    /// Weather conditions at the time, if recorded.
    pub weather_conditions: Option<String>,
    /// Free-text narrative of the event.
    pub event_description: String,
    /// Name of the person who reported the event.
    pub reporter_name: String,
    /// Name of the photographer, if any.
    pub photographer_name: Option<String>,
    /// URL of the source report. Must be a well-formed absolute URL.
    pub source_url: String,
    /// URL of a map view for the location, if any. Must be well-formed when
    /// present.
    pub map_url: Option<String>,
    /// Severity/risk classification.
    pub event_classification: EventClassification,
}

/// One cited rule or regulation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulationEntry {
    /// Top-level regulation category.
    pub category: String,
    /// Subcategory within the regulation category.
    pub subcategory: String,
    /// Free-text description of the rule.
    pub description: String,
    /// Citation source (e.g., statute name or issuing body).
    pub source: String,
    /// Specific article number, if cited.
    pub article: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_in_range() {
        let ok = GeoCoordinates {
            latitude: 19.4326,
            longitude: -99.1332,
        };
        assert!(ok.in_range());

        let bad_lat = GeoCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(!bad_lat.in_range());

        let bad_lng = GeoCoordinates {
            latitude: 0.0,
            longitude: -180.5,
        };
        assert!(!bad_lng.in_range());
    }

    #[test]
    fn coordinates_boundary_values() {
        for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            let coords = GeoCoordinates {
                latitude: lat,
                longitude: lng,
            };
            assert!(coords.in_range(), "({lat}, {lng}) should be in range");
        }
    }

    #[test]
    fn schema_kind_display() {
        assert_eq!(SchemaKind::AccidentRecord.to_string(), "ACCIDENT_RECORD");
        assert_eq!(SchemaKind::RegulationEntry.to_string(), "REGULATION_ENTRY");
    }

    #[test]
    fn vehicle_type_serializes_as_type() {
        let vehicle = VehicleInvolved {
            vehicle_type: "motorcycle".to_string(),
            description: "red sport bike".to_string(),
        };
        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["type"], "motorcycle");
    }

    #[test]
    fn regulation_entry_camel_case_roundtrip() {
        let entry = RegulationEntry {
            category: "Speed limits".to_string(),
            subcategory: "Urban roads".to_string(),
            description: "Maximum 50 km/h in urban zones".to_string(),
            source: "Municipal Traffic Code".to_string(),
            article: Some("Art. 12".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: RegulationEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
