//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Deserializer, Serialize};

/// Maintenance record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO date or timestamp
    #[serde(default)]
    pub date_performed: Option<String>,
    #[serde(default)]
    pub next_due_date: Option<String>,
    /// Wire text of the decimal, kept verbatim
    #[serde(default, deserialize_with = "cost_text")]
    pub cost: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service_provider: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Vehicle data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub license_plate: Option<String>,
}

impl Vehicle {
    /// Selector label, e.g. "2019 Ford Transit (ABC-123)"
    pub fn label(&self) -> String {
        match self.license_plate.as_deref().filter(|p| !p.is_empty()) {
            Some(plate) => format!("{} {} {} ({})", self.year, self.make, self.model, plate),
            None => format!("{} {} {}", self.year, self.make, self.model),
        }
    }
}

/// Reply of `update_maintenance_record`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Service type options (value, label)
pub const SERVICE_TYPES: &[(&str, &str)] = &[
    ("Oil Change", "Oil Change"),
    ("Tire Rotation", "Tire Rotation"),
    ("Brake Service", "Brake Service"),
    ("Inspection", "Inspection"),
    ("Battery Replacement", "Battery Replacement"),
    ("Transmission Service", "Transmission Service"),
    ("Engine Tune-up", "Engine Tune-up"),
    ("Other", "Other"),
];

/// Status options (value, label)
pub const STATUSES: &[(&str, &str)] = &[
    ("scheduled", "Scheduled"),
    ("completed", "Completed"),
    ("overdue", "Overdue"),
];

pub const DEFAULT_STATUS: &str = "scheduled";

/// Catalogue options plus `current` when it is a value outside the catalogue
fn options_with_current(catalogue: &[(&str, &str)], current: &str) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = catalogue
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();
    if !current.is_empty() && !catalogue.iter().any(|(value, _)| *value == current) {
        options.push((current.to_string(), current.to_string()));
    }
    options
}

pub fn service_type_options(current: &str) -> Vec<(String, String)> {
    options_with_current(SERVICE_TYPES, current)
}

pub fn status_options(current: &str) -> Vec<(String, String)> {
    options_with_current(STATUSES, current)
}

/// Decimal columns come back as `45.5` or `"45.50"`; strings are kept as sent.
fn cost_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Integer(n)) => Some(n.to_string()),
        // -0 prints as "0", matching JS number formatting
        Some(Raw::Float(n)) if n == 0.0 => Some("0".to_string()),
        Some(Raw::Float(n)) => Some(n.to_string()),
        Some(Raw::Text(s)) if s.trim().is_empty() => None,
        Some(Raw::Text(s)) => Some(s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sparse_json() {
        let record: MaintenanceRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.vehicle_id, None);
        assert_eq!(record.cost, None);
        assert_eq!(record.status, None);
    }

    fn cost_of(json: &str) -> Option<String> {
        serde_json::from_str::<MaintenanceRecord>(json).unwrap().cost
    }

    #[test]
    fn test_cost_keeps_wire_text() {
        assert_eq!(cost_of(r#"{"id": 1, "cost": "120.50"}"#).as_deref(), Some("120.50"));
        assert_eq!(
            cost_of(r#"{"id": 1, "cost": "12345678901234567.89"}"#).as_deref(),
            Some("12345678901234567.89")
        );
        assert_eq!(cost_of(r#"{"id": 1, "cost": 45.5}"#).as_deref(), Some("45.5"));
        assert_eq!(cost_of(r#"{"id": 1, "cost": 45}"#).as_deref(), Some("45"));
        assert_eq!(cost_of(r#"{"id": 1, "cost": -0.0}"#).as_deref(), Some("0"));
        assert_eq!(cost_of(r#"{"id": 1, "cost": null}"#), None);
        assert_eq!(cost_of(r#"{"id": 1, "cost": ""}"#), None);
    }

    #[test]
    fn test_vehicle_label() {
        let mut vehicle = Vehicle {
            id: 3,
            make: "Ford".to_string(),
            model: "Transit".to_string(),
            year: 2019,
            license_plate: Some("ABC-123".to_string()),
        };
        assert_eq!(vehicle.label(), "2019 Ford Transit (ABC-123)");

        vehicle.license_plate = None;
        assert_eq!(vehicle.label(), "2019 Ford Transit");
    }

    #[test]
    fn test_service_type_options_keep_free_text() {
        assert_eq!(service_type_options("").len(), SERVICE_TYPES.len());
        assert_eq!(service_type_options("Oil Change").len(), SERVICE_TYPES.len());

        let options = service_type_options("Windshield Repair");
        assert_eq!(options.len(), SERVICE_TYPES.len() + 1);
        assert_eq!(options.last().unwrap().0, "Windshield Repair");
    }

    #[test]
    fn test_status_options_keep_unknown_status() {
        assert_eq!(status_options("completed").len(), STATUSES.len());

        let options = status_options("pending");
        assert_eq!(options.len(), STATUSES.len() + 1);
        assert_eq!(options.last().unwrap(), &("pending".to_string(), "pending".to_string()));
    }

    #[test]
    fn test_update_result_without_message() {
        let result: UpdateResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(result.success);
        assert_eq!(result.message, None);
    }
}
