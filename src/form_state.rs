//! Maintenance Form State
//!
//! Display-string mirror of a `MaintenanceRecord`, built once when the edit
//! form mounts and then edited one field at a time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reactive_stores::Store;
use serde::Serialize;

use crate::models::{MaintenanceRecord, DEFAULT_STATUS};

/// Editable fields of the maintenance form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    VehicleId,
    ServiceType,
    Description,
    DatePerformed,
    NextDueDate,
    Cost,
    Status,
    ServiceProvider,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::VehicleId,
        FormField::ServiceType,
        FormField::Description,
        FormField::DatePerformed,
        FormField::NextDueDate,
        FormField::Cost,
        FormField::Status,
        FormField::ServiceProvider,
        FormField::Notes,
    ];

    /// Wire key and DOM id
    pub fn key(&self) -> &'static str {
        match self {
            FormField::VehicleId => "vehicle_id",
            FormField::ServiceType => "service_type",
            FormField::Description => "description",
            FormField::DatePerformed => "date_performed",
            FormField::NextDueDate => "next_due_date",
            FormField::Cost => "cost",
            FormField::Status => "status",
            FormField::ServiceProvider => "service_provider",
            FormField::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::VehicleId => "Vehicle",
            FormField::ServiceType => "Service Type",
            FormField::Description => "Description",
            FormField::DatePerformed => "Date Performed",
            FormField::NextDueDate => "Next Due Date",
            FormField::Cost => "Cost",
            FormField::Status => "Status",
            FormField::ServiceProvider => "Service Provider",
            FormField::Notes => "Notes",
        }
    }

    /// Label text with a `*` marker on required fields
    pub fn display_label(&self) -> String {
        if self.is_required() {
            format!("{} *", self.label())
        } else {
            self.label().to_string()
        }
    }

    /// Enforced by the browser through the `required` attribute
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::VehicleId | FormField::ServiceType | FormField::NextDueDate | FormField::Status
        )
    }
}

/// Form state with field-level reactivity
#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct FormState {
    pub id: String,
    pub vehicle_id: String,
    pub service_type: String,
    pub description: String,
    pub date_performed: String,
    pub next_due_date: String,
    pub cost: String,
    pub status: String,
    pub service_provider: String,
    pub notes: String,
}

impl FormState {
    /// One-shot initialization; later changes to `record` are not observed.
    pub fn from_record(record: &MaintenanceRecord) -> Self {
        Self {
            id: record.id.to_string(),
            vehicle_id: record.vehicle_id.map(|v| v.to_string()).unwrap_or_default(),
            service_type: record.service_type.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            date_performed: format_date_input(record.date_performed.as_deref()),
            next_due_date: format_date_input(record.next_due_date.as_deref()),
            cost: format_cost(record.cost.as_deref()),
            status: record
                .status
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            service_provider: record.service_provider.clone().unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::VehicleId => &self.vehicle_id,
            FormField::ServiceType => &self.service_type,
            FormField::Description => &self.description,
            FormField::DatePerformed => &self.date_performed,
            FormField::NextDueDate => &self.next_due_date,
            FormField::Cost => &self.cost,
            FormField::Status => &self.status,
            FormField::ServiceProvider => &self.service_provider,
            FormField::Notes => &self.notes,
        }
    }

    /// Replace a single field, leaving the rest untouched
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::VehicleId => &mut self.vehicle_id,
            FormField::ServiceType => &mut self.service_type,
            FormField::Description => &mut self.description,
            FormField::DatePerformed => &mut self.date_performed,
            FormField::NextDueDate => &mut self.next_due_date,
            FormField::Cost => &mut self.cost,
            FormField::Status => &mut self.status,
            FormField::ServiceProvider => &mut self.service_provider,
            FormField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    pub fn to_payload(&self) -> MaintenancePayload {
        MaintenancePayload {
            id: self.id.clone(),
            vehicle_id: self.vehicle_id.clone(),
            service_type: self.service_type.clone(),
            description: self.description.clone(),
            date_performed: self.date_performed.clone(),
            next_due_date: self.next_due_date.clone(),
            cost: self.cost.clone(),
            status: self.status.clone(),
            service_provider: self.service_provider.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Flat string payload for `update_maintenance_record`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenancePayload {
    pub id: String,
    pub vehicle_id: String,
    pub service_type: String,
    pub description: String,
    pub date_performed: String,
    pub next_due_date: String,
    pub cost: String,
    pub status: String,
    pub service_provider: String,
    pub notes: String,
}

/// Render a stored date as `YYYY-MM-DD` for `<input type="date">`.
///
/// Timestamps are reduced to their UTC calendar date. Blank or unparseable
/// input yields an empty string.
pub fn format_date_input(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|dt| dt.date())
        });

    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => {
            log::warn!("[FORM] Unparseable date {:?}, leaving field blank", raw);
            String::new()
        }
    }
}

/// Wire text as-is, "0" when absent
pub fn format_cost(cost: Option<&str>) -> String {
    cost.unwrap_or("0").to_string()
}
