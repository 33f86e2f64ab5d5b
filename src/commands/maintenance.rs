//! Maintenance Commands
//!
//! Frontend bindings for maintenance-record backend commands.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CommandError;
use crate::form_state::MaintenancePayload;
use crate::models::{MaintenanceRecord, UpdateResult};
use super::call;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

#[derive(Serialize)]
struct UpdateMaintenanceArgs<'a> {
    payload: &'a MaintenancePayload,
}

// ========================
// Commands
// ========================

pub async fn get_maintenance_record(id: i64) -> Result<Option<MaintenanceRecord>, CommandError> {
    call("get_maintenance_record", Some(&IdArgs { id })).await
}

pub async fn list_maintenance_records() -> Result<Vec<MaintenanceRecord>, CommandError> {
    call::<(), _>("list_maintenance_records", None).await
}

pub async fn update_maintenance_record(payload: &MaintenancePayload) -> Result<UpdateResult, CommandError> {
    call("update_maintenance_record", Some(&UpdateMaintenanceArgs { payload })).await
}

// ========================
// Service seam
// ========================

/// The update collaborator behind the edit form.
///
/// `?Send` because JS handles never leave the main thread.
#[async_trait(?Send)]
pub trait MaintenanceService {
    async fn update_record(&self, payload: &MaintenancePayload) -> Result<UpdateResult, CommandError>;
}

/// Routes updates through the Tauri `invoke` bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriMaintenanceService;

#[async_trait(?Send)]
impl MaintenanceService for TauriMaintenanceService {
    async fn update_record(&self, payload: &MaintenancePayload) -> Result<UpdateResult, CommandError> {
        update_maintenance_record(payload).await
    }
}
