//! Vehicle Commands
//!
//! Frontend bindings for vehicle-related backend commands.

use crate::error::CommandError;
use crate::models::Vehicle;
use super::call;

pub async fn list_vehicles() -> Result<Vec<Vehicle>, CommandError> {
    call::<(), _>("list_vehicles", None).await
}
