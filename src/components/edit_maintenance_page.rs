//! Edit Maintenance Page
//!
//! Loads the record named by the route and the selectable vehicles, then
//! mounts the edit form.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::commands;
use crate::components::MaintenanceEditForm;
use crate::context::AppContext;
use crate::models::{MaintenanceRecord, Vehicle};

#[derive(Debug, Clone, PartialEq)]
enum EditData {
    InvalidId,
    NotFound,
    Ready(MaintenanceRecord, Vec<Vehicle>),
    Failed(String),
}

fn parse_record_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse::<i64>().ok())
}

async fn load_edit_data(id: Option<i64>) -> EditData {
    let Some(id) = id else {
        return EditData::InvalidId;
    };

    let record = match commands::get_maintenance_record(id).await {
        Ok(Some(record)) => record,
        Ok(None) => return EditData::NotFound,
        Err(e) => {
            log::error!("[EDIT] Failed to load record {}: {}", id, e);
            return EditData::Failed(e.to_string());
        }
    };

    match commands::list_vehicles().await {
        Ok(vehicles) => {
            log::debug!("[EDIT] Loaded record {} with {} vehicles", id, vehicles.len());
            EditData::Ready(record, vehicles)
        }
        Err(e) => {
            log::error!("[EDIT] Failed to load vehicles: {}", e);
            EditData::Failed(e.to_string())
        }
    }
}

#[component]
pub fn EditMaintenancePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let params = use_params_map();

    let data = LocalResource::new(move || {
        let id = parse_record_id(params.read().get("id").as_deref());
        load_edit_data(id)
    });

    view! {
        <section class="edit-maintenance-page">
            <h1>"Edit Maintenance Record"</h1>
            {move || match data.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(EditData::Ready(record, vehicles)) => {
                    view! { <MaintenanceEditForm record=record vehicles=vehicles /> }.into_any()
                }
                Some(EditData::InvalidId) => {
                    view! { <p class="error-text">"Invalid maintenance record id"</p> }.into_any()
                }
                Some(EditData::NotFound) => view! {
                    <p class="error-text">"Maintenance record not found"</p>
                    <A href=ctx.listing_path()>"Back to maintenance"</A>
                }.into_any(),
                Some(EditData::Failed(message)) => {
                    view! { <p class="error-text">{message}</p> }.into_any()
                }
            }}
        </section>
    }
}
