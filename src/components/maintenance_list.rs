//! Maintenance List Component
//!
//! Listing route; re-fetches whenever the app reload trigger is bumped.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::commands;
use crate::context::AppContext;
use crate::form_state::{format_cost, format_date_input};
use crate::models::{MaintenanceRecord, STATUSES};

/// Table row, already formatted for display
#[derive(Debug, Clone, PartialEq)]
struct ListRow {
    id: i64,
    vehicle: String,
    service_type: String,
    next_due: String,
    status: String,
    cost: String,
}

fn status_label(status: Option<&str>) -> String {
    match status {
        Some(value) => STATUSES
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| value.to_string()),
        None => String::new(),
    }
}

fn to_rows(records: Vec<MaintenanceRecord>, vehicle_labels: &HashMap<i64, String>) -> Vec<ListRow> {
    records
        .into_iter()
        .map(|record| ListRow {
            id: record.id,
            vehicle: record
                .vehicle_id
                .map(|id| vehicle_labels.get(&id).cloned().unwrap_or_else(|| format!("#{}", id)))
                .unwrap_or_default(),
            service_type: record.service_type.clone().unwrap_or_default(),
            next_due: format_date_input(record.next_due_date.as_deref()),
            status: status_label(record.status.as_deref()),
            cost: format_cost(record.cost.as_deref()),
        })
        .collect()
}

async fn load_rows() -> Result<Vec<ListRow>, String> {
    let records = commands::list_maintenance_records().await.map_err(|e| e.to_string())?;
    // Missing vehicles only degrade the label column
    let vehicle_labels = match commands::list_vehicles().await {
        Ok(vehicles) => vehicles.into_iter().map(|v| (v.id, v.label())).collect(),
        Err(e) => {
            log::warn!("[LIST] Failed to load vehicles: {}", e);
            HashMap::new()
        }
    };
    log::debug!("[LIST] Loaded {} records", records.len());
    Ok(to_rows(records, &vehicle_labels))
}

#[component]
pub fn MaintenanceList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = LocalResource::new(move || {
        let _ = ctx.reload_trigger.get();
        load_rows()
    });

    view! {
        <section class="maintenance-list">
            <h1>"Maintenance"</h1>
            {move || match rows.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(Err(message)) => view! { <p class="error-text">{message}</p> }.into_any(),
                Some(Ok(rows)) if rows.is_empty() => {
                    view! { <p class="empty-text">"No maintenance records"</p> }.into_any()
                }
                Some(Ok(rows)) => view! {
                    <table class="maintenance-table">
                        <thead>
                            <tr>
                                <th>"Vehicle"</th>
                                <th>"Service"</th>
                                <th>"Next Due"</th>
                                <th>"Status"</th>
                                <th>"Cost"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.clone()
                                key=|row| row.id
                                children=move |row| {
                                    let href = ctx.config.with_value(|c| c.edit_path(row.id));
                                    let status_class = format!("status status-{}", row.status.to_lowercase());
                                    view! {
                                        <tr>
                                            <td>{row.vehicle}</td>
                                            <td>{row.service_type}</td>
                                            <td>{row.next_due}</td>
                                            <td class=status_class>{row.status}</td>
                                            <td class="cost">{row.cost}</td>
                                            <td><A href=href>"Edit"</A></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}
