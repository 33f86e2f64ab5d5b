//! Maintenance Edit Form Component
//!
//! Pre-populated form for editing one maintenance record.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::commands::TauriMaintenanceService;
use crate::context::AppContext;
use crate::form_state::{FormField, FormState};
use crate::models::{service_type_options, status_options, MaintenanceRecord, Vehicle};
use crate::submission::{apply_outcome, cancel, submit_update, SubmitState};

/// Input handler replacing one field of the form store
fn edit_field<E: JsCast + 'static>(form: Store<FormState>, field: FormField) -> impl Fn(E) + Copy + 'static {
    move |ev: E| {
        let value = event_target_value(&ev);
        form.update(|state| state.set(field, value));
    }
}

/// Current value of one field
fn field_value(form: Store<FormState>, field: FormField) -> impl Fn() -> String + Copy + 'static {
    move || form.with(|state| state.get(field).to_string())
}

/// Whether `value` is the current value of `field`
fn is_selected(form: Store<FormState>, field: FormField, value: String) -> impl Fn() -> bool + 'static {
    move || form.with(|state| state.get(field) == value)
}

/// Form for editing an existing maintenance record
#[component]
pub fn MaintenanceEditForm(record: MaintenanceRecord, vehicles: Vec<Vehicle>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    let form = Store::new(FormState::from_record(&record));
    let submit_state = RwSignal::new(SubmitState::default());
    let service_types = service_type_options(record.service_type.as_deref().unwrap_or_default());
    let statuses = status_options(&form.with_untracked(|state| state.status.clone()));

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let mut started = false;
            submit_state.update(|s| started = s.begin());
            if !started {
                log::debug!("[EDIT] Submit ignored, request already in flight");
                return;
            }

            let payload = form.with_untracked(|state| state.to_payload());
            let navigate = navigate.clone();
            spawn_local(async move {
                let outcome = submit_update(&TauriMaintenanceService, &payload, ctx.fallback_error()).await;
                let mut target = None;
                submit_state.update(|state| {
                    apply_outcome(&outcome, state, ctx.listing_path(), || ctx.reload(), |path| {
                        target = Some(path.to_string())
                    })
                });
                if let Some(path) = target {
                    navigate(&path, Default::default());
                }
            });
        }
    };

    let on_cancel = move |_| {
        let left = submit_state.with_untracked(|state| {
            cancel(state, ctx.listing_path(), |path| navigate(path, Default::default()))
        });
        if !left {
            log::debug!("[EDIT] Cancel ignored, save in flight");
        }
    };

    let submitting = move || submit_state.with(|s| s.submitting);

    view! {
        <div class="maintenance-edit">
            {move || submit_state.with(|s| s.error.clone()).map(|message| view! {
                <div class="error-banner" role="alert">{message}</div>
            })}

            <form class="maintenance-form" on:submit=on_submit>
                <div class="form-row">
                    <label for=FormField::VehicleId.key()>{FormField::VehicleId.display_label()}</label>
                    <select
                        id=FormField::VehicleId.key()
                        name=FormField::VehicleId.key()
                        required=true
                        on:change=edit_field(form, FormField::VehicleId)
                    >
                        <option value="">"Select a vehicle"</option>
                        {vehicles.into_iter().map(|vehicle| {
                            let value = vehicle.id.to_string();
                            view! {
                                <option
                                    value=value.clone()
                                    selected=is_selected(form, FormField::VehicleId, value)
                                >
                                    {vehicle.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <label for=FormField::ServiceType.key()>{FormField::ServiceType.display_label()}</label>
                    <select
                        id=FormField::ServiceType.key()
                        name=FormField::ServiceType.key()
                        required=true
                        on:change=edit_field(form, FormField::ServiceType)
                    >
                        <option value="">"Select service type"</option>
                        {service_types.into_iter().map(|(value, label)| view! {
                            <option
                                value=value.clone()
                                selected=is_selected(form, FormField::ServiceType, value)
                            >
                                {label}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <label for=FormField::Description.key()>{FormField::Description.display_label()}</label>
                    <textarea
                        id=FormField::Description.key()
                        name=FormField::Description.key()
                        rows=3
                        prop:value=field_value(form, FormField::Description)
                        on:input=edit_field(form, FormField::Description)
                    ></textarea>
                </div>

                <div class="form-grid">
                    <div class="form-row">
                        <label for=FormField::DatePerformed.key()>{FormField::DatePerformed.display_label()}</label>
                        <input
                            type="date"
                            id=FormField::DatePerformed.key()
                            name=FormField::DatePerformed.key()
                            prop:value=field_value(form, FormField::DatePerformed)
                            on:input=edit_field(form, FormField::DatePerformed)
                        />
                    </div>

                    <div class="form-row">
                        <label for=FormField::NextDueDate.key()>{FormField::NextDueDate.display_label()}</label>
                        <input
                            type="date"
                            id=FormField::NextDueDate.key()
                            name=FormField::NextDueDate.key()
                            required=true
                            prop:value=field_value(form, FormField::NextDueDate)
                            on:input=edit_field(form, FormField::NextDueDate)
                        />
                    </div>

                    <div class="form-row">
                        <label for=FormField::Cost.key()>{FormField::Cost.display_label()}</label>
                        <input
                            type="number"
                            id=FormField::Cost.key()
                            name=FormField::Cost.key()
                            min="0"
                            step="0.01"
                            prop:value=field_value(form, FormField::Cost)
                            on:input=edit_field(form, FormField::Cost)
                        />
                    </div>

                    <div class="form-row">
                        <label for=FormField::Status.key()>{FormField::Status.display_label()}</label>
                        <select
                            id=FormField::Status.key()
                            name=FormField::Status.key()
                            required=true
                            on:change=edit_field(form, FormField::Status)
                        >
                            {statuses.into_iter().map(|(value, label)| view! {
                                <option
                                    value=value.clone()
                                    selected=is_selected(form, FormField::Status, value)
                                >
                                    {label}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <label for=FormField::ServiceProvider.key()>{FormField::ServiceProvider.display_label()}</label>
                    <input
                        type="text"
                        id=FormField::ServiceProvider.key()
                        name=FormField::ServiceProvider.key()
                        prop:value=field_value(form, FormField::ServiceProvider)
                        on:input=edit_field(form, FormField::ServiceProvider)
                    />
                </div>

                <div class="form-row">
                    <label for=FormField::Notes.key()>{FormField::Notes.display_label()}</label>
                    <textarea
                        id=FormField::Notes.key()
                        name=FormField::Notes.key()
                        rows=4
                        prop:value=field_value(form, FormField::Notes)
                        on:input=edit_field(form, FormField::Notes)
                    ></textarea>
                </div>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" disabled=submitting on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button type="submit" class="save-btn" disabled=submitting>
                        {move || if submitting() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
