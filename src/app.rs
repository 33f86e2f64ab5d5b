//! Fleet Maintenance App
//!
//! Router shell: listing and edit routes share one reload trigger.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{EditMaintenancePage, MaintenanceList};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), config));

    view! {
        <Router>
            <main class="dashboard">
                <Routes fallback=|| view! { <p class="error-text">"Page not found"</p> }>
                    <Route path=path!("/") view=MaintenanceList />
                    <Route path=path!("/maintenance") view=MaintenanceList />
                    <Route path=path!("/maintenance/:id/edit") view=EditMaintenancePage />
                </Routes>
            </main>
        </Router>
    }
}
