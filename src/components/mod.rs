//! UI Components
//!
//! Reusable Leptos components.

mod maintenance_edit_form;
mod edit_maintenance_page;
mod maintenance_list;

pub use maintenance_edit_form::MaintenanceEditForm;
pub use edit_maintenance_page::EditMaintenancePage;
pub use maintenance_list::MaintenanceList;
