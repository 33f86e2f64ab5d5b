//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever listing data must be re-fetched - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped whenever listing data must be re-fetched - write
    set_reload_trigger: WriteSignal<u32>,
    /// Static configuration
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Mark listing data stale
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn listing_path(&self) -> &'static str {
        self.config.with_value(|c| c.listing_path)
    }

    pub fn fallback_error(&self) -> &'static str {
        self.config.with_value(|c| c.fallback_error)
    }
}
