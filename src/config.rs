//! Frontend Configuration
//!
//! Compile-time defaults, provided to components through context.

use log::LevelFilter;

/// Route the edit form returns to after save or cancel
pub const LISTING_PATH: &str = "/maintenance";

/// Banner text when the update reports no reason or never completes
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to update maintenance record";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub listing_path: &'static str,
    pub fallback_error: &'static str,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing_path: LISTING_PATH,
            fallback_error: DEFAULT_ERROR_MESSAGE,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    /// Edit route for a record
    pub fn edit_path(&self, id: i64) -> String {
        format!("{}/{}/edit", self.listing_path, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_path() {
        let config = AppConfig::default();
        assert_eq!(config.edit_path(7), "/maintenance/7/edit");
        assert_eq!(config.fallback_error, "Failed to update maintenance record");
    }
}
