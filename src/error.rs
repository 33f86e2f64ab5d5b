//! Frontend Errors
//!
//! Failures of the host command bridge.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// Arguments could not be converted to a JS value
    #[error("failed to encode arguments for `{command}`: {message}")]
    Encode { command: &'static str, message: String },

    /// Reply did not match the expected shape
    #[error("unexpected reply from `{command}`: {message}")]
    Decode { command: &'static str, message: String },

    /// The invoke promise rejected (transport or handler error)
    #[error("`{command}` failed: {message}")]
    Invoke { command: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_command() {
        let err = CommandError::Invoke {
            command: "update_maintenance_record",
            message: "connection reset".to_string(),
        };
        assert_eq!(err.to_string(), "`update_maintenance_record` failed: connection reset");
    }
}
