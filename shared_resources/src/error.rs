use std::io;

use thiserror::Error;

/// Rejected configuration or out-of-range input. Nothing is ever clamped;
/// callers get one of these instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("floor {floor} is out of range, the building has {num_floors} floors")]
    FloorOutOfRange { floor: u8, num_floors: u8 },

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: String, reason: String },

    #[error("failed to read configuration file {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidSetting {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::FloorOutOfRange { floor: 12, num_floors: 10 };
        assert_eq!(err.to_string(), "floor 12 is out of range, the building has 10 floors");

        let err = ConfigError::invalid("capacity", "must be at least 1");
        assert_eq!(err.to_string(), "invalid setting `capacity`: must be at least 1");
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse: Result<u8, serde_json::Error> = serde_json::from_str("not json");
        let err: ConfigError = parse.unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
