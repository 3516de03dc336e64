//! Error types for the lookup pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MauntsError {
    #[error("Config file {} not found", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Could not decode progression for {character}: {source}")]
    Decode {
        character: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{character}: {boss} has an invalid {field} value: {value}")]
    InvalidKills {
        character: String,
        boss: String,
        field: &'static str,
        value: String,
    },

    #[error("No characters configured")]
    NoCharacters,

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl MauntsError {
    /// True for the one error the runner reports and then pauses on
    pub fn is_config_not_found(&self) -> bool {
        matches!(self, MauntsError::ConfigNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_message() {
        let err = MauntsError::ConfigNotFound {
            path: PathBuf::from("chars.txt"),
        };
        assert_eq!(err.to_string(), "Config file chars.txt not found");
        assert!(err.is_config_not_found());
    }

    #[test]
    fn test_invalid_kills_message() {
        let err = MauntsError::InvalidKills {
            character: "A (Ravencrest)".to_string(),
            boss: "Ragnaros".to_string(),
            field: "normalKills",
            value: "null".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "A (Ravencrest): Ragnaros has an invalid normalKills value: null"
        );
    }

    #[test]
    fn test_network_is_not_config_error() {
        let err = MauntsError::Network {
            url: "http://localhost/".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(!err.is_config_not_found());
        assert!(err.to_string().contains("connection refused"));
    }
}
