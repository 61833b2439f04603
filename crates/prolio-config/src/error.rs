use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `PROLIO_*` variable could not be parsed or merged.
    #[error("failed to read prolio configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs is still at its defaults.
    #[error("'{section}' is not configured")]
    NotConfigured { section: String },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
