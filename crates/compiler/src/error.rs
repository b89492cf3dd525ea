use thiserror::Error;

/// Result type for roadmap compilation
pub type Result<T> = std::result::Result<T, RoadmapError>;

/// Errors surfaced by the assembler, the section contract and config loading.
///
/// All of them are raised before any output is built; there is no partial
/// roadmap on failure.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// A required top-level input is absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A finding has no usable id, so no stable item id can be derived
    #[error("Finding at index {index} has no id")]
    MissingFindingId { index: usize },

    /// Two findings share an id
    #[error("Duplicate finding id: {id}")]
    DuplicateFinding { id: String },

    /// Section contract is malformed
    #[error("Invalid section contract: {0}")]
    InvalidContract(String),

    /// Compiler configuration is malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input document could not be decoded
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RoadmapError {
    pub fn invalid_contract(msg: impl Into<String>) -> Self {
        Self::InvalidContract(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error stems from caller input rather than configuration.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::MissingFindingId { .. }
                | Self::DuplicateFinding { .. }
                | Self::MalformedInput(_)
        )
    }
}
