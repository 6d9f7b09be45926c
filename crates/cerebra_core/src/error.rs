use thiserror::Error;

/// Rejections raised before a simulation starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Describe a situation to ignite the neural conversation.")]
    EmptyScenario,
}

/// Failures while reading an exported profile document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("malformed profile document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported profile schema version {found} (expected {expected})")]
    UnsupportedSchema { found: u32, expected: u32 },
}
