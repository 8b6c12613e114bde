/// Error type for beacon-locate operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BeaconLocateError {
    /// A position field is non-finite or outside its documented bounds.
    Range { field: &'static str, value: f64 },
    /// The identifier does not have the expected shape, or a data field is malformed.
    Format { field: &'static str, reason: String },
    /// JSON parsing or serialization error.
    Json(String),
}

impl std::fmt::Display for BeaconLocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeaconLocateError::Range { field, value } => {
                write!(f, "Range error: {} out of range: {}", field, value)
            }
            BeaconLocateError::Format { field, reason } => {
                write!(f, "Format error in {}: {}", field, reason)
            }
            BeaconLocateError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for BeaconLocateError {}

impl From<serde_json::Error> for BeaconLocateError {
    fn from(e: serde_json::Error) -> Self {
        BeaconLocateError::Json(e.to_string())
    }
}
