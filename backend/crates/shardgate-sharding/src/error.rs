use thiserror::Error;

/// Result type for vindex operations.
pub type Result<T> = std::result::Result<T, VindexError>;

/// Errors raised while constructing or evaluating a vindex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VindexError {
    #[error("vindex '{vindex}': missing parameter '{param}'")]
    MissingParam { vindex: String, param: &'static str },

    #[error("vindex '{vindex}': invalid value '{value}' for parameter '{param}'")]
    InvalidParam {
        vindex: String,
        param: &'static str,
        value: String,
    },

    #[error("vindex '{vindex}' of kind {kind} cannot be used here: {reason}")]
    UnsupportedKind {
        vindex: String,
        kind: &'static str,
        reason: &'static str,
    },

    #[error("vindex '{0}' maps values through its backing table and needs a lookup query")]
    RequiresLookup(String),

    #[error("vindex '{vindex}': cannot map value: {reason}")]
    InvalidValue { vindex: String, reason: String },
}
