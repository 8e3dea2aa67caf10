use thiserror::Error;

/// Errors returned by the quote pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A field the engine cannot price without was absent from the request.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A catalogue name did not match any known option.
    #[error("unknown {kind}: \"{value}\"")]
    UnknownOption { kind: &'static str, value: String },
}
