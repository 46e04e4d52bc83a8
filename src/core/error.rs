use thiserror::Error;

/// Errors raised when building or decoding accounting records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KontoError {
    /// The string is not one of the four invoice-type codes.
    #[error("unknown invoice type code: {0:?}")]
    UnknownInvoiceType(String),

    /// A tax group was given an empty or blank name.
    #[error("tax group name must not be empty")]
    EmptyTaxGroupName,

    /// Amount arithmetic left the `Decimal` range.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(String),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for KontoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
