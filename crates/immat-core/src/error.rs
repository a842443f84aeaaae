use thiserror::Error;

/// Failure to parse a scheme or category name.
///
/// Validation itself never fails; only names typed by a user can be wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown plate scheme: {0}")]
    UnknownScheme(String),
    #[error("unknown plate category: {0}")]
    UnknownCategory(String),
}
