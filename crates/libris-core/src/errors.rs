use thiserror::Error;

/// Result type alias using LibrisError
pub type Result<T> = std::result::Result<T, LibrisError>;

/// Error taxonomy for catalog operations
///
/// Absent-record rejection is the only validated precondition in the kernel:
/// the add operations accept possibly-absent records from the external
/// collaborator and refuse `None`. Queries and sorts are total and never
/// produce an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibrisError {
    // ===== Add Validation Errors =====
    /// `add_book` was handed no record
    #[error("Cannot add book: record is absent")]
    BookAbsent,

    /// `add_order` was handed no record
    #[error("Cannot add order: record is absent")]
    OrderAbsent,

    /// `add_client` was handed no record
    #[error("Cannot add client: record is absent")]
    ClientAbsent,
}

impl LibrisError {
    /// Get the stable error code for this error
    ///
    /// Codes are the machine-facing classification used by structured
    /// logging and external callers; display strings may change, codes
    /// may not. All absent-record rejections share one code since they
    /// are the same kind of failure.
    pub fn code(&self) -> &'static str {
        match self {
            LibrisError::BookAbsent
            | LibrisError::OrderAbsent
            | LibrisError::ClientAbsent => "ERR_INVALID_ARGUMENT",
        }
    }
}
