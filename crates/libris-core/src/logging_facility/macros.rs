//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use libris_core::log_op_start;
/// log_op_start!("add_book");
/// log_op_start!("add_book", book_id = 42);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = libris_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = libris_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use libris_core::log_op_end;
/// log_op_end!("add_book", duration_ms = 42);
/// log_op_end!("find_authors", duration_ms = 3, result_len = 7);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = libris_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = libris_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use libris_core::{log_op_error, errors::LibrisError};
/// let err = LibrisError::BookAbsent;
/// log_op_error!("add_book", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let error: &$crate::errors::LibrisError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = libris_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = error.code(),
            err.msg = %error,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let error: &$crate::errors::LibrisError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = libris_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = error.code(),
            err.msg = %error,
            $($field)*
        );
    }};
}
