//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_BOOK_ID: &str = "book_id";
pub const FIELD_CLIENT_ID: &str = "client_id";
pub const FIELD_ORDER_ID: &str = "order_id";

// Collection sizes
pub const FIELD_RESULT_LEN: &str = "result_len";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MSG: &str = "err.msg";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
