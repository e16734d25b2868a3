//! Logging utilities
//!
//! Standardized `log` messages for table IO and recoverable warnings.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_table_read, log_table_write, log_table_written, log_warning};
