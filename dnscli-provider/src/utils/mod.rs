//! Utility modules.

/// Truncation and masking for anything that reaches a log line.
pub mod log_sanitizer;
