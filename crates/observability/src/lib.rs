//! Tracing and logging setup shared by binaries and test harnesses that embed
//! the user agent model.
//!
//! ```
//! uaprobe_observability::init();
//! tracing::info!(component = "docs", "subscriber installed");
//! ```

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
