//! Cross-cutting utilities.
//!
//! - `logging`: Tracing and logging initialization.

pub mod logging;
