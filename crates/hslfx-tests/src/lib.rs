//! Integration tests for hslfx crates.
//!
//! End-to-end checks that images survive load -> transform -> save -> load
//! with the transform's effect intact.
