//! Gateway integration tests
//!
//! Tests for BridgeService operations against a scripted process runner.

mod fallback;
