//! Single test binary entry point.
//!
//! Structure:
//! - integration: Multi-component workflow tests (viewer + store, replay)
//! - unit: Single-component unit tests
