//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Fake drag host and a headless editor harness
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests
