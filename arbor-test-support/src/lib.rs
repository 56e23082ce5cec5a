//! Shared test utilities used across arbor crates.
//!
//! [`crate::tracing::RecordingLayer`] captures spans and events so tests can assert
//! instrumentation, and [`crate::ci::property_test_profile`] reads the environment
//! overrides that tune property-test runs.

pub mod ci;
pub mod tracing;
