//! Shared test utilities: a recording messenger and sample data
#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for tests, once per test binary
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}
