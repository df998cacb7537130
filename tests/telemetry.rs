//! Tracing subscriber installation.
//!
//! Runs in its own test binary because the global subscriber can only be set
//! once per process.

use tallyo::telemetry::{TelemetryError, init_tracing};

#[test]
fn subscriber_installs_once() {
    init_tracing("warn").expect("first installation should succeed");

    let second = init_tracing("warn");

    assert!(matches!(second, Err(TelemetryError::AlreadyInitialised)));
}
