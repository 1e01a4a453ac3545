//! Tests for the benchgraph tracing setup.

use std::sync::Mutex;

use benchgraph_core::tracing::init_tracing;

/// Serializes tests that touch BENCHGRAPH_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_benchgraph_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("BENCHGRAPH_LOG", "debug");
    init_tracing();
    std::env::remove_var("BENCHGRAPH_LOG");
}

#[test]
fn test_per_module_filtering() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(
        "BENCHGRAPH_LOG",
        "benchgraph_series::assembler=debug,benchgraph_core=warn",
    );
    init_tracing();
    std::env::remove_var("BENCHGRAPH_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("BENCHGRAPH_LOG", "not a [valid filter");
    init_tracing();
    std::env::remove_var("BENCHGRAPH_LOG");
}
