//! Integration tests for the `log` facade bridge.

#![cfg(feature = "log")]

use std::sync::{Mutex, MutexGuard, Once};

use log::LevelFilter;
use test_support::MockSink;
use wlog::{LogSink, NoClock, Severity};

static INIT: Once = Once::new();
static SERIAL: Mutex<()> = Mutex::new(());

struct TestSink(MockSink);

impl LogSink for TestSink {
    fn write_bytes(&self, bytes: &[u8]) {
        self.0.push(bytes);
    }
}

static TEST_SINK: TestSink = TestSink(MockSink::new());
static CLOCK: NoClock = NoClock;

fn setup() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    INIT.call_once(|| {
        wlog::init(&TEST_SINK, &CLOCK);
        wlog::bridge::init_bridge(LevelFilter::Trace).unwrap();
    });
    output();
    guard
}

fn output() -> String {
    log::logger().flush();
    TEST_SINK.0.take()
}

#[test]
fn test_target_becomes_tag() {
    let _guard = setup();

    log::info!(target: "net", "link up on port {}", 2);

    assert!(output().contains("[INFO][net]: link up on port 2"));
}

#[test]
fn test_trace_is_logged_as_verbose() {
    let _guard = setup();

    log::trace!(target: "sched", "tick");

    assert!(output().contains("[VERBOSE][sched]: tick"));
}

#[test]
fn test_registry_filters_bridged_records() {
    let _guard = setup();
    wlog::set_level("storage", Severity::Error).unwrap();

    log::warn!(target: "storage", "hidden");
    assert!(!log::log_enabled!(target: "storage", log::Level::Warn));
    assert_eq!(output(), "");

    log::error!(target: "storage", "disk failed");
    assert!(output().contains("[ERROR][storage]: disk failed"));
}

#[test]
fn test_excluded_target_is_suppressed() {
    let _guard = setup();
    wlog::exclude_tag("noisy").unwrap();

    log::error!(target: "noisy", "hidden");

    assert_eq!(output(), "");
}
