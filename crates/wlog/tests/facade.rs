//! Integration tests for the global level controls and output path.

use std::sync::{Mutex, MutexGuard};

use wlog::{LogError, LogSink, NoClock, OutputMode, Severity};

static SERIAL: Mutex<()> = Mutex::new(());
static CAPTURE: Mutex<String> = Mutex::new(String::new());

struct Capture;

impl LogSink for Capture {
    fn write_bytes(&self, bytes: &[u8]) {
        let mut out = CAPTURE.lock().unwrap_or_else(|e| e.into_inner());
        out.push_str(&String::from_utf8_lossy(bytes));
    }
}

static SINK: Capture = Capture;
static CLOCK: NoClock = NoClock;

fn setup() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    wlog::init(&SINK, &CLOCK);
    wlog::set_global_level(Severity::Verbose);
    take();
    guard
}

/// Everything written so far, including lines still queued in the ring buffer.
fn take() -> String {
    wlog::flush_buffer();
    std::mem::take(&mut *CAPTURE.lock().unwrap_or_else(|e| e.into_inner()))
}

#[test]
fn test_default_global_level_is_verbose() {
    let _guard = setup();
    assert_eq!(wlog::global_level(), Severity::Verbose);
    assert_eq!(wlog::effective_level("never-set"), Severity::Verbose);
}

#[test]
fn test_global_level_applies_to_unset_tags() {
    let _guard = setup();

    wlog::set_global_level(Severity::Warn);
    assert!(!wlog::log(Severity::Info, "facade", format_args!("hidden")).is_emitted());
    assert!(wlog::log(Severity::Warn, "facade", format_args!("shown")).is_emitted());

    let out = take();
    assert!(!out.contains("hidden"));
    assert!(out.contains("[WARN][facade]: shown"));
}

#[test]
fn test_set_level_overrides_global() {
    let _guard = setup();

    wlog::set_level("main", Severity::Warn).unwrap();
    assert_eq!(wlog::effective_level("main"), Severity::Warn);
    assert!(!wlog::log(Severity::Info, "main", format_args!("below WARN")).is_emitted());
    assert!(wlog::log(Severity::Warn, "main", format_args!("at WARN")).is_emitted());
}

#[test]
fn test_include_unknown_tag_emits_diagnostic() {
    let _guard = setup();

    assert_eq!(wlog::include_tag("never-excluded"), Err(LogError::NotFound));
    assert!(!wlog::is_excluded("never-excluded"));
    assert_eq!(take(), "wlog: tag not found in excluded list\n");
}

#[cfg(not(feature = "ring-only"))]
#[test]
fn test_direct_mode_keeps_ring_empty() {
    let _guard = setup();
    assert_eq!(wlog::global().config().output_mode(), OutputMode::Direct);

    wlog::log(Severity::Error, "ring", format_args!("direct"));
    assert_eq!(wlog::pending_bytes(), 0);
    assert_eq!(wlog::flush_buffer(), 0);
    assert_eq!(wlog::dropped_bytes(), 0);
}

#[cfg(feature = "ring-only")]
#[test]
fn test_ring_only_defers_until_flush() {
    let _guard = setup();
    assert_eq!(wlog::global().config().output_mode(), OutputMode::RingBuffer);

    let emission = wlog::log(Severity::Info, "queued", format_args!("deferred"));
    assert!(emission.loss().is_none());
    assert_eq!(wlog::pending_bytes(), emission.bytes());
    assert!(CAPTURE.lock().unwrap_or_else(|e| e.into_inner()).is_empty());

    assert_eq!(wlog::flush_buffer(), emission.bytes());
    assert_eq!(wlog::pending_bytes(), 0);
    assert!(take().contains("[INFO][queued]: deferred"));
}

#[cfg(all(feature = "ring-only", not(feature = "buffer-overwrite")))]
#[test]
fn test_ring_only_drops_newest_when_full() {
    let _guard = setup();
    let before = wlog::dropped_bytes();

    for i in 0..200 {
        wlog::log(Severity::Info, "fill", format_args!("{i:04}"));
    }

    assert_eq!(wlog::pending_bytes(), wlog::LOG_BUFFER_SIZE - 1);
    assert!(wlog::dropped_bytes() > before);
    let out = take();
    assert!(out.contains("[INFO][fill]: 0000"));
    assert!(!out.contains("[INFO][fill]: 0199"));
}

#[cfg(all(feature = "ring-only", feature = "buffer-overwrite"))]
#[test]
fn test_ring_only_overwrites_oldest_when_full() {
    let _guard = setup();
    let before = wlog::dropped_bytes();

    for i in 0..200 {
        wlog::log(Severity::Info, "fill", format_args!("{i:04}"));
    }

    assert_eq!(wlog::pending_bytes(), wlog::LOG_BUFFER_SIZE - 1);
    assert!(wlog::dropped_bytes() > before);
    let out = take();
    assert!(!out.contains("[INFO][fill]: 0000"));
    assert!(out.contains("[INFO][fill]: 0199\n") || out.contains("[INFO][fill]: 0199\x1b[0m\n"));
}
