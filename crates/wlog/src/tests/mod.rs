// Unit tests for wlog.
//
// Each test builds its own `Logger` around a `MockSink`/`MockClock` pair, so tests stay
// independent of the global instance and can run in parallel.

extern crate alloc;
extern crate std;

use crate::config::{LogConfig, LogFlags};
use crate::level::Severity;
use crate::logger::{Emission, Logger};
use crate::sink::{Clock, LogSink};
use crate::error::{LogError, Table};
use alloc::string::String;
use alloc::vec::Vec;
use sync::RawSpinLock;
use test_support::{MockClock, MockSink};

impl LogSink for MockSink {
    fn write_bytes(&self, bytes: &[u8]) {
        self.push(bytes);
    }

    fn init(&self) {
        self.mark_init();
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now()
    }
}

type TestLogger<const N: usize> = Logger<RawSpinLock, MockSink, MockClock, N>;

/// Direct-output logger without colors, so rendered lines can be compared verbatim.
fn direct_logger() -> TestLogger<64> {
    with_flags(LogFlags::DIAGNOSTICS)
}

fn with_flags<const N: usize>(flags: LogFlags) -> TestLogger<N> {
    Logger::new(
        LogConfig::new(flags, Severity::Verbose),
        MockSink::new(),
        MockClock::new(0),
    )
}

/// Test-only logging helper (mirrors production macro behavior, but targets a local `Logger`).
macro_rules! test_log {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)*) => {
        $logger.log($level, $tag, format_args!($($arg)*))
    };
}

mod format;
mod ring;
