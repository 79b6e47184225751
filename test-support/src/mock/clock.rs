//! 可手动拨动的 Mock 时钟

use std::sync::atomic::{AtomicU32, Ordering};

/// Mock 毫秒时钟
#[derive(Debug)]
pub struct MockClock {
    now: AtomicU32,
}

impl MockClock {
    /// 创建指向给定毫秒数的时钟
    pub const fn new(start_ms: u32) -> Self {
        Self {
            now: AtomicU32::new(start_ms),
        }
    }

    /// 当前毫秒数
    pub fn now(&self) -> u32 {
        self.now.load(Ordering::Relaxed)
    }

    /// 设置当前毫秒数
    pub fn set(&self, ms: u32) {
        self.now.store(ms, Ordering::Relaxed);
    }

    /// 向前拨动时钟，32 位回绕
    pub fn advance(&self, ms: u32) {
        let _ = self
            .now
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |t| {
                Some(t.wrapping_add(ms))
            });
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new(0)
    }
}
