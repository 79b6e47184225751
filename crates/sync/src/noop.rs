//! 单线程目标使用的空互斥保护

use core::cell::Cell;

/// 不提供跨线程互斥的"空"原始锁。
///
/// 用于没有并发的目标：加锁与解锁只翻转一个标志位，不会等待。
/// 该类型不是 `Sync`，因此由它保护的数据无法被多个线程共享；
/// 同一线程内的重入加锁会直接 panic，而不是返回两个可变引用。
#[derive(Debug)]
pub struct NoopRawMutex {
    locked: Cell<bool>,
}

impl NoopRawMutex {
    /// 创建一个未加锁的实例。
    pub const fn new() -> Self {
        Self {
            locked: Cell::new(false),
        }
    }
}

impl Default for NoopRawMutex {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl lock_api::RawMutex for NoopRawMutex {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = NoopRawMutex::new();

    type GuardMarker = lock_api::GuardNoSend;

    fn lock(&self) {
        if self.locked.replace(true) {
            panic!("NoopRawMutex: reentrant lock");
        }
    }

    fn try_lock(&self) -> bool {
        !self.locked.replace(true)
    }

    unsafe fn unlock(&self) {
        self.locked.set(false);
    }

    fn is_locked(&self) -> bool {
        self.locked.get()
    }
}
