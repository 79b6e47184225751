//! 记录所有写入字节的 Mock 输出端

use std::string::String;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec::Vec;

/// Mock 输出端
///
/// 把每次写入追加到内部缓冲区，并统计写入调用次数与初始化次数。
#[derive(Debug)]
pub struct MockSink {
    data: Mutex<Vec<u8>>,
    writes: AtomicUsize,
    inits: AtomicUsize,
}

impl MockSink {
    /// 创建空的输出端，可用于 `static`
    pub const fn new() -> Self {
        Self {
            data: Mutex::new(Vec::new()),
            writes: AtomicUsize::new(0),
            inits: AtomicUsize::new(0),
        }
    }

    /// 追加一段字节
    pub fn push(&self, bytes: &[u8]) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.lock().extend_from_slice(bytes);
    }

    /// 记录一次初始化调用
    pub fn mark_init(&self) {
        self.inits.fetch_add(1, Ordering::Relaxed);
    }

    /// 目前收到的全部字节
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// 以字符串形式返回内容（非法 UTF-8 会被替换）
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// 取出内容并清空
    pub fn take(&self) -> String {
        let bytes = core::mem::take(&mut *self.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// 写入调用次数
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    /// 初始化调用次数
    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::Relaxed)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        // A panicking test must not poison the sink for the others.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}
