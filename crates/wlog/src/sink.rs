//! 外部能力接口：输出端与时钟
//!
//! 日志核心不区分平台，具体的串口、控制台或时钟实现由使用方注入。

/// 日志输出端
///
/// 实现此 trait 以提供日志的输出能力（控制台、串口等）。
/// 写入被视为同步且足够快；失败对日志器不可见。
pub trait LogSink {
    /// 写入一段字节
    ///
    /// 排空环形缓冲区时以单字节粒度调用，多字节 UTF-8 字符可能被拆开。
    fn write_bytes(&self, bytes: &[u8]);

    /// 写入字符串
    fn write_str(&self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// 初始化输出端（如串口），由日志器的 `init` 调用
    fn init(&self) {}
}

/// 毫秒时钟
pub trait Clock {
    /// 自任意单调起点以来的毫秒数
    ///
    /// 在 32 位边界回绕，这是已知且接受的限制。
    fn now_ms(&self) -> u32;
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn write_bytes(&self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }

    fn write_str(&self, s: &str) {
        (**self).write_str(s);
    }

    fn init(&self) {
        (**self).init();
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// 丢弃所有输出的输出端
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn write_bytes(&self, _bytes: &[u8]) {}
}

/// 始终返回 0 的时钟，用于没有时间源的目标
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClock;

impl Clock for NoClock {
    fn now_ms(&self) -> u32 {
        0
    }
}
