//! 日志器核心实现
//!
//! 该模块将标签注册表、环形缓冲区和配置封装到一个单独的 `Logger` 结构体中，
//! 既可以作为全局单例使用，也可以独立实例化用于测试。
//!
//! # 单次日志调用的流程
//!
//! 1. **过滤**：标签被排除，或级别比标签的有效级别更详细时直接返回。
//!    先在无锁镜像上判断，无法确定时再加锁精确检查
//! 2. **格式化**：在保护下渲染日志行，保证不同线程的日志行不会交错
//! 3. **写出**：直接写入输出端，或写入环形缓冲区等待 [`Logger::flush_buffer`]
//!
//! 输出路径由配置静态决定，不按调用动态选择。

use crate::config::{LogConfig, OutputMode};
use crate::error::LogError;
use crate::format;
use crate::level::Severity;
use crate::mirror::FilterMirror;
use crate::registry::TagRegistry;
use crate::ring::RingBuffer;
use crate::sink::{Clock, LogSink};
use core::fmt::{self, Write};
use lock_api::{Mutex, RawMutex};

/// 一次日志调用的结果
///
/// 这是调用方唯一可见的信号：调用方可以据此发现丢失，但不必处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// 被标签排除或级别过滤
    Suppressed,
    /// 已同步写入输出端
    Written {
        /// 写入的字节数
        bytes: usize,
        /// 正文是否被截断
        truncated: bool,
    },
    /// 已写入环形缓冲区
    Queued {
        /// 进入缓冲区的字节数
        accepted: usize,
        /// 因缓冲区满而未写入的字节数
        dropped: usize,
        /// 正文是否被截断
        truncated: bool,
    },
}

impl Emission {
    /// 是否产生了输出
    pub fn is_emitted(&self) -> bool {
        !matches!(self, Emission::Suppressed)
    }

    /// 输出或排队的字节数
    pub fn bytes(&self) -> usize {
        match *self {
            Emission::Suppressed => 0,
            Emission::Written { bytes, .. } => bytes,
            Emission::Queued { accepted, .. } => accepted,
        }
    }

    /// 将有损结果转换为对应的错误，无损时返回 `None`
    pub fn loss(&self) -> Option<LogError> {
        match *self {
            Emission::Queued {
                accepted, dropped, ..
            } if dropped > 0 => Some(LogError::Overflowed {
                accepted,
                requested: accepted + dropped,
            }),
            Emission::Written {
                truncated: true, ..
            }
            | Emission::Queued {
                truncated: true, ..
            } => Some(LogError::Truncated),
            _ => None,
        }
    }
}

/// 受保护的可变状态
struct LoggerState<const N: usize> {
    registry: TagRegistry,
    ring: RingBuffer<N>,
}

/// 核心日志器
///
/// 封装了标签注册表、环形缓冲区、配置以及注入的输出端与时钟。
///
/// # 类型参数
///
/// * `R` - 互斥保护，`sync::RawSpinLock` 表示启用保护，`sync::NoopRawMutex` 表示单线程
/// * `S` - 输出端
/// * `C` - 时钟
/// * `N` - 环形缓冲区大小（字节）
///
/// # 线程安全性
///
/// 所有修改状态的操作（日志、级别设置、排除/恢复、排空）都在同一把锁下完成，
/// 并在每条返回路径上释放。被排除或被级别过滤的日志在加锁之前就被拒绝，
/// 不会与其他线程竞争这把锁。格式化与写出在同一个临界区内，因此不同线程的
/// 日志行不会在字节级别交错。锁不可重入：输出端在 `write_bytes` 中通过同一日志器
/// 输出会死锁，被过滤的调用在加锁前返回，不受影响。
pub struct Logger<R: RawMutex, S, C, const N: usize> {
    state: Mutex<R, LoggerState<N>>,
    /// 过滤表的无锁副本，用于加锁前的快速拒绝
    filter: FilterMirror,
    config: LogConfig,
    sink: S,
    clock: C,
}

impl<R: RawMutex, S: LogSink, C: Clock, const N: usize> Logger<R, S, C, N> {
    /// 创建新的日志器
    ///
    /// 这是一个 `const fn`，可以在编译时进行评估，从而用于 `static`。
    ///
    /// # 示例
    ///
    /// ```rust
    /// use sync::RawSpinLock;
    /// use wlog::{LogConfig, Logger, NoClock, NullSink};
    ///
    /// static LOG: Logger<RawSpinLock, NullSink, NoClock, 256> =
    ///     Logger::new(LogConfig::from_features(), NullSink, NoClock);
    /// let _ = &LOG;
    /// ```
    pub const fn new(config: LogConfig, sink: S, clock: C) -> Self {
        Self {
            state: Mutex::const_new(
                R::INIT,
                LoggerState {
                    registry: TagRegistry::new(config.default_level()),
                    ring: RingBuffer::new(config.overflow_policy()),
                },
            ),
            filter: FilterMirror::new(config.default_level()),
            config,
            sink,
            clock,
        }
    }

    /// 初始化输出端（例如串口）
    pub fn init(&self) {
        self.sink.init();
    }

    /// 核心日志记录实现
    ///
    /// # 参数
    ///
    /// * `severity` - 消息级别
    /// * `tag` - 日志来源标签
    /// * `args` - 来自 `format_args!` 的格式化参数
    pub fn log(&self, severity: Severity, tag: &str, args: fmt::Arguments<'_>) -> Emission {
        if self.filter.rejects(severity, tag) {
            return Emission::Suppressed;
        }
        let mut state = self.state.lock();
        if !state.registry.allows(severity, tag) {
            return Emission::Suppressed;
        }

        let line = format::render_line(
            self.config.colors(),
            self.clock.now_ms(),
            severity,
            tag,
            args,
        );
        let mut out = self.output(&mut state.ring);
        out.write_bytes(line.as_bytes());
        out.finish(line.is_truncated())
    }

    /// 以单行十六进制形式记录字节
    pub fn log_hex(&self, severity: Severity, tag: &str, bytes: &[u8]) -> Emission {
        if self.filter.rejects(severity, tag) {
            return Emission::Suppressed;
        }
        let mut state = self.state.lock();
        if !state.registry.allows(severity, tag) {
            return Emission::Suppressed;
        }

        let elapsed = self.clock.now_ms();
        let mut out = self.output(&mut state.ring);
        let _ = format::render_hex_line(&mut out, elapsed, tag, bytes);
        out.finish(false)
    }

    /// 以内存转储形式记录字节
    pub fn log_dump(&self, severity: Severity, tag: &str, bytes: &[u8]) -> Emission {
        if self.filter.rejects(severity, tag) {
            return Emission::Suppressed;
        }
        let mut state = self.state.lock();
        if !state.registry.allows(severity, tag) {
            return Emission::Suppressed;
        }

        let elapsed = self.clock.now_ms();
        let mut out = self.output(&mut state.ring);
        let _ = format::render_dump(&mut out, elapsed, tag, bytes);
        out.finish(false)
    }

    /// 排除标签：之后该标签的所有日志都被抑制
    pub fn exclude_tag(&self, tag: &str) -> Result<(), LogError> {
        let mut state = self.state.lock();
        let result = state.registry.exclude(tag);
        self.filter.publish(&state.registry);
        self.report(&mut state, result)
    }

    /// 恢复被排除的标签
    pub fn include_tag(&self, tag: &str) -> Result<(), LogError> {
        let mut state = self.state.lock();
        let result = state.registry.include(tag);
        self.filter.publish(&state.registry);
        self.report(&mut state, result)
    }

    /// 设置标签的级别覆盖
    pub fn set_level(&self, tag: &str, level: Severity) -> Result<(), LogError> {
        let mut state = self.state.lock();
        let result = state.registry.set_level(tag, level);
        self.filter.publish(&state.registry);
        self.report(&mut state, result)
    }

    /// 设置全局默认级别（未设置覆盖的标签使用该级别）
    pub fn set_global_level(&self, level: Severity) {
        let mut state = self.state.lock();
        state.registry.set_global_level(level);
        self.filter.publish(&state.registry);
    }

    /// 获取全局默认级别
    pub fn global_level(&self) -> Severity {
        self.state.lock().registry.global_level()
    }

    /// 获取标签的有效级别
    pub fn effective_level(&self, tag: &str) -> Severity {
        self.state.lock().registry.effective_level(tag)
    }

    /// 标签是否被排除
    pub fn is_excluded(&self, tag: &str) -> bool {
        self.state.lock().registry.is_excluded(tag)
    }

    /// 该级别、该标签的消息当前是否会输出
    pub fn is_enabled(&self, severity: Severity, tag: &str) -> bool {
        !self.filter.rejects(severity, tag) && self.state.lock().registry.allows(severity, tag)
    }

    /// 将环形缓冲区中的字节按顺序转发到输出端，返回转发的字节数
    ///
    /// 由宿主在可以输出时调用，从不自动触发。
    pub fn flush_buffer(&self) -> usize {
        let mut state = self.state.lock();
        state.ring.drain_to(&self.sink)
    }

    /// 环形缓冲区中尚未排空的字节数
    pub fn pending_bytes(&self) -> usize {
        self.state.lock().ring.len()
    }

    /// 环形缓冲区因溢出丢弃的字节总数
    pub fn dropped_bytes(&self) -> usize {
        self.state.lock().ring.dropped()
    }

    /// 日志器配置
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// 注入的输出端
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 注入的时钟
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// 注册表的副本，供测试检查内部表
    #[cfg(test)]
    pub(crate) fn registry_snapshot(&self) -> TagRegistry {
        self.state.lock().registry.clone()
    }

    // ========== 内部辅助函数 ==========

    fn output<'a>(&'a self, ring: &'a mut RingBuffer<N>) -> Output<'a, S, N> {
        Output {
            sink: &self.sink,
            ring,
            mode: self.config.output_mode(),
            requested: 0,
            accepted: 0,
        }
    }

    /// 通过当前输出路径尽力报告容量不足、标签不存在等情况
    fn report(
        &self,
        state: &mut LoggerState<N>,
        result: Result<(), LogError>,
    ) -> Result<(), LogError> {
        if let Err(err) = result {
            if self.config.diagnostics() {
                let mut out = self.output(&mut state.ring);
                let _ = writeln!(out, "wlog: {err}");
            }
        }
        result
    }
}

/// 单次调用的输出路径，统计请求与实际写出的字节数
struct Output<'a, S, const N: usize> {
    sink: &'a S,
    ring: &'a mut RingBuffer<N>,
    mode: OutputMode,
    requested: usize,
    accepted: usize,
}

impl<S: LogSink, const N: usize> Output<'_, S, N> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.requested += bytes.len();
        match self.mode {
            OutputMode::Direct => {
                self.sink.write_bytes(bytes);
                self.accepted += bytes.len();
            }
            OutputMode::RingBuffer => {
                self.accepted += self.ring.try_enqueue(bytes);
            }
        }
    }

    fn finish(self, truncated: bool) -> Emission {
        match self.mode {
            OutputMode::Direct => Emission::Written {
                bytes: self.accepted,
                truncated,
            },
            OutputMode::RingBuffer => Emission::Queued {
                accepted: self.accepted,
                dropped: self.requested - self.accepted,
                truncated,
            },
        }
    }
}

impl<S: LogSink, const N: usize> fmt::Write for Output<'_, S, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
