//! 嵌入式日志库
//!
//! 该 crate 为资源受限的目标提供一个精简的日志设施：按标签过滤级别、
//! 格式化输出，并在没有同步输出端时使用**固定容量的环形缓冲区**暂存日志。
//!
//! # 组件
//!
//! - [`registry`] - 标签注册表（级别覆盖与排除集合）
//! - [`format`] - 日志行、十六进制行与内存转储的格式化
//! - [`ring`] - 输出端不可用时使用的字节环形缓冲区
//! - [`logger`] - 日志器核心：过滤、格式化、写出
//! - [`config`] - 配置常量与运行时开关
//! - [`sink`] - 输出端与时钟的能力接口
//! - [`macros`] - 面向用户的日志宏 (`log_info!`, `log_err!`, 等)
//!
//! # 设计概览
//!
//! ## 两种输出路径
//!
//! 1. **直接输出**：通过过滤的日志行在临界区内同步写入输出端。
//! 2. **环形缓冲区**：配置为 ring-only 时，日志行逐字节写入缓冲区，
//!    直到宿主调用 [`flush_buffer`] 才按原顺序转发到输出端。
//!
//! ## 固定内存
//!
//! - **没有动态内存分配**：标签表、缓冲区和格式化缓冲区都是编译期已知大小。
//! - **截断而非增长**：超长的正文或标签被截断，表满时插入失败而不是淘汰。
//! - **尽力而为**：所有错误都不会中断调用方，只通过返回值和诊断行报告。
//!
//! # 架构解耦
//!
//! 日志系统通过 trait 抽象与平台组件解耦：
//!
//! - **LogSink**：提供输出能力（控制台、串口）
//! - **Clock**：提供毫秒时间戳
//! - **lock_api::RawMutex**：提供互斥保护（`sync::RawSpinLock` 或 `sync::NoopRawMutex`）
//!
//! 核心逻辑位于可独立实例化的 [`Logger`]。本模块的自由函数操作一个全局实例，
//! 使用方需要在启动时通过 [`init`] 注册输出端与时钟。

#![no_std]

#[cfg(feature = "log")]
pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod macros;
mod mirror;
pub mod registry;
pub mod ring;
pub mod sink;
pub mod tag;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_GLOBAL_LEVEL, LOG_BUFFER_SIZE, LogConfig, LogFlags, MAX_EXCLUDED_TAGS, MAX_LEVEL_TAGS,
    MAX_LINE_LEN, MAX_MESSAGE_LEN, MAX_TAG_LEN, OutputMode,
};
pub use error::{LogError, Table};
pub use level::Severity;
pub use logger::{Emission, Logger};
pub use ring::{OverflowPolicy, RingBuffer};
pub use sink::{Clock, LogSink, NoClock, NullSink};
pub use tag::Tag;

use core::fmt;
use sync::{RawSpinLock, SpinLock};

// ========== 全局注册机制 ==========

static LOG_SINK: SpinLock<Option<&'static (dyn LogSink + Sync)>> =
    SpinLock::const_new(RawSpinLock::new(), None);
static LOG_CLOCK: SpinLock<Option<&'static (dyn Clock + Sync)>> =
    SpinLock::const_new(RawSpinLock::new(), None);

/// 转发到已注册输出端的输出端；未注册时丢弃输出
pub struct RegisteredSink;

impl LogSink for RegisteredSink {
    fn write_bytes(&self, bytes: &[u8]) {
        let sink = *LOG_SINK.lock();
        if let Some(sink) = sink {
            sink.write_bytes(bytes);
        }
    }

    fn init(&self) {
        let sink = *LOG_SINK.lock();
        if let Some(sink) = sink {
            sink.init();
        }
    }
}

/// 读取已注册时钟的时钟；未注册时返回 0
pub struct RegisteredClock;

impl Clock for RegisteredClock {
    fn now_ms(&self) -> u32 {
        let clock = *LOG_CLOCK.lock();
        clock.map_or(0, |c| c.now_ms())
    }
}

// ========== 全局单例 ==========

/// 全局日志器类型
pub type GlobalLogger = Logger<RawSpinLock, RegisteredSink, RegisteredClock, LOG_BUFFER_SIZE>;

/// 全局日志器实例
///
/// 使用 const fn 在编译时初始化，零运行时开销。
/// 所有日志宏和公共 API 都委托给此实例。
static GLOBAL_LOG: GlobalLogger =
    Logger::new(LogConfig::from_features(), RegisteredSink, RegisteredClock);

/// 全局日志器
pub fn global() -> &'static GlobalLogger {
    &GLOBAL_LOG
}

// ========== 公共 API (精简封装) ==========

/// 注册输出端与时钟，并初始化输出端
///
/// 应在任何日志调用之前调用；重复调用会替换之前注册的实现。
pub fn init(sink: &'static (dyn LogSink + Sync), clock: &'static (dyn Clock + Sync)) {
    *LOG_SINK.lock() = Some(sink);
    *LOG_CLOCK.lock() = Some(clock);
    GLOBAL_LOG.init();
}

/// 记录一条格式化日志
pub fn log(severity: Severity, tag: &str, args: fmt::Arguments<'_>) -> Emission {
    GLOBAL_LOG.log(severity, tag, args)
}

/// 以十六进制单行记录字节
pub fn log_hex(severity: Severity, tag: &str, bytes: &[u8]) -> Emission {
    GLOBAL_LOG.log_hex(severity, tag, bytes)
}

/// 以内存转储形式记录字节
pub fn log_dump(severity: Severity, tag: &str, bytes: &[u8]) -> Emission {
    GLOBAL_LOG.log_dump(severity, tag, bytes)
}

/// 排除标签
pub fn exclude_tag(tag: &str) -> Result<(), LogError> {
    GLOBAL_LOG.exclude_tag(tag)
}

/// 恢复被排除的标签
pub fn include_tag(tag: &str) -> Result<(), LogError> {
    GLOBAL_LOG.include_tag(tag)
}

/// 设置标签的级别覆盖
pub fn set_level(tag: &str, level: Severity) -> Result<(), LogError> {
    GLOBAL_LOG.set_level(tag, level)
}

/// 设置全局默认级别
pub fn set_global_level(level: Severity) {
    GLOBAL_LOG.set_global_level(level);
}

/// 获取全局默认级别
pub fn global_level() -> Severity {
    GLOBAL_LOG.global_level()
}

/// 获取标签的有效级别
pub fn effective_level(tag: &str) -> Severity {
    GLOBAL_LOG.effective_level(tag)
}

/// 标签是否被排除
pub fn is_excluded(tag: &str) -> bool {
    GLOBAL_LOG.is_excluded(tag)
}

/// 检查该级别、该标签的日志是否会输出（由宏调用）
#[doc(hidden)]
pub fn is_enabled(severity: Severity, tag: &str) -> bool {
    GLOBAL_LOG.is_enabled(severity, tag)
}

/// 将环形缓冲区中的日志转发到输出端
pub fn flush_buffer() -> usize {
    GLOBAL_LOG.flush_buffer()
}

/// 环形缓冲区中尚未排空的字节数
pub fn pending_bytes() -> usize {
    GLOBAL_LOG.pending_bytes()
}

/// 环形缓冲区因溢出丢弃的字节总数
pub fn dropped_bytes() -> usize {
    GLOBAL_LOG.dropped_bytes()
}
