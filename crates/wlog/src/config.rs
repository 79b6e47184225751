//! 配置常量与运行时配置

use crate::level::Severity;
use crate::ring::OverflowPolicy;
use bitflags::bitflags;

/// 全局环形缓冲区大小（字节）
///
/// 由于 `head == tail` 表示空，可用容量为该值减一。
pub const LOG_BUFFER_SIZE: usize = 1024;

/// 标签的最大字节数，超出部分在字符边界处截断
pub const MAX_TAG_LEN: usize = 19;

/// 排除集合的最大标签数
pub const MAX_EXCLUDED_TAGS: usize = 10;

/// 级别覆盖表的最大标签数
pub const MAX_LEVEL_TAGS: usize = 10;

/// 单条消息正文的工作缓冲区大小，超出部分被截断
pub const MAX_MESSAGE_LEN: usize = 256;

/// 完整日志行（颜色、时间戳、级别、标签、正文）的工作缓冲区大小
pub const MAX_LINE_LEN: usize = 512;

/// 未设置覆盖的标签使用的默认级别
pub const DEFAULT_GLOBAL_LEVEL: Severity = Severity::Verbose;

bitflags! {
    /// 日志器行为开关
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogFlags: u8 {
        /// 在日志行中输出 ANSI 颜色码
        const COLORS = 1 << 0;
        /// 环形缓冲区满时覆盖最旧字节
        const OVERWRITE_OLDEST = 1 << 1;
        /// 不直接写输出端，只写入环形缓冲区
        const RING_ONLY = 1 << 2;
        /// 容量不足、标签不存在等情况输出一行诊断信息
        const DIAGNOSTICS = 1 << 3;
    }
}

/// 输出路径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// 同步写入输出端
    Direct,
    /// 写入环形缓冲区，由 `flush_buffer` 转发
    RingBuffer,
}

/// 日志器配置
///
/// 在构造时确定，之后不再改变。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    flags: LogFlags,
    default_level: Severity,
}

impl LogConfig {
    /// 使用给定开关和默认级别创建配置
    pub const fn new(flags: LogFlags, default_level: Severity) -> Self {
        Self {
            flags,
            default_level,
        }
    }

    /// 根据 Cargo feature 生成配置，供全局日志器使用
    pub const fn from_features() -> Self {
        let mut bits = LogFlags::DIAGNOSTICS.bits();
        if cfg!(feature = "colors") {
            bits |= LogFlags::COLORS.bits();
        }
        if cfg!(feature = "buffer-overwrite") {
            bits |= LogFlags::OVERWRITE_OLDEST.bits();
        }
        if cfg!(feature = "ring-only") {
            bits |= LogFlags::RING_ONLY.bits();
        }
        Self::new(LogFlags::from_bits_truncate(bits), DEFAULT_GLOBAL_LEVEL)
    }

    /// 替换开关
    pub const fn with_flags(mut self, flags: LogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// 替换默认级别
    pub const fn with_default_level(mut self, level: Severity) -> Self {
        self.default_level = level;
        self
    }

    /// 当前开关
    pub const fn flags(&self) -> LogFlags {
        self.flags
    }

    /// 默认级别
    pub const fn default_level(&self) -> Severity {
        self.default_level
    }

    /// 是否输出颜色码
    pub const fn colors(&self) -> bool {
        self.flags.contains(LogFlags::COLORS)
    }

    /// 是否输出诊断信息
    pub const fn diagnostics(&self) -> bool {
        self.flags.contains(LogFlags::DIAGNOSTICS)
    }

    /// 环形缓冲区的溢出策略
    pub const fn overflow_policy(&self) -> OverflowPolicy {
        if self.flags.contains(LogFlags::OVERWRITE_OLDEST) {
            OverflowPolicy::OverwriteOldest
        } else {
            OverflowPolicy::DropNewest
        }
    }

    /// 输出路径
    pub const fn output_mode(&self) -> OutputMode {
        if self.flags.contains(LogFlags::RING_ONLY) {
            OutputMode::RingBuffer
        } else {
            OutputMode::Direct
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_features()
    }
}
