//! 错误类型
//!
//! 所有错误都不致命：触发它们的操作要么不产生效果，要么只产生部分效果，
//! 调用方可以忽略返回值而不影响自身流程。

use core::fmt;

/// 容量受限的表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// 标签级别覆盖表
    LevelOverrides,
    /// 排除标签集合
    ExcludedTags,
}

/// 日志操作的非致命错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogError {
    /// 表已满，插入被拒绝（不会淘汰已有条目）
    CapacityExceeded {
        /// 已满的表
        table: Table,
    },
    /// 要恢复的标签不在排除集合中
    NotFound,
    /// 内容超出固定工作缓冲区，已截断
    Truncated,
    /// 环形缓冲区已满，只写入了部分字节
    Overflowed {
        /// 实际写入的字节数
        accepted: usize,
        /// 请求写入的字节数
        requested: usize,
    },
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::LevelOverrides => f.write_str("log level list"),
            Table::ExcludedTags => f.write_str("excluded tag list"),
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::CapacityExceeded { table } => write!(f, "{table} is full"),
            LogError::NotFound => f.write_str("tag not found in excluded list"),
            LogError::Truncated => f.write_str("message truncated"),
            LogError::Overflowed {
                accepted,
                requested,
            } => write!(
                f,
                "ring buffer overflow: {accepted} of {requested} bytes queued"
            ),
        }
    }
}
