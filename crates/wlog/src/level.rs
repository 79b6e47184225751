//! 日志级别定义

use core::fmt;

/// 日志级别
///
/// 数值越小越严重。某条消息仅当其级别数值不大于标签的有效级别时输出。
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// 不输出任何日志（作为阈值使用）
    None = 0,
    /// 错误
    Error = 1,
    /// 警告
    Warn = 2,
    /// 信息
    Info = 3,
    /// 调试
    Debug = 4,
    /// 详细
    Verbose = 5,
}

/// ANSI 颜色复位码
pub const RESET_COLOR: &str = "\x1b[0m";

impl Severity {
    /// 全部级别，从最严重到最详细
    pub const ALL: [Severity; 6] = [
        Severity::None,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
    ];

    /// 日志行中的级别标签
    ///
    /// `None` 只应作为阈值使用，作为消息级别时标为 `UNKNOWN`。
    pub const fn label(&self) -> &'static str {
        match self {
            Severity::None => "UNKNOWN",
            _ => self.as_str(),
        }
    }

    /// 级别名
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
        }
    }

    /// 级别对应的 ANSI 颜色码
    pub const fn color_code(&self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warn => "\x1b[33m",
            Severity::Info => "\x1b[32m",
            Severity::Debug => "\x1b[34m",
            Severity::None | Severity::Verbose => "\x1b[37m",
        }
    }

    /// 从数值还原级别，越界值视为 `Verbose`
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::None,
            1 => Severity::Error,
            2 => Severity::Warn,
            3 => Severity::Info,
            4 => Severity::Debug,
            _ => Severity::Verbose,
        }
    }

    /// `self` 级别的消息在阈值 `threshold` 下是否输出
    #[inline(always)]
    pub const fn passes(self, threshold: Severity) -> bool {
        self as u8 <= threshold as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
