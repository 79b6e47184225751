//! 日志宏
//!
//! 每个宏接受标签和格式化参数，写入全局日志器：
//!
//! ```rust
//! use wlog::{log_err, log_info};
//!
//! log_info!("main", "System initialized");
//! log_err!("net", "link down after {} retries", 3);
//! ```
//!
//! 宏在构造 `format_args!` 之前先检查过滤条件，被过滤的日志不会求值格式化参数。

/// 带有级别过滤的内部实现宏
#[doc(hidden)]
#[macro_export]
macro_rules! __wlog_filtered {
    ($level:expr, $tag:expr, $($arg:tt)+) => {{
        let tag: &str = $tag;
        if $crate::is_enabled($level, tag) {
            let _ = $crate::log($level, tag, format_args!($($arg)+));
        }
    }};
}

/// 以 **ERROR** 级别记录消息
#[macro_export]
macro_rules! log_err {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__wlog_filtered!($crate::Severity::Error, $tag, $($arg)+)
    };
}

/// 以 **WARN** 级别记录消息
#[macro_export]
macro_rules! log_warn {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__wlog_filtered!($crate::Severity::Warn, $tag, $($arg)+)
    };
}

/// 以 **INFO** 级别记录消息
#[macro_export]
macro_rules! log_info {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__wlog_filtered!($crate::Severity::Info, $tag, $($arg)+)
    };
}

/// 以 **DEBUG** 级别记录消息
#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__wlog_filtered!($crate::Severity::Debug, $tag, $($arg)+)
    };
}

/// 以 **VERBOSE** 级别记录消息
#[macro_export]
macro_rules! log_verbose {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__wlog_filtered!($crate::Severity::Verbose, $tag, $($arg)+)
    };
}
