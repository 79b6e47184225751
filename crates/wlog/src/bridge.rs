//! `log` 门面桥接
//!
//! 把 `log::info!` 等调用转发到全局日志器：记录的 target 作为标签，
//! `Trace` 映射为 [`Severity::Verbose`]。

use crate::level::Severity;

/// `log::Log` 实现
pub struct WlogBridge;

static BRIDGE: WlogBridge = WlogBridge;

/// 把 `log` 的级别映射为 [`Severity`]
pub fn severity_of(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warn,
        log::Level::Info => Severity::Info,
        log::Level::Debug => Severity::Debug,
        log::Level::Trace => Severity::Verbose,
    }
}

impl log::Log for WlogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        crate::is_enabled(severity_of(metadata.level()), metadata.target())
    }

    fn log(&self, record: &log::Record<'_>) {
        let _ = crate::log(
            severity_of(record.level()),
            record.target(),
            *record.args(),
        );
    }

    fn flush(&self) {
        crate::flush_buffer();
    }
}

/// 将全局日志器安装为 `log` 门面的后端
pub fn init_bridge(max_level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_maps_to_verbose() {
        assert_eq!(severity_of(log::Level::Error), Severity::Error);
        assert_eq!(severity_of(log::Level::Info), Severity::Info);
        assert_eq!(severity_of(log::Level::Trace), Severity::Verbose);
    }
}
