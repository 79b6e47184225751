//! 测试支持 crate
//!
//! 提供日志库测试使用的 Mock 实现：可检查内容的输出端和可手动拨动的时钟。

pub mod mock;

pub use mock::{MockClock, MockSink};
