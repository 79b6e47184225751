//! Mock 实现模块
//!
//! 输出端与时钟的 Mock 实现，被各 crate 的测试通过 trait 适配后使用。

pub mod clock;
pub mod sink;

pub use clock::MockClock;
pub use sink::MockSink;
