//! 同步原语
//!
//! 向日志库提供互斥保护原语：
//!
//! - [`RawSpinLock`]：基于原子操作的自旋锁，适用于没有阻塞原语的目标
//! - [`NoopRawMutex`]：单线程目标使用的空保护，只检测同一线程内的重入
//! - [`SpinLock`]：`lock_api::Mutex` 与 [`RawSpinLock`] 的组合，保护任意数据
//!
//! 两种原始锁都实现了 [`lock_api::RawMutex`]，使用方可以通过泛型参数
//! 在"有互斥保护"与"无互斥保护"之间切换，而核心逻辑无需区分平台。

#![no_std]

mod noop;
mod raw_spin_lock;
mod spin_lock;

pub use noop::*;
pub use raw_spin_lock::*;
pub use spin_lock::*;

pub use lock_api::RawMutex;
