//! 输出端不可用时使用的字节环形缓冲区
//!
//! 该缓冲区只是"发射"与"下一次可以输出"之间的桥梁：日志字节在这里排队，
//! 直到宿主显式调用排空操作。单生产者、单排空调用者，没有后台任务。
//!
//! `head` 为下一个写入位置，`tail` 为下一个读取位置，均对容量取模；
//! `head == tail` 表示空。缓冲区不保存计数，因此总有一个字节作为余量，
//! 可用容量为 `N - 1`。两种溢出策略下都保持这一余量，溢出阈值与丢弃数量
//! 因此可以精确预期。

use crate::sink::LogSink;

/// 缓冲区满时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// 停止写入本次调用的剩余字节（默认）
    #[default]
    DropNewest,
    /// 丢弃最旧的未读字节，为新字节腾出空间
    OverwriteOldest,
}

/// 固定容量的字节环形缓冲区
pub struct RingBuffer<const N: usize> {
    data: [u8; N],
    head: usize,
    tail: usize,
    policy: OverflowPolicy,
    /// 因溢出而丢弃的字节总数（两种策略都计入）
    dropped: usize,
}

impl<const N: usize> RingBuffer<N> {
    /// 在编译期创建空缓冲区
    pub const fn new(policy: OverflowPolicy) -> Self {
        const { assert!(N >= 2, "ring buffer needs at least two slots") };
        Self {
            data: [0; N],
            head: 0,
            tail: 0,
            policy,
            dropped: 0,
        }
    }

    #[inline(always)]
    const fn next(index: usize) -> usize {
        (index + 1) % N
    }

    /// 逐字节追加，返回实际写入的字节数
    ///
    /// 缓冲区满（`next(head) == tail`）时：
    /// - `DropNewest`：停止写入，本次已写入的字节保留，返回值小于 `bytes.len()`
    /// - `OverwriteOldest`：先丢弃一个最旧字节再写入，新字节永不丢失
    pub fn try_enqueue(&mut self, bytes: &[u8]) -> usize {
        let mut written = 0;
        for &byte in bytes {
            let next_head = Self::next(self.head);
            if next_head == self.tail {
                match self.policy {
                    OverflowPolicy::DropNewest => {
                        self.dropped += bytes.len() - written;
                        break;
                    }
                    OverflowPolicy::OverwriteOldest => {
                        self.tail = Self::next(self.tail);
                        self.dropped += 1;
                    }
                }
            }
            self.data[self.head] = byte;
            self.head = next_head;
            written += 1;
        }
        written
    }

    /// 弹出最旧的字节
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.data[self.tail];
        self.tail = Self::next(self.tail);
        Some(byte)
    }

    /// 按 FIFO 顺序逐字节转发到输出端，返回转发的字节数
    ///
    /// 返回后缓冲区为空。
    pub fn drain_to<S: LogSink + ?Sized>(&mut self, sink: &S) -> usize {
        let mut count = 0;
        while let Some(byte) = self.pop() {
            sink.write_bytes(core::slice::from_ref(&byte));
            count += 1;
        }
        count
    }

    /// 未读字节数
    pub fn len(&self) -> usize {
        (self.head + N - self.tail) % N
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// 是否已满
    pub fn is_full(&self) -> bool {
        Self::next(self.head) == self.tail
    }

    /// 可用容量（`N - 1`）
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// 溢出策略
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// 因溢出而丢弃的字节总数
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
