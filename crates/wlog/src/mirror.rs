//! 过滤表的无锁镜像
//!
//! 日志调用在获取互斥保护之前，用这份镜像判断标签是否被排除、级别是否被过滤。
//! 镜像只由持有互斥保护的修改操作发布，因此写者天然串行；读者按顺序锁
//! （seqlock）协议读取：
//!
//! 1. 读取序号，奇数表示正在发布，放弃快速判断
//! 2. 读取表内容
//! 3. 再次读取序号，与第一次不同说明读到了撕裂的内容，放弃快速判断
//!
//! 放弃时返回"不拒绝"，由加锁后的精确检查给出结论，所以镜像只能提前拒绝、
//! 不会错放。

use crate::config::{MAX_EXCLUDED_TAGS, MAX_LEVEL_TAGS, MAX_TAG_LEN};
use crate::level::Severity;
use crate::registry::TagRegistry;
use crate::tag::clip;
use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering, fence};

struct TagSlot {
    bytes: [AtomicU8; MAX_TAG_LEN],
    len: AtomicU8,
}

impl TagSlot {
    const fn new() -> Self {
        Self {
            bytes: [const { AtomicU8::new(0) }; MAX_TAG_LEN],
            len: AtomicU8::new(0),
        }
    }

    fn store(&self, tag: &str) {
        for (slot, &byte) in self.bytes.iter().zip(tag.as_bytes()) {
            slot.store(byte, Ordering::Relaxed);
        }
        self.len.store(tag.len() as u8, Ordering::Relaxed);
    }

    /// `tag` 须已按 [`MAX_TAG_LEN`] 截断
    fn matches(&self, tag: &[u8]) -> bool {
        self.len.load(Ordering::Relaxed) as usize == tag.len()
            && self
                .bytes
                .iter()
                .zip(tag)
                .all(|(slot, &byte)| slot.load(Ordering::Relaxed) == byte)
    }
}

/// [`TagRegistry`] 的无锁只读副本
pub(crate) struct FilterMirror {
    seq: AtomicUsize,
    global_level: AtomicU8,
    level_count: AtomicUsize,
    level_tags: [TagSlot; MAX_LEVEL_TAGS],
    levels: [AtomicU8; MAX_LEVEL_TAGS],
    excluded_count: AtomicUsize,
    excluded: [TagSlot; MAX_EXCLUDED_TAGS],
}

impl FilterMirror {
    pub(crate) const fn new(global_level: Severity) -> Self {
        Self {
            seq: AtomicUsize::new(0),
            global_level: AtomicU8::new(global_level as u8),
            level_count: AtomicUsize::new(0),
            level_tags: [const { TagSlot::new() }; MAX_LEVEL_TAGS],
            levels: [const { AtomicU8::new(0) }; MAX_LEVEL_TAGS],
            excluded_count: AtomicUsize::new(0),
            excluded: [const { TagSlot::new() }; MAX_EXCLUDED_TAGS],
        }
    }

    /// 发布注册表的当前内容
    ///
    /// 调用方必须持有保护注册表的互斥锁。
    pub(crate) fn publish(&self, registry: &TagRegistry) {
        let seq = self.seq.load(Ordering::Relaxed);
        self.seq.store(seq.wrapping_add(1), Ordering::Relaxed);
        fence(Ordering::Release);

        self.global_level
            .store(registry.global_level() as u8, Ordering::Relaxed);

        let mut count = 0;
        for (i, (tag, level)) in registry.overrides().enumerate() {
            self.level_tags[i].store(tag);
            self.levels[i].store(level as u8, Ordering::Relaxed);
            count += 1;
        }
        self.level_count.store(count, Ordering::Relaxed);

        let mut count = 0;
        for (i, tag) in registry.excluded_tags().enumerate() {
            self.excluded[i].store(tag);
            count += 1;
        }
        self.excluded_count.store(count, Ordering::Relaxed);

        self.seq.store(seq.wrapping_add(2), Ordering::Release);
    }

    /// 镜像能否确定该消息会被抑制
    ///
    /// 返回 `false` 不代表消息一定输出，只表示需要加锁后精确检查。
    pub(crate) fn rejects(&self, severity: Severity, tag: &str) -> bool {
        let start = self.seq.load(Ordering::Acquire);
        if start & 1 == 1 {
            return false;
        }

        let rejected = self.rejects_unsynchronized(severity, clip(tag, MAX_TAG_LEN).as_bytes());

        fence(Ordering::Acquire);
        rejected && self.seq.load(Ordering::Relaxed) == start
    }

    fn rejects_unsynchronized(&self, severity: Severity, tag: &[u8]) -> bool {
        let excluded = self.excluded_count.load(Ordering::Relaxed).min(MAX_EXCLUDED_TAGS);
        if self.excluded[..excluded].iter().any(|slot| slot.matches(tag)) {
            return true;
        }

        let overrides = self.level_count.load(Ordering::Relaxed).min(MAX_LEVEL_TAGS);
        let threshold = self.level_tags[..overrides]
            .iter()
            .position(|slot| slot.matches(tag))
            .map_or(&self.global_level, |i| &self.levels[i])
            .load(Ordering::Relaxed);
        !severity.passes(Severity::from_u8(threshold))
    }
}
