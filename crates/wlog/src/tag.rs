//! 日志标签

use crate::config::MAX_TAG_LEN;
use core::fmt;

/// 固定长度存储的日志标签
///
/// 超过 [`MAX_TAG_LEN`] 字节的标签在字符边界处截断。存储与查找都使用
/// 同一截断规则，因此过长的标签仍然能匹配到它自己。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    bytes: [u8; MAX_TAG_LEN],
    len: u8,
}

impl Tag {
    /// 空标签，用于初始化固定数组
    pub const EMPTY: Tag = Tag {
        bytes: [0; MAX_TAG_LEN],
        len: 0,
    };

    /// 从字符串构造标签
    pub fn new(tag: &str) -> Self {
        let clipped = clip(tag, MAX_TAG_LEN);
        let mut bytes = [0; MAX_TAG_LEN];
        bytes[..clipped.len()].copy_from_slice(clipped.as_bytes());
        Self {
            bytes,
            len: clipped.len() as u8,
        }
    }

    /// 标签文本
    pub fn as_str(&self) -> &str {
        // SAFETY: 只会拷贝在字符边界处截断的 &str
        unsafe { core::str::from_utf8_unchecked(&self.bytes[..self.len as usize]) }
    }

    /// 是否与给定字符串表示同一标签
    pub fn matches(&self, tag: &str) -> bool {
        self.as_str() == clip(tag, MAX_TAG_LEN)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 取 `s` 中不超过 `max` 字节、且结束于字符边界的最长前缀
pub(crate) fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
