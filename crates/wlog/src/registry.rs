//! 标签注册表
//!
//! 保存每个标签的级别覆盖与排除标志，并回答过滤查询。
//!
//! 两张表都是固定容量数组加线性扫描：表很小且容量固定，
//! 满时插入失败并报告 [`LogError::CapacityExceeded`]，不会淘汰已有条目，
//! 也不会增长。

use crate::config::{MAX_EXCLUDED_TAGS, MAX_LEVEL_TAGS};
use crate::error::{LogError, Table};
use crate::level::Severity;
use crate::tag::Tag;

#[derive(Debug, Clone, Copy)]
struct TagLevel {
    tag: Tag,
    level: Severity,
}

impl TagLevel {
    const EMPTY: TagLevel = TagLevel {
        tag: Tag::EMPTY,
        level: Severity::None,
    };
}

/// 标签级别覆盖表与排除集合
#[derive(Debug, Clone)]
pub struct TagRegistry {
    levels: [TagLevel; MAX_LEVEL_TAGS],
    level_count: usize,
    excluded: [Tag; MAX_EXCLUDED_TAGS],
    excluded_count: usize,
    global_level: Severity,
}

impl TagRegistry {
    /// 创建空注册表
    pub const fn new(global_level: Severity) -> Self {
        Self {
            levels: [TagLevel::EMPTY; MAX_LEVEL_TAGS],
            level_count: 0,
            excluded: [Tag::EMPTY; MAX_EXCLUDED_TAGS],
            excluded_count: 0,
            global_level,
        }
    }

    /// 设置标签的级别覆盖，重复设置时后写者生效
    pub fn set_level(&mut self, tag: &str, level: Severity) -> Result<(), LogError> {
        if let Some(entry) = self.levels[..self.level_count]
            .iter_mut()
            .find(|e| e.tag.matches(tag))
        {
            entry.level = level;
            return Ok(());
        }
        if self.level_count == MAX_LEVEL_TAGS {
            return Err(LogError::CapacityExceeded {
                table: Table::LevelOverrides,
            });
        }
        self.levels[self.level_count] = TagLevel {
            tag: Tag::new(tag),
            level,
        };
        self.level_count += 1;
        Ok(())
    }

    /// 排除标签；重复排除不是错误
    pub fn exclude(&mut self, tag: &str) -> Result<(), LogError> {
        if self.is_excluded(tag) {
            return Ok(());
        }
        if self.excluded_count == MAX_EXCLUDED_TAGS {
            return Err(LogError::CapacityExceeded {
                table: Table::ExcludedTags,
            });
        }
        self.excluded[self.excluded_count] = Tag::new(tag);
        self.excluded_count += 1;
        Ok(())
    }

    /// 恢复被排除的标签
    ///
    /// 删除时向前压缩，保持其余标签的相对顺序。
    pub fn include(&mut self, tag: &str) -> Result<(), LogError> {
        let index = self.excluded[..self.excluded_count]
            .iter()
            .position(|t| t.matches(tag))
            .ok_or(LogError::NotFound)?;
        self.excluded.copy_within(index + 1..self.excluded_count, index);
        self.excluded_count -= 1;
        self.excluded[self.excluded_count] = Tag::EMPTY;
        Ok(())
    }

    /// 标签是否被排除
    pub fn is_excluded(&self, tag: &str) -> bool {
        self.excluded[..self.excluded_count]
            .iter()
            .any(|t| t.matches(tag))
    }

    /// 标签当前的有效级别：覆盖值，或全局默认级别
    pub fn effective_level(&self, tag: &str) -> Severity {
        self.levels[..self.level_count]
            .iter()
            .find(|e| e.tag.matches(tag))
            .map_or(self.global_level, |e| e.level)
    }

    /// 该级别、该标签的消息是否通过过滤；排除优先于级别过滤
    pub fn allows(&self, severity: Severity, tag: &str) -> bool {
        !self.is_excluded(tag) && severity.passes(self.effective_level(tag))
    }

    /// 设置全局默认级别
    pub fn set_global_level(&mut self, level: Severity) {
        self.global_level = level;
    }

    /// 全局默认级别
    pub fn global_level(&self) -> Severity {
        self.global_level
    }

    /// 按插入顺序遍历级别覆盖
    pub fn overrides(&self) -> impl Iterator<Item = (&str, Severity)> {
        self.levels[..self.level_count]
            .iter()
            .map(|e| (e.tag.as_str(), e.level))
    }

    /// 按插入顺序遍历被排除的标签
    pub fn excluded_tags(&self) -> impl Iterator<Item = &str> {
        self.excluded[..self.excluded_count].iter().map(Tag::as_str)
    }
}
