//! 日志行格式化
//!
//! 所有中间结果都写入固定大小的 [`FixedBuf`]，超出容量时截断而不是增长。
//! 十六进制输出直接写入任意 [`fmt::Write`]，按片段流式产生，不需要整行缓冲。
//!
//! # 格式
//! ```text
//! <color>(<ms>)[<LEVEL>][<tag>]: <message><reset>\n
//! (<ms>)[HEX][<tag>]: AB CD EF \n
//! (<ms>)[DUMP][<tag>]:\n
//! \n
//! 0000: 00 01 02 ... 0F \n
//! 0010: 10 11 \n
//! ```

use crate::config::{MAX_LINE_LEN, MAX_MESSAGE_LEN};
use crate::level::{RESET_COLOR, Severity};
use crate::tag::{Tag, clip};
use core::fmt::{self, Write};

/// 每行转储的字节数
pub const DUMP_BYTES_PER_ROW: usize = 16;

/// 固定容量的文本缓冲区
///
/// 写满后记录截断标志，之后的写入全部丢弃，避免在截断点之后拼接出乱序内容。
pub struct FixedBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> FixedBuf<N> {
    /// 创建空缓冲区
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    /// 已写入的文本
    pub fn as_str(&self) -> &str {
        // SAFETY: write_str 只拷贝在字符边界处截断的 &str
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.len]) }
    }

    /// 已写入的字节
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// 已写入的字节数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 是否发生过截断
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Default for FixedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for FixedBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let part = clip(s, N - self.len);
        self.buf[self.len..self.len + part.len()].copy_from_slice(part.as_bytes());
        self.len += part.len();
        if part.len() < s.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for FixedBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuf")
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}

/// 一条完整的日志行
pub type Line = FixedBuf<MAX_LINE_LEN>;

/// 渲染一条带级别、时间戳、标签的日志行
///
/// 正文先格式化到 [`MAX_MESSAGE_LEN`] 字节的缓冲区，超出部分静默截断；
/// 截断会反映在返回值的 [`FixedBuf::is_truncated`] 上。
/// `colors` 为 false 时颜色码与复位码都为空串。
pub fn render_line(
    colors: bool,
    elapsed_ms: u32,
    severity: Severity,
    tag: &str,
    args: fmt::Arguments<'_>,
) -> Line {
    let mut message = FixedBuf::<MAX_MESSAGE_LEN>::new();
    let _ = message.write_fmt(args);

    let (color, reset) = if colors {
        (severity.color_code(), RESET_COLOR)
    } else {
        ("", "")
    };

    let mut line = Line::new();
    let _ = writeln!(
        line,
        "{}({})[{}][{}]: {}{}",
        color,
        elapsed_ms,
        severity.label(),
        Tag::new(tag),
        message.as_str(),
        reset
    );
    if message.is_truncated() {
        line.truncated = true;
    }
    line
}

/// 以单行十六进制形式输出字节，每个字节后跟一个空格
pub fn render_hex_line<W: Write + ?Sized>(
    out: &mut W,
    elapsed_ms: u32,
    tag: &str,
    bytes: &[u8],
) -> fmt::Result {
    write!(out, "({})[HEX][{}]: ", elapsed_ms, Tag::new(tag))?;
    for byte in bytes {
        write!(out, "{:02X} ", byte)?;
    }
    out.write_char('\n')
}

/// 以经典内存转储形式输出字节：标题行与一个空行之后每 16 字节一行，行首为 4 位十六进制偏移
///
/// 空输入只输出标题行和空行。
pub fn render_dump<W: Write + ?Sized>(
    out: &mut W,
    elapsed_ms: u32,
    tag: &str,
    bytes: &[u8],
) -> fmt::Result {
    writeln!(out, "({})[DUMP][{}]:", elapsed_ms, Tag::new(tag))?;
    out.write_char('\n')?;
    for (row, chunk) in bytes.chunks(DUMP_BYTES_PER_ROW).enumerate() {
        write!(out, "{:04X}: ", row * DUMP_BYTES_PER_ROW)?;
        for byte in chunk {
            write!(out, "{:02X} ", byte)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}
