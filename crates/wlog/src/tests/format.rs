use super::*;
use crate::format::{FixedBuf, render_dump, render_hex_line, render_line};
use core::fmt::Write;

#[test]
fn test_render_line_plain() {
    let line = render_line(false, 42, Severity::Info, "main", format_args!("hello"));
    assert_eq!(line.as_str(), "(42)[INFO][main]: hello\n");
    assert!(!line.is_truncated());
}

#[test]
fn test_render_line_colored() {
    let line = render_line(true, 7, Severity::Error, "main", format_args!("boom"));
    assert_eq!(line.as_str(), "\x1b[31m(7)[ERROR][main]: boom\x1b[0m\n");
}

#[test]
fn test_level_labels() {
    let labels: Vec<_> = Severity::ALL
        .iter()
        .map(|s| {
            let line = render_line(false, 0, *s, "t", format_args!(""));
            String::from(line.as_str())
        })
        .collect();
    assert_eq!(
        labels,
        [
            "(0)[UNKNOWN][t]: \n",
            "(0)[ERROR][t]: \n",
            "(0)[WARN][t]: \n",
            "(0)[INFO][t]: \n",
            "(0)[DEBUG][t]: \n",
            "(0)[VERBOSE][t]: \n",
        ]
    );
}

#[test]
fn test_format_arguments() {
    let line = render_line(
        false,
        0,
        Severity::Debug,
        "fmt",
        format_args!("value: {}, hex: {:#x}", 42, 0xDEAD),
    );
    assert_eq!(line.as_str(), "(0)[DEBUG][fmt]: value: 42, hex: 0xdead\n");
}

#[test]
fn test_message_truncation() {
    // Create a long message (> MAX_MESSAGE_LEN).
    let long_msg = "a".repeat(300);
    let line = render_line(false, 0, Severity::Info, "t", format_args!("{}", long_msg));

    assert!(line.is_truncated());
    let body = line
        .as_str()
        .strip_prefix("(0)[INFO][t]: ")
        .and_then(|s| s.strip_suffix('\n'))
        .unwrap();
    assert_eq!(body.len(), crate::MAX_MESSAGE_LEN);
}

#[test]
fn test_utf8_truncation_keeps_whole_chars() {
    let mut buf = FixedBuf::<8>::new();
    // "é" is two bytes; the third one would straddle the 8-byte limit.
    let _ = buf.write_str("abcééé");
    assert_eq!(buf.as_str(), "abcéé");
    assert!(buf.is_truncated());

    // Nothing is appended after the truncation point, even though one byte is free.
    let _ = buf.write_str("z");
    assert_eq!(buf.as_str(), "abcéé");
}

#[test]
fn test_special_and_utf8_message() {
    // Non-ASCII strings are intentional here to validate UTF-8 handling.
    let line = render_line(false, 0, Severity::Info, "t", format_args!("你好 !@#$%^&*()"));
    assert_eq!(line.as_str(), "(0)[INFO][t]: 你好 !@#$%^&*()\n");
}

#[test]
fn test_hex_line() {
    let mut out = String::new();
    render_hex_line(&mut out, 5, "buffer", &[0xAB, 0xCD]).unwrap();
    assert_eq!(out, "(5)[HEX][buffer]: AB CD \n");
    assert!(out.contains("AB CD "));
}

#[test]
fn test_hex_line_empty() {
    let mut out = String::new();
    render_hex_line(&mut out, 0, "buffer", &[]).unwrap();
    assert_eq!(out, "(0)[HEX][buffer]: \n");
}

#[test]
fn test_dump_rows() {
    let bytes: Vec<u8> = (0u8..20).collect();
    let mut out = String::new();
    render_dump(&mut out, 9, "mem", &bytes).unwrap();
    assert_eq!(
        out,
        "(9)[DUMP][mem]:\n\n\
         0000: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F \n\
         0010: 10 11 12 13 \n"
    );
}

#[test]
fn test_dump_exact_row_and_empty() {
    let mut out = String::new();
    render_dump(&mut out, 0, "mem", &[0xFF; 16]).unwrap();
    assert_eq!(out.lines().count(), 3);
    assert!(out.ends_with("0000: FF FF FF FF FF FF FF FF FF FF FF FF FF FF FF FF \n"));

    let mut empty = String::new();
    render_dump(&mut empty, 0, "mem", &[]).unwrap();
    assert_eq!(empty, "(0)[DUMP][mem]:\n\n");
}
