use super::*;
use crate::ring::{OverflowPolicy, RingBuffer};

fn drain(ring: &mut RingBuffer<8>) -> Vec<u8> {
    let sink = MockSink::new();
    ring.drain_to(&sink);
    sink.bytes()
}

#[test]
fn test_fifo_order() {
    let mut ring = RingBuffer::<8>::new(OverflowPolicy::DropNewest);
    assert_eq!(ring.try_enqueue(b"abc"), 3);
    assert_eq!(ring.try_enqueue(b"de"), 2);
    assert_eq!(ring.len(), 5);

    assert_eq!(drain(&mut ring), b"abcde");
    assert!(ring.is_empty());
}

#[test]
fn test_empty_buffer() {
    let mut ring = RingBuffer::<8>::new(OverflowPolicy::default());
    assert_eq!(ring.policy(), OverflowPolicy::DropNewest);
    assert!(ring.is_empty());
    assert_eq!(ring.pop(), None);
    assert_eq!(drain(&mut ring), b"");
}

#[test]
fn test_usable_capacity_is_one_less_than_size() {
    let mut ring = RingBuffer::<8>::new(OverflowPolicy::DropNewest);
    assert_eq!(ring.capacity(), 7);
    assert_eq!(ring.try_enqueue(&[1; 7]), 7);
    assert!(ring.is_full());
    assert_eq!(ring.try_enqueue(&[2]), 0);
}

#[test]
fn test_wrap_around_preserves_order() {
    let mut ring = RingBuffer::<8>::new(OverflowPolicy::DropNewest);
    ring.try_enqueue(b"12345");
    for expected in b"12345" {
        assert_eq!(ring.pop(), Some(*expected));
    }

    // head and tail now sit at index 5; the next write crosses the array end.
    assert_eq!(ring.try_enqueue(b"abcdef"), 6);
    assert_eq!(drain(&mut ring), b"abcdef");
}

#[test]
fn test_drain_reports_count_and_empties() {
    let mut ring = RingBuffer::<8>::new(OverflowPolicy::OverwriteOldest);
    ring.try_enqueue(b"xyz");

    let sink = MockSink::new();
    assert_eq!(ring.drain_to(&sink), 3);
    // Single-byte granularity.
    assert_eq!(sink.write_count(), 3);
    assert_eq!(ring.len(), 0);
    assert_eq!(ring.drain_to(&sink), 0);
}
