use std::io::{self, Cursor};

use crate::blocks::{block_interact_on, full_block_interact_on, read_blocks, read_full_blocks};
use crate::tests::support::{ChunkedReader, LineFeed, SharedWriter, UntouchableReader};

fn collect(iter: impl Iterator<Item = io::Result<Vec<u8>>>) -> Vec<Vec<u8>> {
    iter.collect::<io::Result<_>>().expect("blocks should read")
}

#[test]
fn read_blocks_yields_short_blocks_as_read() {
    let reader = ChunkedReader::new(b"abcdefg".to_vec(), 3);
    let blocks = collect(read_blocks(reader, 5));
    assert_eq!(blocks, vec![b"abc".to_vec(), b"def".to_vec(), b"g".to_vec()]);
}

#[test]
fn read_full_blocks_fills_each_block_but_the_last() {
    let reader = ChunkedReader::new(b"0123456789".to_vec(), 3);
    let blocks = collect(read_full_blocks(reader, 4));
    assert_eq!(
        blocks,
        vec![b"0123".to_vec(), b"4567".to_vec(), b"89".to_vec()]
    );
}

#[test]
fn read_blocks_on_empty_input_yields_nothing() {
    assert!(collect(read_blocks(Cursor::new(Vec::<u8>::new()), 4)).is_empty());
    assert!(collect(read_full_blocks(Cursor::new(Vec::<u8>::new()), 4)).is_empty());
}

#[test]
fn zero_block_size_never_reads() {
    assert!(collect(read_blocks(UntouchableReader, 0)).is_empty());
    assert!(collect(read_full_blocks(UntouchableReader, 0)).is_empty());
}

#[test]
fn read_blocks_is_lazy() {
    let mut blocks = read_full_blocks(Cursor::new(b"aabbcc".to_vec()), 2);
    assert_eq!(blocks.next().unwrap().unwrap(), b"aa");
    assert_eq!(blocks.into_inner().position(), 2);
}

#[test]
fn full_block_interact_transforms_each_block() {
    let mut out = Vec::new();
    full_block_interact_on(Cursor::new(b"abcdefg".to_vec()), &mut out, 3, |blocks| {
        blocks.map(|mut b| {
            b.reverse();
            b
        })
    })
    .unwrap();

    assert_eq!(out, b"cbafedg");
}

#[test]
fn block_interact_identity_copies_binary_input() {
    let data: Vec<u8> = (0..=255u8).collect();
    let mut out = Vec::new();

    block_interact_on(ChunkedReader::new(data.clone(), 7), &mut out, 16, |blocks| blocks)
        .unwrap();

    assert_eq!(out, data);
}

#[test]
fn block_interact_writes_each_block_before_reading_the_next() {
    let out = SharedWriter::default();
    let input = LineFeed::new(["ab", "cd", "ef"], &out);
    let seen = input.seen.clone();

    block_interact_on(input, &mut out.clone(), 2, |blocks| blocks).unwrap();

    assert_eq!(*seen.borrow(), vec![0, 2, 4]);
    assert_eq!(*out.0.borrow(), b"abcdef");
}
