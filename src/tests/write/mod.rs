// Copyright (c) 2026 zipline64 developers
// MIT License

use crate::base::write::ZipEncoder;
use crate::error::ZipError;
use crate::spec::consts::{EOCDR_SIGNATURE, ZIP64_EOCDL_SIGNATURE, ZIP64_EOCDR_SIGNATURE};
use crate::tests::init_logger;
use crate::{ArchiveEntryBuilder, ZipDateTime};

use std::io::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

use chrono::{TimeZone, Utc};
use futures_lite::io::AsyncWrite;

/// /dev/null for AsyncWrite.
/// Useful for tests that involve writing, but not reading, large amounts of data.
pub(crate) struct AsyncSink;

// AsyncSink is always ready to receive bytes and throw them away.
impl AsyncWrite for AsyncSink {
    fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<Result<usize, Error>> {
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }
}

/// An AsyncWrite which fails every write, standing in for a consumer that
/// has signalled it will accept no more data.
struct ClosedSink;

impl AsyncWrite for ClosedSink {
    fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, _: &[u8]) -> Poll<Result<usize, Error>> {
        Poll::Ready(Err(Error::other("consumer gone")))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }
}

/// An AsyncRead which yields some bytes and then fails.
struct FlakyReader {
    remaining: usize,
}

impl futures_lite::io::AsyncRead for FlakyReader {
    fn poll_read(mut self: Pin<&mut Self>, _: &mut Context<'_>, buf: &mut [u8]) -> Poll<Result<usize, Error>> {
        if self.remaining == 0 {
            return Poll::Ready(Err(Error::other("source died")));
        }

        let n = self.remaining.min(buf.len());
        buf[..n].fill(b'x');
        self.remaining -= n;
        Poll::Ready(Ok(n))
    }
}

fn fixed_date() -> ZipDateTime {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap().into()
}

/// Byte cost of one streamed entry with the given name and content lengths:
/// 30-byte local header plus name, the content itself, and the 16-byte data
/// descriptor.
fn entry_cost(name_len: u64, content_len: u64) -> u64 {
    30 + name_len + content_len + 16
}

#[tokio::test]
async fn empty_archive_trailer_layout() {
    init_logger();

    let mut encoder = ZipEncoder::new(Vec::<u8>::new());
    encoder.finalize().await.unwrap();
    assert_eq!(encoder.offset(), 0, "finalize resets the running offset");

    let buffer = encoder.into_inner();
    assert_eq!(buffer.len(), 98);

    // ZIP64 EOCDR at offset 0.
    assert_eq!(buffer[0..4], ZIP64_EOCDR_SIGNATURE.to_le_bytes());
    assert_eq!(u64::from_le_bytes(buffer[4..12].try_into().unwrap()), 44);
    // Both entry counts, the directory size and the directory offset are zero.
    assert_eq!(u64::from_le_bytes(buffer[24..32].try_into().unwrap()), 0);
    assert_eq!(u64::from_le_bytes(buffer[32..40].try_into().unwrap()), 0);
    assert_eq!(u64::from_le_bytes(buffer[40..48].try_into().unwrap()), 0);
    assert_eq!(u64::from_le_bytes(buffer[48..56].try_into().unwrap()), 0);

    // Locator at offset 56, pointing back at the EOCDR, one disk in total.
    assert_eq!(buffer[56..60], ZIP64_EOCDL_SIGNATURE.to_le_bytes());
    assert_eq!(u64::from_le_bytes(buffer[64..72].try_into().unwrap()), 0);
    assert_eq!(u32::from_le_bytes(buffer[72..76].try_into().unwrap()), 1);

    // Legacy EOCD at offset 76, all-sentinel, no comment.
    assert_eq!(buffer[76..80], EOCDR_SIGNATURE.to_le_bytes());
    assert_eq!(&buffer[80..88], &[0xFF; 8]);
    assert_eq!(&buffer[88..96], &[0xFF; 8]);
    assert_eq!(&buffer[96..98], &[0, 0]);
}

#[tokio::test]
async fn duplicate_name_fails_without_output() {
    init_logger();

    let mut encoder = ZipEncoder::new(Vec::<u8>::new());

    let entry = ArchiveEntryBuilder::new("a".to_string()).build();
    encoder.add_entry_bytes(entry, b"one").await.unwrap();
    let offset = encoder.offset();

    let entry = ArchiveEntryBuilder::new("a".to_string()).build();
    let result = encoder.add_entry_bytes(entry, b"two").await;
    assert!(matches!(result, Err(ZipError::DuplicateEntry(name)) if name == "a"));
    assert_eq!(encoder.offset(), offset, "rejected call must emit nothing");
}

#[tokio::test]
async fn duplicate_after_directory_normalization() {
    init_logger();

    let mut encoder = ZipEncoder::new(Vec::<u8>::new());

    let entry = ArchiveEntryBuilder::new("docs/".to_string()).build();
    encoder.add_entry(entry, None::<&[u8]>).await.unwrap();

    // "docs" as a directory resolves to the same effective name.
    let entry = ArchiveEntryBuilder::new("docs".to_string()).dir(true).build();
    let result = encoder.add_entry(entry, None::<&[u8]>).await;
    assert!(matches!(result, Err(ZipError::DuplicateEntry(_))));
}

#[tokio::test]
async fn empty_name_is_rejected() {
    init_logger();

    let mut encoder = ZipEncoder::new(Vec::<u8>::new());
    let entry = ArchiveEntryBuilder::new("   ".to_string()).build();
    let result = encoder.add_entry(entry, None::<&[u8]>).await;
    assert!(matches!(result, Err(ZipError::EmptyEntryName)));
}

#[tokio::test]
async fn directory_entries_get_trailing_slash() {
    init_logger();

    let mut encoder = ZipEncoder::new(Vec::<u8>::new());
    let entry = ArchiveEntryBuilder::new("docs".to_string()).dir(true).build();
    encoder.add_entry(entry, None::<&[u8]>).await.unwrap();

    assert_eq!(encoder.order, vec!["docs/".to_string()]);
    let record = encoder.entries.get("docs/").unwrap();
    assert!(record.dir);
    assert_eq!(record.uncompressed_size, 0);
    assert_eq!(record.crc(), 0);
}

#[tokio::test]
async fn entry_offsets_match_header_arithmetic() {
    init_logger();

    let mut encoder = ZipEncoder::new(Vec::<u8>::new());

    let entry = ArchiveEntryBuilder::new("a.txt".to_string()).build();
    encoder.add_entry(entry, None::<&[u8]>).await.unwrap();
    assert_eq!(encoder.offset(), entry_cost(5, 0));

    let entry = ArchiveEntryBuilder::new("b.txt".to_string()).build();
    encoder.add_entry_bytes(entry, b"mjau").await.unwrap();
    assert_eq!(encoder.offset(), entry_cost(5, 0) + entry_cost(5, 4));

    let record = encoder.entries.get("b.txt").unwrap();
    assert_eq!(record.lh_offset, entry_cost(5, 0));
    assert_eq!(record.uncompressed_size, 4);
    assert_eq!(record.compressed_size, 4);
    assert_eq!(record.crc(), crc32fast::hash(b"mjau"));
}

#[tokio::test]
async fn running_offset_equals_bytes_sunk() {
    init_logger();

    let mut encoder = ZipEncoder::new(Vec::<u8>::new());

    for i in 0..4 {
        let entry = ArchiveEntryBuilder::new(format!("file-{i}")).build();
        encoder.add_entry_bytes(entry, &vec![i as u8; 100 * i]).await.unwrap();
        assert_eq!(encoder.offset() as usize, encoder.inner_mut().len());
    }

    encoder.finalize().await.unwrap();
    assert_eq!(encoder.offset(), 0);

    // Entry data, then per-entry directory records (46 fixed + name + 28
    // ZIP64 extra field), then the fixed 98-byte trailer.
    let entry_bytes: u64 = (0..4).map(|i| entry_cost(6, 100 * i)).sum();
    let directory_bytes: u64 = 4 * (46 + 6 + 28);
    let buffer = encoder.into_inner();
    assert_eq!(buffer.len() as u64, entry_bytes + directory_bytes + 98);
}

#[tokio::test]
async fn many_entries_offset_accounting() {
    init_logger();

    let mut encoder = ZipEncoder::new(AsyncSink);
    let mut expected = 0u64;

    for i in 0..1_000u32 {
        let name = format!("{i:04}");
        let entry = ArchiveEntryBuilder::new(name).build();
        encoder.add_entry_bytes(entry, &[0u8; 32]).await.unwrap();
        expected += entry_cost(4, 32);
        assert_eq!(encoder.offset(), expected);
    }

    encoder.finalize().await.unwrap();
    assert_eq!(encoder.offset(), 0);
}

#[tokio::test]
async fn encoder_is_reusable_and_layout_idempotent() {
    init_logger();

    let date = fixed_date();
    let mut encoder = ZipEncoder::new(Vec::<u8>::new());

    for _ in 0..2 {
        let entry = ArchiveEntryBuilder::new("cat.txt".to_string()).last_modification_date(date).build();
        encoder.add_entry_bytes(entry, b"mjau").await.unwrap();
        let entry = ArchiveEntryBuilder::new("dog.txt".to_string()).last_modification_date(date).build();
        encoder.add_entry_bytes(entry, b"").await.unwrap();
        encoder.finalize().await.unwrap();
    }

    let buffer = encoder.into_inner();
    let (first, second) = buffer.split_at(buffer.len() / 2);
    assert_eq!(first, second, "fresh archives over the same entries must be byte-identical");
}

#[tokio::test]
async fn source_failure_surfaces_as_source_stream_error() {
    init_logger();

    let mut encoder = ZipEncoder::new(AsyncSink);
    let entry = ArchiveEntryBuilder::new("flaky".to_string()).build();
    let result = encoder.add_entry(entry, Some(FlakyReader { remaining: 128 })).await;

    assert!(matches!(result, Err(ZipError::SourceStream(_))));
    // The failed entry is not registered; finalizing afterwards is the
    // caller's decision and must not include it.
    assert!(encoder.entries.is_empty());
}

#[tokio::test]
async fn closed_sink_surfaces_as_sink_abort() {
    init_logger();

    let mut encoder = ZipEncoder::new(ClosedSink);
    let entry = ArchiveEntryBuilder::new("unsendable".to_string()).build();
    let result = encoder.add_entry_bytes(entry, b"payload").await;

    assert!(matches!(result, Err(ZipError::SinkAbort(_))));
}
