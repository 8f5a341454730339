// Copyright (c) 2026 zipline64 developers
// MIT License

use crate::{base::write::ZipEncoder as BaseZipEncoder, error::Result, ArchiveEntry};

use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt, TokioAsyncWriteCompatExt};

/// A [`ZipEncoder`] for `tokio`'s IO types, wrapping the runtime-agnostic
/// base encoder behind `Compat` shims.
pub struct ZipEncoder<W: AsyncWrite + Unpin>(BaseZipEncoder<Compat<W>>);

impl<W: AsyncWrite + Unpin> ZipEncoder<W> {
    /// Construct a new ZIP64 encoder which writes the archive to the given
    /// sink.
    pub fn new(writer: W) -> Self {
        Self(BaseZipEncoder::new(writer.compat_write()))
    }

    /// Write one archive member, draining its content from a `tokio`
    /// [`AsyncRead`] source.
    pub async fn add_entry<R>(&mut self, entry: ArchiveEntry, source: Option<R>) -> Result<()>
    where
        R: AsyncRead + Unpin,
    {
        self.0.add_entry(entry, source.map(TokioAsyncReadCompatExt::compat)).await
    }

    /// Write one archive member whose content is already in memory.
    pub async fn add_entry_bytes(&mut self, entry: ArchiveEntry, data: &[u8]) -> Result<()> {
        self.0.add_entry_bytes(entry, data).await
    }

    /// Emit the archive trailer and reset the encoder for reuse.
    pub async fn finalize(&mut self) -> Result<()> {
        self.0.finalize().await
    }

    /// Returns the running archive offset.
    pub fn offset(&self) -> u64 {
        self.0.offset()
    }

    /// Consumes this encoder and returns the inner writer.
    pub fn into_inner(self) -> W {
        self.0.into_inner().into_inner()
    }
}
