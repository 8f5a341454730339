// Copyright (c) 2026 zipline64 developers
// MIT License

//! A module which supports the streamed writing of ZIP64 files.
//!
//! # Example
//! ```no_run
//! # use zipline64::{ArchiveEntryBuilder, base::write::ZipEncoder};
//! # use zipline64::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut encoder = ZipEncoder::new(Vec::<u8>::new());
//!
//! let entry = ArchiveEntryBuilder::new(String::from("foo.txt")).build();
//! encoder.add_entry(entry, Some(&b"This is an example file."[..])).await?;
//!
//! encoder.finalize().await?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod io;
pub(crate) mod record;

use crate::entry::ArchiveEntry;
use crate::error::{Result, ZipError};
use crate::spec::consts::{
    CDH_SIGNATURE, COMPRESSION_STORED, DATA_DESCRIPTOR_SIGNATURE, DIRECTORY_ATTRIBUTE, EOCDR_SIGNATURE,
    LFH_SIGNATURE, ZIP64_COUNT_SENTINEL, ZIP64_EOCDL_SIGNATURE, ZIP64_EOCDR_SIGNATURE, ZIP64_EOCDR_SIZE_OF_RECORD,
    ZIP64_EXTRA_FIELD_LENGTH, ZIP64_SIZE_SENTINEL,
};
use crate::spec::header::{
    CentralDirectoryHeader, DataDescriptor, EndOfCentralDirectoryHeader, LocalFileHeader,
    Zip64EndOfCentralDirectoryLocator, Zip64EndOfCentralDirectoryRecord, Zip64ExtendedInformation,
};
use crate::spec::version;

use io::offset::AsyncOffsetWriter;
use record::EntryRecord;

use std::collections::HashMap;

use futures_lite::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Size of the scratch buffer used when draining an entry's content source.
const CONTENT_CHUNK_SIZE: usize = 64 * 1024;

/// A streaming ZIP64 archive encoder which acts over AsyncWrite implementers.
///
/// Entries must be added one at a time, in the order they should appear in
/// the archive; the `&mut self` receivers serialize access at compile time.
/// The only suspension points are the chunk-by-chunk drain of an entry's
/// content source and the writes into the sink, so a slow sink paces reads
/// from the source and a slow source never stalls unrelated work.
///
/// # Note
/// - [`ZipEncoder::finalize()`] must be called after the last entry; without
///   it no directory is written and the output is not a valid ZIP file.
/// - [`ZipEncoder::finalize()`] resets the encoder for a fresh archive; it
///   does not have to be dropped between uses.
pub struct ZipEncoder<W> {
    pub(crate) writer: AsyncOffsetWriter<W>,
    pub(crate) entries: HashMap<String, EntryRecord>,
    pub(crate) order: Vec<String>,
}

impl<W: AsyncWrite + Unpin> ZipEncoder<W> {
    /// Construct a new ZIP64 encoder which writes the archive to the given
    /// sink.
    pub fn new(writer: W) -> Self {
        Self { writer: AsyncOffsetWriter::new(writer), entries: HashMap::new(), order: Vec::new() }
    }

    /// Write one archive member: its local file header, its content drained
    /// chunk-by-chunk from `source`, and its trailing data descriptor.
    ///
    /// Returns once the source (if any) is exhausted and every produced byte
    /// has been accepted by the sink. Directory entries and placeholder
    /// entries pass `None` and take the identical path with no content, so
    /// their encoding matches a zero-length streamed entry byte for byte.
    ///
    /// # Errors
    /// - [`ZipError::DuplicateEntry`] if the normalized name was already
    ///   added; checked before any output is produced, so the failed call
    ///   leaves no partial state behind.
    /// - [`ZipError::SourceStream`] if the content source fails mid-read.
    /// - [`ZipError::SinkAbort`] if the sink rejects further writes.
    #[tracing::instrument(skip_all, fields(name = %entry.name))]
    pub async fn add_entry<R>(&mut self, entry: ArchiveEntry, source: Option<R>) -> Result<()>
    where
        R: AsyncRead + Unpin,
    {
        let name = effective_name(&entry)?;
        if self.entries.contains_key(&name) {
            return Err(ZipError::DuplicateEntry(name));
        }
        if name.len() > u16::MAX as usize {
            return Err(ZipError::FileNameTooLarge);
        }
        if entry.comment.len() > u16::MAX as usize {
            return Err(ZipError::CommentTooLarge);
        }

        let mut record = EntryRecord::new(name.clone(), &entry, self.writer.offset());
        Self::write_local_file_header(&mut self.writer, &record).await?;
        record.begin_content();

        if let Some(mut source) = source {
            let mut chunk = vec![0u8; CONTENT_CHUNK_SIZE];

            loop {
                let read = source.read(&mut chunk).await.map_err(ZipError::SourceStream)?;
                if read == 0 {
                    break;
                }

                // Hash and count before forwarding; chunks reach the sink in
                // the exact order and form they were read.
                record.absorb(&chunk[..read]);
                self.writer.write_all(&chunk[..read]).await?;
            }
        }

        let crc = record.finish_content();
        Self::write_data_descriptor(&mut self.writer, &record, crc).await?;

        self.order.push(name.clone());
        self.entries.insert(name, record);

        Ok(())
    }

    /// Write one archive member whose content is already in memory.
    ///
    /// Equivalent to [`ZipEncoder::add_entry()`] with `data` as the source.
    pub async fn add_entry_bytes(&mut self, entry: ArchiveEntry, data: &[u8]) -> Result<()> {
        self.add_entry(entry, Some(data)).await
    }

    /// Emit the archive trailer: one central directory record per entry, the
    /// ZIP64 end of central directory record, the ZIP64 locator and the
    /// legacy end of central directory record, in that order.
    ///
    /// Afterwards the encoder state is reset to empty and the instance may be
    /// reused for a new archive. Finalizing with zero entries is valid and
    /// produces a minimal empty-archive trailer.
    #[tracing::instrument(skip(self))]
    pub async fn finalize(&mut self) -> Result<()> {
        let cd_offset = self.writer.offset();

        for name in &self.order {
            if let Some(record) = self.entries.get(name) {
                Self::write_central_directory_record(&mut self.writer, record).await?;
            }
        }

        let directory_size = self.writer.offset() - cd_offset;
        let total_entries = self.order.len() as u64;

        let eocdr_offset = self.writer.offset();
        let eocdr = Zip64EndOfCentralDirectoryRecord {
            size_of_record: ZIP64_EOCDR_SIZE_OF_RECORD,
            version_made_by: version::as_made_by(),
            version_needed: version::as_needed_to_extract(),
            disk_number: 0,
            disk_with_start_of_cd: 0,
            entries_on_disk: total_entries,
            total_entries,
            directory_size,
            directory_offset: cd_offset,
        };
        self.writer.write_all(&ZIP64_EOCDR_SIGNATURE.to_le_bytes()).await?;
        self.writer.write_all(&eocdr.as_slice()).await?;

        let locator =
            Zip64EndOfCentralDirectoryLocator { eocdr_disk: 0, eocdr_offset, total_disks: 1 };
        self.writer.write_all(&ZIP64_EOCDL_SIGNATURE.to_le_bytes()).await?;
        self.writer.write_all(&locator.as_slice()).await?;

        // The legacy record exists so tail-scanning readers find a valid
        // signature; its numeric fields all redirect to the ZIP64 records.
        let eocd = EndOfCentralDirectoryHeader {
            disk_num: ZIP64_COUNT_SENTINEL,
            start_cent_dir_disk: ZIP64_COUNT_SENTINEL,
            num_of_entries_disk: ZIP64_COUNT_SENTINEL,
            num_of_entries: ZIP64_COUNT_SENTINEL,
            size_cent_dir: ZIP64_SIZE_SENTINEL,
            cent_dir_offset: ZIP64_SIZE_SENTINEL,
            file_comm_length: 0,
        };
        self.writer.write_all(&EOCDR_SIGNATURE.to_le_bytes()).await?;
        self.writer.write_all(&eocd.as_slice()).await?;

        self.entries.clear();
        self.order.clear();
        self.writer.reset();

        Ok(())
    }

    /// Returns the running archive offset: the total size in bytes of all
    /// chunks emitted to the sink for the archive in progress.
    pub fn offset(&self) -> u64 {
        self.writer.offset()
    }

    /// Returns a mutable reference to the inner writer.
    ///
    /// Care should be taken when using this inner writer as doing so may
    /// invalidate internal state of this encoder.
    pub fn inner_mut(&mut self) -> &mut W {
        self.writer.inner_mut()
    }

    /// Consumes this encoder and returns the inner writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    #[tracing::instrument(skip_all, fields(name = %record.name))]
    async fn write_local_file_header(writer: &mut AsyncOffsetWriter<W>, record: &EntryRecord) -> Result<()> {
        // CRC and sizes are zero here; the streamed-sizes flag defers them to
        // the data descriptor and the central directory's ZIP64 extra field.
        let lfh = LocalFileHeader {
            version: version::as_needed_to_extract(),
            flags: record.flags,
            compression: COMPRESSION_STORED,
            mod_time: record.mod_time,
            mod_date: record.mod_date,
            crc: 0,
            compressed_size: 0,
            uncompressed_size: 0,
            file_name_length: record.name.len() as u16,
            extra_field_length: 0,
        };

        writer.write_all(&LFH_SIGNATURE.to_le_bytes()).await?;
        writer.write_all(&lfh.as_slice()).await?;
        writer.write_all(record.name.as_bytes()).await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, fields(name = %record.name))]
    async fn write_data_descriptor(writer: &mut AsyncOffsetWriter<W>, record: &EntryRecord, crc: u32) -> Result<()> {
        let descriptor = DataDescriptor {
            crc,
            compressed_size: ZIP64_SIZE_SENTINEL,
            uncompressed_size: ZIP64_SIZE_SENTINEL,
        };

        writer.write_all(&DATA_DESCRIPTOR_SIGNATURE.to_le_bytes()).await?;
        writer.write_all(&descriptor.as_slice()).await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, fields(name = %record.name))]
    async fn write_central_directory_record(writer: &mut AsyncOffsetWriter<W>, record: &EntryRecord) -> Result<()> {
        // The ZIP64 extra field is always present, regardless of whether any
        // individual value exceeds 32-bit range, so every 32-bit size/offset
        // field in the fixed header carries the sentinel.
        let extra = Zip64ExtendedInformation {
            uncompressed_size: record.uncompressed_size,
            compressed_size: record.compressed_size,
            relative_header_offset: record.lh_offset,
        };

        let cdh = CentralDirectoryHeader {
            v_made_by: version::as_made_by(),
            v_needed: version::as_needed_to_extract(),
            flags: record.flags,
            compression: COMPRESSION_STORED,
            mod_time: record.mod_time,
            mod_date: record.mod_date,
            crc: record.crc(),
            compressed_size: ZIP64_SIZE_SENTINEL,
            uncompressed_size: ZIP64_SIZE_SENTINEL,
            file_name_length: record.name.len() as u16,
            extra_field_length: ZIP64_EXTRA_FIELD_LENGTH as u16,
            file_comment_length: record.comment.len() as u16,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: if record.dir { DIRECTORY_ATTRIBUTE } else { 0 },
            lh_offset: ZIP64_SIZE_SENTINEL,
        };

        writer.write_all(&CDH_SIGNATURE.to_le_bytes()).await?;
        writer.write_all(&cdh.as_slice()).await?;
        writer.write_all(record.name.as_bytes()).await?;
        writer.write_all(&extra.as_slice()).await?;
        writer.write_all(record.comment.as_bytes()).await?;

        Ok(())
    }
}

/// Normalizes an entry's name: whitespace is trimmed and directory entries
/// get a trailing `/` appended if absent.
fn effective_name(entry: &ArchiveEntry) -> Result<String> {
    let mut name = entry.name.trim().to_owned();
    if entry.dir && !name.ends_with('/') {
        name.push('/');
    }
    if name.is_empty() {
        return Err(ZipError::EmptyEntryName);
    }

    Ok(name)
}
