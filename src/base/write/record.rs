// Copyright (c) 2026 zipline64 developers
// MIT License

use crate::entry::ArchiveEntry;
use crate::spec::header::GeneralPurposeFlag;

use crc32fast::Hasher;

/// The per-entry write lifecycle.
///
/// The checksum accumulator only exists while content is streaming, and the
/// finalized CRC only exists once the data descriptor has been formed; there
/// is no state in which a half-updated checksum could leak into a record.
pub(crate) enum EntryPhase {
    HeaderWritten,
    StreamingContent(Hasher),
    FooterWritten { crc: u32 },
}

/// Accumulated state for one archive member, created when its local file
/// header is emitted and consumed when the central directory is written.
pub(crate) struct EntryRecord {
    /// Effective name; directory entries carry a trailing `/`.
    pub(crate) name: String,
    pub(crate) dir: bool,
    pub(crate) comment: String,
    pub(crate) flags: GeneralPurposeFlag,
    pub(crate) mod_time: u16,
    pub(crate) mod_date: u16,
    /// Byte offset of this entry's local file header within the archive.
    pub(crate) lh_offset: u64,
    pub(crate) uncompressed_size: u64,
    /// Tracks the uncompressed counter exactly, since entries are Stored.
    pub(crate) compressed_size: u64,
    pub(crate) phase: EntryPhase,
}

impl EntryRecord {
    pub(crate) fn new(name: String, entry: &ArchiveEntry, lh_offset: u64) -> Self {
        // Streamed sizes and UTF-8 names are signalled unconditionally.
        let flags = GeneralPurposeFlag { encrypted: false, data_descriptor: true, filename_unicode: true };

        Self {
            name,
            dir: entry.dir,
            comment: entry.comment.clone(),
            flags,
            mod_time: entry.last_modification_date.time_word(),
            mod_date: entry.last_modification_date.date_word(),
            lh_offset,
            uncompressed_size: 0,
            compressed_size: 0,
            phase: EntryPhase::HeaderWritten,
        }
    }

    /// Transitions `HeaderWritten` into `StreamingContent` with a fresh
    /// checksum accumulator.
    pub(crate) fn begin_content(&mut self) {
        if let EntryPhase::HeaderWritten = self.phase {
            self.phase = EntryPhase::StreamingContent(Hasher::new());
        }
    }

    /// Folds one content chunk into the running checksum and advances both
    /// length counters.
    pub(crate) fn absorb(&mut self, chunk: &[u8]) {
        if let EntryPhase::StreamingContent(hasher) = &mut self.phase {
            hasher.update(chunk);
        }

        let length = chunk.len() as u64;
        self.uncompressed_size += length;
        self.compressed_size += length;
    }

    /// Transitions into `FooterWritten`, finalizing the checksum. Returns the
    /// CRC-32 of everything absorbed; zero if no content phase ever ran.
    pub(crate) fn finish_content(&mut self) -> u32 {
        let crc = match std::mem::replace(&mut self.phase, EntryPhase::HeaderWritten) {
            EntryPhase::StreamingContent(hasher) => hasher.finalize(),
            EntryPhase::FooterWritten { crc } => crc,
            EntryPhase::HeaderWritten => 0,
        };

        self.phase = EntryPhase::FooterWritten { crc };
        crc
    }

    /// Returns the finalized CRC-32; zero while content is still streaming.
    pub(crate) fn crc(&self) -> u32 {
        match self.phase {
            EntryPhase::FooterWritten { crc } => crc,
            _ => 0,
        }
    }
}
