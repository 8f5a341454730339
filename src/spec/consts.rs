// Copyright (c) 2026 zipline64 developers
// MIT License

// Local file header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.7)
pub const LFH_SIGNATURE: u32 = 0x4034b50;

// Data descriptor constants (4.3.9)
pub const DATA_DESCRIPTOR_SIGNATURE: u32 = 0x8074b50;

// Central directory header constants (4.3.12)
pub const CDH_SIGNATURE: u32 = 0x2014b50;

// ZIP64 end of central directory record constants (4.3.14)
pub const ZIP64_EOCDR_SIGNATURE: u32 = 0x6064b50;
/// The record length reported inside the record itself excludes the leading
/// signature and the 8-byte size field.
pub const ZIP64_EOCDR_SIZE_OF_RECORD: u64 = 44;

// ZIP64 end of central directory locator constants (4.3.15)
pub const ZIP64_EOCDL_SIGNATURE: u32 = 0x7064b50;

// End of central directory record constants (4.3.16)
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;

// ZIP64 extended information extra field (4.5.3); always emitted with
// uncompressed size, compressed size and local header offset present.
pub const ZIP64_EXTRA_FIELD_HEADER_ID: u16 = 0x0001;
pub const ZIP64_EXTRA_FIELD_DATA_SIZE: u16 = 24;
pub const ZIP64_EXTRA_FIELD_LENGTH: usize = 28;

/// Sentinel written into 32-bit size/offset fields whose true value lives in
/// a ZIP64 structure.
pub const ZIP64_SIZE_SENTINEL: u32 = 0xFFFF_FFFF;
/// Sentinel written into 16-bit count fields whose true value lives in the
/// ZIP64 end of central directory record.
pub const ZIP64_COUNT_SENTINEL: u16 = 0xFFFF;

/// The only compression method this crate writes.
pub const COMPRESSION_STORED: u16 = 0;

/// MS-DOS directory attribute bit, used as the external file attribute for
/// directory entries.
pub const DIRECTORY_ATTRIBUTE: u32 = 16;
