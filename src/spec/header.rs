// Copyright (c) 2026 zipline64 developers
// MIT License

//! Named record types for every binary structure this crate emits.
//!
//! Each record is serialized by an `as_slice()` implementation in
//! [`crate::spec::render`] with the exact field order, width and little-endian
//! byte order mandated by the ZIP appnote. Keeping the layouts as named
//! structs rather than magic-number indexing is deliberate; a transposed
//! field here corrupts every archive produced.

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.7)
pub struct LocalFileHeader {
    pub version: u16,
    pub flags: GeneralPurposeFlag,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.4)
#[derive(Copy, Clone, Debug)]
pub struct GeneralPurposeFlag {
    pub encrypted: bool,
    pub data_descriptor: bool,
    pub filename_unicode: bool,
}

/// The 12 bytes trailing an entry's content, following the descriptor
/// signature (4.3.9).
///
/// Streamed entries always defer their true sizes to the central directory's
/// ZIP64 extra field, so both size fields here carry the 32-bit sentinel.
pub struct DataDescriptor {
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.12)
pub struct CentralDirectoryHeader {
    pub v_made_by: u16,
    pub v_needed: u16,
    pub flags: GeneralPurposeFlag,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
    pub file_comment_length: u16,
    pub disk_start: u16,
    pub inter_attr: u16,
    pub exter_attr: u32,
    pub lh_offset: u32,
}

/// The ZIP64 extended information extra field as written into every central
/// directory record (4.5.3).
///
/// All three wide fields are always present, in this order, so the declared
/// data size is a constant 24 bytes.
pub struct Zip64ExtendedInformation {
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    pub relative_header_offset: u64,
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.14)
#[derive(Debug, PartialEq)]
pub struct Zip64EndOfCentralDirectoryRecord {
    /// Record length minus the signature and this size field; a constant 44
    /// since the PKWare-reserved extensible sector is never written.
    pub size_of_record: u64,
    pub version_made_by: u16,
    pub version_needed: u16,
    pub disk_number: u32,
    pub disk_with_start_of_cd: u32,
    pub entries_on_disk: u64,
    pub total_entries: u64,
    pub directory_size: u64,
    pub directory_offset: u64,
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.15)
#[derive(Debug, PartialEq)]
pub struct Zip64EndOfCentralDirectoryLocator {
    pub eocdr_disk: u32,
    pub eocdr_offset: u64,
    pub total_disks: u32,
}

/// The legacy end of central directory record (4.3.16).
///
/// Emitted purely so readers that scan backwards for its signature find a
/// valid tail record; every numeric field carries the ZIP64 sentinel that
/// redirects them to the locator.
#[derive(Debug)]
pub struct EndOfCentralDirectoryHeader {
    pub disk_num: u16,
    pub start_cent_dir_disk: u16,
    pub num_of_entries_disk: u16,
    pub num_of_entries: u16,
    pub size_cent_dir: u32,
    pub cent_dir_offset: u32,
    pub file_comm_length: u16,
}
