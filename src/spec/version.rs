// Copyright (c) 2026 zipline64 developers
// MIT License

/// ZIP specification revision 4.5, the first with ZIP64 support.
///
/// Every entry is written in streamed ZIP64 mode, so the signalled version is
/// fixed and independent of entry type or size.
const ZIP64_SPECIFICATION_VERSION: u16 = 45;

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.2)
pub fn as_made_by() -> u16 {
    ZIP64_SPECIFICATION_VERSION
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.3)
pub fn as_needed_to_extract() -> u16 {
    ZIP64_SPECIFICATION_VERSION
}
