// Copyright (c) 2026 zipline64 developers
// MIT License

use zipline64::ZipDateTime;

use std::io::Cursor;

use chrono::{TimeZone, Utc};

/// A caller-supplied timestamp so produced archives are reproducible across
/// test runs.
pub fn fixed_date() -> ZipDateTime {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap().into()
}

/// Parse a produced archive with an independent ZIP64-aware reader.
pub fn parse(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
    zip::ZipArchive::new(Cursor::new(bytes)).expect("produced archive should parse")
}
