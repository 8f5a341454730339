// Copyright (c) 2026 zipline64 developers
// MIT License

use chrono::{DateTime, Datelike, Timelike, Utc};

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.6)
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

/// A date and time stored as per the MS-DOS representation used by ZIP files.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Returns the packed date word as stored in headers.
    pub(crate) fn date_word(&self) -> u16 {
        self.date
    }

    /// Returns the packed time word as stored in headers.
    pub(crate) fn time_word(&self) -> u16 {
        self.time
    }
}

impl From<&DateTime<Utc>> for ZipDateTime {
    fn from(dt: &DateTime<Utc>) -> Self {
        let year = (((dt.year() - 1980) << 9) & 0xFE00) as u16;
        let month = ((dt.month() << 5) & 0x1E0) as u16;
        let day = (dt.day() & 0x1F) as u16;

        let hour = ((dt.hour() << 11) & 0xF800) as u16;
        let minute = ((dt.minute() << 5) & 0x7E0) as u16;
        let second = ((dt.second() >> 1) & 0x1F) as u16;

        let date = year | month | day;
        let time = hour | minute | second;

        ZipDateTime { date, time }
    }
}

impl From<DateTime<Utc>> for ZipDateTime {
    fn from(dt: DateTime<Utc>) -> Self {
        (&dt).into()
    }
}
