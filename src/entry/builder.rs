// Copyright (c) 2026 zipline64 developers
// MIT License

use crate::entry::ArchiveEntry;
use crate::spec::date::ZipDateTime;

use chrono::Utc;

/// A builder for [`ArchiveEntry`].
pub struct ArchiveEntryBuilder {
    name: String,
    dir: bool,
    last_modification_date: Option<ZipDateTime>,
    comment: Option<String>,
}

impl ArchiveEntryBuilder {
    /// Constructs a new builder from the entry's name, its only mandatory
    /// field.
    pub fn new(name: String) -> Self {
        Self { name, dir: false, last_modification_date: None, comment: None }
    }

    /// Sets the entry's name.
    pub fn name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Marks the entry as a directory.
    pub fn dir(mut self, dir: bool) -> Self {
        self.dir = dir;
        self
    }

    /// Sets the entry's last modification date; defaults to the current time.
    pub fn last_modification_date(mut self, date: ZipDateTime) -> Self {
        self.last_modification_date = Some(date);
        self
    }

    /// Sets the entry's file comment.
    pub fn comment(mut self, comment: String) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Consumes this builder and returns a final [`ArchiveEntry`].
    pub fn build(self) -> ArchiveEntry {
        self.into()
    }
}

impl From<ArchiveEntryBuilder> for ArchiveEntry {
    fn from(builder: ArchiveEntryBuilder) -> Self {
        let last_modification_date = builder.last_modification_date.unwrap_or_else(|| Utc::now().into());
        let comment = builder.comment.unwrap_or_default();

        Self { name: builder.name, dir: builder.dir, last_modification_date, comment }
    }
}
