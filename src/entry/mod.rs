// Copyright (c) 2026 zipline64 developers
// MIT License

pub mod builder;

use crate::spec::date::ZipDateTime;

#[cfg(doc)]
use crate::base::write::ZipEncoder;

/// Stores the metadata of a single archive member.
///
/// The entry's content is not part of this value; an optional byte source is
/// handed to [`ZipEncoder::add_entry()`] alongside it. Directory entries
/// never carry content and are stored with a trailing `/` appended to their
/// name if absent.
///
/// # Builder pattern
/// An [`ArchiveEntry`] is immutable once constructed; use
/// [`builder::ArchiveEntryBuilder`] to create one.
#[derive(Clone, Debug)]
pub struct ArchiveEntry {
    pub(crate) name: String,
    pub(crate) dir: bool,
    pub(crate) last_modification_date: ZipDateTime,
    pub(crate) comment: String,
}

impl ArchiveEntry {
    /// Returns the entry's name as supplied, before directory normalization.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the entry marks a directory.
    pub fn dir(&self) -> bool {
        self.dir
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> &ZipDateTime {
        &self.last_modification_date
    }

    /// Returns the entry's file comment.
    pub fn comment(&self) -> &str {
        &self.comment
    }
}
