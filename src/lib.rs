// Copyright (c) 2026 zipline64 developers
// MIT License

//! # zipline64
//!
//! An asynchronous streaming ZIP64 archive encoder.
//!
//! Entries are consumed one at a time, in archive order, and their content is
//! forwarded to the output sink chunk-by-chunk as it is read. Neither the
//! archive nor any single entry is ever buffered in memory, so the total
//! archive size is bounded only by the 64-bit offset space. Entries are always
//! written with the Stored method and ZIP64 trailer records, trading a few
//! bytes of overhead per entry for uniform reader compatibility.
//!
//! ## Example
//! ```no_run
//! # use zipline64::{ArchiveEntryBuilder, base::write::ZipEncoder};
//! # use zipline64::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut encoder = ZipEncoder::new(Vec::<u8>::new());
//!
//! let entry = ArchiveEntryBuilder::new(String::from("cat.txt")).build();
//! encoder.add_entry(entry, Some(&b"mjau"[..])).await?;
//!
//! let docs = ArchiveEntryBuilder::new(String::from("docs")).dir(true).build();
//! encoder.add_entry(docs, None::<&[u8]>).await?;
//!
//! encoder.finalize().await?;
//! #   Ok(())
//! # }
//! ```

pub mod base;
pub mod entry;
pub mod error;
pub(crate) mod spec;

#[cfg(feature = "tokio")]
pub mod tokio;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::entry::builder::ArchiveEntryBuilder;
pub use crate::entry::ArchiveEntry;
pub use crate::spec::date::ZipDateTime;
