// Copyright (c) 2026 zipline64 developers
// MIT License

//! A set of [`tokio`]-specific type aliases and features.

pub mod write;
