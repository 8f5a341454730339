// Copyright (c) 2026 zipline64 developers
// MIT License

//! A base runtime-agnostic implementation using `futures`'s IO types.

pub mod write;
