// Copyright (c) 2026 zipline64 developers
// MIT License

pub(crate) mod consts;
pub(crate) mod date;
pub(crate) mod header;
pub(crate) mod render;
pub(crate) mod version;
