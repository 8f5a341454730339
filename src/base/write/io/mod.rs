// Copyright (c) 2026 zipline64 developers
// MIT License

pub(crate) mod offset;
