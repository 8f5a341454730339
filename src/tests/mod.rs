// Copyright (c) 2026 zipline64 developers
// MIT License

use std::sync::Once;

pub(crate) mod write;

static LOGGER: Once = Once::new();

/// Initialise the test logger once per process, so failing tests surface any
/// `tracing`/`log` output.
pub(crate) fn init_logger() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
