// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup for the `jotter` binary.
//!
//! `RUST_LOG` wins when set; otherwise only warnings are shown, or
//! everything from jotter at debug level with `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "jotter=debug,jt_core=debug,jt_memstore=debug"
    } else {
        "warn"
    }
}

/// Installs a stderr subscriber. Later calls are ignored.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
