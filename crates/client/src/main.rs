// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use jotter::Cli;

fn main() {
    let cli = Cli::parse();
    jotter::logging::setup_logging(cli.verbose);
    if let Err(e) = jotter::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
