// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jt-memstore: in-process backend for the jotter client.
//!
//! Implements the jt-core collaborator traits without a network:
//! a document store with live queries, an image host and an auth state.
//! Used by the `jotter` CLI and by tests; every piece supports fault
//! injection so failure paths can be exercised.

mod auth;
mod images;
mod seed;
mod store;

pub use auth::MemoryAuth;
pub use images::MemoryImageHost;
pub use seed::{load_seed, SeedDocument};
pub use store::MemoryStore;
