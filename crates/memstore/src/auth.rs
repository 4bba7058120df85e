// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sign-in state backed by a watch channel.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use jt_core::{Identity, IdentitySource};

/// Shared auth state. Clones observe the same session.
#[derive(Clone)]
pub struct MemoryAuth {
    tx: Arc<watch::Sender<Option<Identity>>>,
}

impl MemoryAuth {
    /// Starts signed out.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        MemoryAuth { tx: Arc::new(tx) }
    }

    pub fn signed_in(identity: Identity) -> Self {
        let auth = MemoryAuth::new();
        auth.sign_in(identity);
        auth
    }

    pub fn sign_in(&self, identity: Identity) {
        info!("signed in as {}", identity);
        self.tx.send_replace(Some(identity));
    }

    pub fn sign_out(&self) {
        info!("signed out");
        self.tx.send_replace(None);
    }
}

impl Default for MemoryAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySource for MemoryAuth {
    fn current(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
