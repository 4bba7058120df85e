// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Authentication state as seen by the client.

use tokio::sync::watch;

use crate::note::Identity;

/// Source of the signed-in identity.
///
/// `watch` hands out a receiver that is notified on every sign-in and
/// sign-out; `None` means nobody is signed in.
pub trait IdentitySource: Send + Sync {
    fn current(&self) -> Option<Identity>;

    fn watch(&self) -> watch::Receiver<Option<Identity>>;
}
