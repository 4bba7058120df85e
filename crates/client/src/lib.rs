// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jotter - client side of a real-time notes application.
//!
//! The backend (document store, sign-in, image hosting) is reached only
//! through the collaborator traits of `jt-core`. On top of them this crate
//! builds the dashboard pipeline:
//!
//! - [`LiveListSynchronizer`] - one live query per signed-in owner, each push
//!   replacing the sorted note list
//! - [`projector`] - search, category and paging over that list
//! - [`SessionGate`] - opens and closes the list as the user signs in and out
//! - [`Dashboard`] - the three wired together with the user's filter inputs
//! - [`NoteActions`] and [`NoteEditor`] - every write, with stale results
//!   from dismissed views discarded
//!
//! ```rust,ignore
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//! let gate = SessionGate::new(Arc::new(auth));
//! let mut dashboard = Dashboard::new(Arc::clone(&store), &Config::default());
//! dashboard.attach(&gate);
//! dashboard.set_search("groceries");
//! let visible = dashboard.visible();
//! ```

mod cli;
mod commands;
#[cfg(test)]
mod test_helpers;

pub mod actions;
pub mod config;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod logging;
pub mod projector;
pub mod session;
pub mod sync;

pub use actions::NoteActions;
pub use cli::{Cli, Command, OutputFormat, SortArg};
pub use commands::run;
pub use config::Config;
pub use dashboard::Dashboard;
pub use editor::{EditorStatus, NoteEditor, Outcome, ViewGuard, ViewTicket};
pub use error::{Error, Result};
pub use projector::{paginate, project, Category, Page, ViewFilter};
pub use session::SessionGate;
pub use sync::{ListState, LiveListSynchronizer};
