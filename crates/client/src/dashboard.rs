// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard: the live list plus the user's filter inputs.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use jt_core::{DocumentStore, Note, SortOrder};

use crate::config::Config;
use crate::projector::{paginate, project, Category, Page, ViewFilter};
use crate::session::SessionGate;
use crate::sync::{ListState, LiveListSynchronizer};

const NO_MATCHES: &str = "No matching notes found.";
const NO_MATCHES_HINT: &str = "Try using different keywords or clear your search.";
const NO_NOTES: &str = "No notes yet.";
const NO_NOTES_HINT: &str = "Create your first note to get started.";

pub struct Dashboard {
    sync: Arc<LiveListSynchronizer>,
    filter: ViewFilter,
    page: Option<Page>,
    categories: Vec<String>,
    session: Option<JoinHandle<()>>,
}

impl Dashboard {
    pub fn new(store: Arc<dyn DocumentStore>, config: &Config) -> Self {
        let sync =
            LiveListSynchronizer::with_sort_order(store, &config.collection, config.default_sort);
        Dashboard {
            sync: Arc::new(sync),
            filter: ViewFilter::default(),
            page: config.page_size.map(Page::first),
            categories: config.categories.clone(),
            session: None,
        }
    }

    /// Lets `gate` open and close the list as the user signs in and out.
    pub fn attach(&mut self, gate: &SessionGate) {
        if let Some(previous) = self.session.take() {
            previous.abort();
        }
        self.session = Some(gate.drive(Arc::clone(&self.sync)));
    }

    pub fn synchronizer(&self) -> &LiveListSynchronizer {
        &self.sync
    }

    pub fn watch(&self) -> watch::Receiver<ListState> {
        self.sync.subscribe()
    }

    pub fn state(&self) -> ListState {
        self.sync.state()
    }

    pub fn is_loading(&self) -> bool {
        self.sync.state().loading
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.reset_page();
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.category = category;
        self.reset_page();
    }

    pub fn set_page(&mut self, page: Option<Page>) {
        self.page = page;
    }

    fn reset_page(&mut self) {
        if let Some(page) = self.page.as_mut() {
            page.offset = 0;
        }
    }

    pub fn toggle_sort(&self) -> SortOrder {
        self.sync.toggle_sort()
    }

    /// Filtered notes, before paging.
    pub fn matching(&self) -> Vec<Note> {
        let state = self.sync.state();
        project(&state.notes, &self.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// What the dashboard shows right now, derived from the latest list.
    pub fn visible(&self) -> Vec<Note> {
        let state = self.sync.state();
        let view = project(&state.notes, &self.filter);
        let view = match self.page {
            Some(page) => paginate(&view, page),
            None => view,
        };
        view.into_iter().cloned().collect()
    }

    /// `"1 note"`, `"3 notes"`: counts every match, not just the current page.
    pub fn note_count_label(&self) -> String {
        let count = self.matching().len();
        format!("{} note{}", count, if count == 1 { "" } else { "s" })
    }

    pub fn empty_message(&self) -> &'static str {
        if self.filter.is_searching() {
            NO_MATCHES
        } else {
            NO_NOTES
        }
    }

    pub fn empty_hint(&self) -> &'static str {
        if self.filter.is_searching() {
            NO_MATCHES_HINT
        } else {
            NO_NOTES_HINT
        }
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            session.abort();
        }
        self.sync.close();
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
