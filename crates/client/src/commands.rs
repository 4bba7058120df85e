// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations for the `jotter` binary.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use jt_core::display::{display_title, relative_time, tag_summary};
use jt_core::{Error as CoreError, Identity, IdentitySource, Note, NoteId};
use jt_memstore::{load_seed, MemoryAuth, MemoryStore};

use crate::actions::NoteActions;
use crate::cli::{Cli, Command, OutputFormat, SortArg};
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::error::{Error, Result};
use crate::projector::{Page, ViewFilter};
use crate::session::SessionGate;

/// Backend and session the commands run against.
struct Context {
    store: MemoryStore,
    auth: MemoryAuth,
    config: Config,
}

impl Context {
    async fn open(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;

        let store = MemoryStore::new();
        if let Some(seed) = &cli.seed {
            let documents = load_seed(seed)?;
            debug!("loaded {} seed documents from {}", documents.len(), seed.display());
            store
                .seed(
                    &config.collection,
                    documents.into_iter().map(Into::into).collect(),
                )
                .await;
        }

        let auth = MemoryAuth::new();
        if let Some(user) = &cli.user {
            auth.sign_in(Identity::new(user.as_str()));
        }

        Ok(Context {
            store,
            auth,
            config,
        })
    }

    fn gate(&self) -> SessionGate {
        SessionGate::new(Arc::new(self.auth.clone()))
    }

    fn actions(&self) -> NoteActions {
        NoteActions::new(Arc::new(self.store.clone()), self.gate(), &self.config)
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path),
            None => Ok(Config::default()),
        },
    }
}

/// Runs one command to completion.
pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(execute(cli))
}

async fn execute(cli: Cli) -> Result<()> {
    let ctx = Context::open(&cli).await?;
    match cli.command {
        Command::List {
            search,
            category,
            sort,
            limit,
            output,
        } => list(&ctx, search, &category, sort, limit, output).await,
        Command::Show { id, output } => show(&ctx, &NoteId::new(id), output).await,
        Command::Share { id } => share(&ctx, &NoteId::new(id)).await,
    }
}

async fn list(
    ctx: &Context,
    search: String,
    category: &str,
    sort: Option<SortArg>,
    limit: Option<usize>,
    output: OutputFormat,
) -> Result<()> {
    let gate = ctx.gate();
    gate.require()?;

    let mut config = ctx.config.clone();
    if let Some(sort) = sort {
        config.default_sort = sort.into();
    }

    let mut dashboard = Dashboard::new(Arc::new(ctx.store.clone()), &config);
    dashboard.set_search(search);
    dashboard.set_category(ViewFilter::parse_category(category));
    if let Some(limit) = limit {
        dashboard.set_page(Some(Page::first(limit)));
    }
    dashboard.attach(&gate);

    let mut rx = dashboard.watch();
    let state = rx
        .wait_for(|s| s.owner.is_some() && !s.loading)
        .await
        .map_err(|_| CoreError::SubscriptionClosed)?
        .clone();
    if let Some(message) = state.error {
        return Err(CoreError::Store(message).into());
    }

    let notes = dashboard.visible();
    match output {
        OutputFormat::Json => println!("{}", to_json(&notes)?),
        OutputFormat::Text => {
            if notes.is_empty() {
                println!("{}", dashboard.empty_message());
            } else {
                println!("{}", dashboard.note_count_label());
                let now = Utc::now();
                for note in &notes {
                    println!("{}", format_note_line(note, now));
                }
            }
        }
    }
    Ok(())
}

async fn show(ctx: &Context, id: &NoteId, output: OutputFormat) -> Result<()> {
    let viewer = ctx.auth.current();
    let note = ctx.actions().view_shared(id, viewer.as_ref()).await?;
    match output {
        OutputFormat::Json => println!("{}", to_json(&note)?),
        OutputFormat::Text => {
            let shared = !viewer.as_ref().is_some_and(|v| note.is_owned_by(v));
            print!("{}", format_note_detail(&note, shared, Utc::now()));
        }
    }
    Ok(())
}

async fn share(ctx: &Context, id: &NoteId) -> Result<()> {
    let actions = ctx.actions();
    let viewer = ctx.auth.current();
    let note = actions.view_shared(id, viewer.as_ref()).await?;
    if !note.is_public {
        return Err(Error::NotShared(id.to_string()));
    }
    println!("{}", actions.share_link(id));
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Core(CoreError::from(e)))
}

/// One dashboard row: `id  title  [pinned]  #tag +N  (when)`.
pub(crate) fn format_note_line(note: &Note, now: DateTime<Utc>) -> String {
    let mut line = format!("{}  {}", note.id, display_title(note));
    if note.pinned {
        line.push_str("  [pinned]");
    }
    if let Some((first, more)) = tag_summary(&note.tags) {
        line.push_str("  #");
        line.push_str(first);
        if let Some(more) = more {
            line.push(' ');
            line.push_str(&more);
        }
    }
    line.push_str(&format!("  ({})", relative_time(note.updated_at, now)));
    line
}

pub(crate) fn format_note_detail(note: &Note, shared: bool, now: DateTime<Utc>) -> String {
    let mut out = format!("{}\n", display_title(note));
    if shared {
        out.push_str("(shared note)\n");
    }
    out.push_str(&format!("id: {}\n", note.id));
    out.push_str(&format!("updated: {}\n", relative_time(note.updated_at, now)));
    if let Some(category) = &note.category {
        out.push_str(&format!("category: {}\n", category));
    }
    if !note.tags.is_empty() {
        let tags: Vec<&str> = note.tags.iter().collect();
        out.push_str(&format!("tags: {}\n", tags.join(", ")));
    }
    out.push_str(&format!("color: {}\n", note.color));
    if note.pinned {
        out.push_str("pinned: yes\n");
    }
    if note.is_public {
        out.push_str("public: yes\n");
    }
    for url in &note.image_urls {
        out.push_str(&format!("image: {}\n", url));
    }
    if let Some(content) = note.content.as_deref().filter(|c| !c.is_empty()) {
        out.push('\n');
        out.push_str(content);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
