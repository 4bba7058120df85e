// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Seed files: one `{"id": ..., "fields": {...}}` document per line.

use std::path::Path;

use serde::Deserialize;

use jt_core::{jsonl, Document, FieldMap, NoteId, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct SeedDocument {
    pub id: String,
    #[serde(default)]
    pub fields: FieldMap,
}

impl From<SeedDocument> for Document {
    fn from(seed: SeedDocument) -> Self {
        Document {
            id: NoteId::new(seed.id),
            fields: seed.fields,
        }
    }
}

/// Reads a seed file. A missing file yields no documents.
pub fn load_seed(path: &Path) -> Result<Vec<SeedDocument>> {
    jsonl::read_all(path)
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
