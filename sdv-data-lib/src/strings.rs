//! Localization placeholder resolution.
//!
//! Raw records carry display text as placeholders such as
//! `[LocalizedText Strings\Objects:Parsnip_Name]`. Brackets are dropped, the
//! part after the last backslash is split on `:` into a table tag and a key,
//! and the key is looked up in the matching string table.

use std::collections::HashMap;

use serde_json::Value;

use crate::store::{JsonStore, RawRecords};

/// The string tables a placeholder can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringTable {
    /// Base object names and descriptions
    Objects,
    /// Strings added with the 1.6 content update
    NewContent,
    /// Strings extracted from the game's C# sources
    CsFiles,
}

impl StringTable {
    pub const ALL: [StringTable; 3] = [Self::Objects, Self::NewContent, Self::CsFiles];

    /// File name of the table inside the strings directory; also the tag used
    /// inside placeholders.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Objects => "Objects",
            Self::NewContent => "1_6_Strings",
            Self::CsFiles => "StringsFromCSFiles",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.file_name() == tag)
    }
}

/// Outcome of resolving one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The key was found in a known table.
    Found(String),
    /// The table is known but has no such key.
    Missing,
    /// The placeholder names no known table; carries the input unchanged.
    PassThrough(String),
}

impl Resolved {
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Found(s) | Self::PassThrough(s) => Some(s),
            Self::Missing => None,
        }
    }
}

/// The preloaded string tables.
#[derive(Debug, Clone, Default)]
pub struct StringTables {
    tables: HashMap<StringTable, RawRecords>,
}

impl StringTables {
    /// Load all three tables from the strings directory. A table that fails
    /// to load is empty, so every lookup into it misses.
    pub fn load(store: &JsonStore) -> Self {
        let dir = store.settings().strings_dir.clone();
        let mut tables = Self::default();
        for table in StringTable::ALL {
            tables.insert(table, store.load_or_empty(&dir, table.file_name()));
        }
        tables
    }

    pub fn insert(&mut self, table: StringTable, strings: RawRecords) {
        self.tables.insert(table, strings);
    }

    /// Resolve a placeholder. Never fails: malformed input passes through.
    pub fn resolve_placeholder(&self, placeholder: &str) -> Resolved {
        let stripped: String = placeholder.chars().filter(|c| !matches!(c, '[' | ']')).collect();
        let reference = stripped.rsplit('\\').next().unwrap_or_default();
        let mut parts = reference.split(':');
        let tag = parts.next().unwrap_or_default();

        let Some(table) = StringTable::from_tag(tag) else {
            return Resolved::PassThrough(placeholder.to_string());
        };

        let found = parts
            .next()
            .and_then(|key| self.tables.get(&table)?.get(key))
            .and_then(Value::as_str);
        match found {
            Some(s) => Resolved::Found(s.to_string()),
            None => Resolved::Missing,
        }
    }

    /// Resolve a placeholder to the text written into a normalized record.
    pub fn resolve(&self, placeholder: &str) -> Option<String> {
        self.resolve_placeholder(placeholder).into_option()
    }
}

#[cfg(test)]
#[path = "tests/strings_tests.rs"]
mod tests;
