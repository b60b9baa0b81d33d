//! Loading raw JSON exports and writing the normalized dataset.
//!
//! All file I/O of the pipeline happens here. Load failures never escape:
//! [`JsonStore::load_or_empty`] logs them and hands back an empty object so
//! every normalizer simply sees zero records.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::DataError;
use crate::settings::Settings;

/// An object keyed by record identifier, in file order.
pub type RawRecords = Map<String, Value>;

/// Reads inputs from and writes outputs to the directories named in [`Settings`].
#[derive(Debug, Clone)]
pub struct JsonStore {
    settings: Settings,
}

impl JsonStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load one raw JSON file as an object.
    pub fn load(&self, dir: &str, name: &str) -> Result<RawRecords, DataError> {
        let path = self.settings.input_path(dir, name);
        let display = path.display().to_string();
        log::debug!("Loading raw JSON from {display}");

        let contents = fs::read_to_string(&path).map_err(|e| DataError::io(&display, e))?;
        match serde_json::from_str::<Value>(&contents).map_err(|e| DataError::parse(&display, e))? {
            Value::Object(map) => Ok(map),
            _ => Err(DataError::NotAnObject { path: display }),
        }
    }

    /// Load one raw JSON file, logging any failure and yielding an empty object.
    pub fn load_or_empty(&self, dir: &str, name: &str) -> RawRecords {
        self.load(dir, name).unwrap_or_else(|e| {
            log::error!("Failed to load {dir}/{name}: {e}");
            RawRecords::new()
        })
    }

    /// Serialize `value` as four-space-indented JSON to `<output_dir>/<name>.json`.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        name: &str,
        value: &T,
    ) -> Result<PathBuf, DataError> {
        let path = self.settings.output_path(name);
        let display = path.display().to_string();
        log::debug!("Writing parsed JSON to {display}");

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut ser).map_err(|e| DataError::Serialize {
            name: name.to_string(),
            source: e,
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DataError::io(parent.display().to_string(), e))?;
        }
        fs::write(&path, &buf).map_err(|e| DataError::io(&display, e))?;
        Ok(path)
    }
}
