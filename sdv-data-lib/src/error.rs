use thiserror::Error;

/// Errors raised at the file boundary of the pipeline.
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading or writing a file failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A source file is not valid JSON
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// A source file parsed, but its top level is not an object
    #[error("Expected a JSON object at the top level of {path}")]
    NotAnObject { path: String },

    /// An output collection could not be serialized
    #[error("Could not serialize {name}: {source}")]
    Serialize {
        name: String,
        source: serde_json::Error,
    },
}

impl DataError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
