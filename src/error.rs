//! Error types for configuration resolution

use std::path::PathBuf;

/// Result type for flow-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, stacking or resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required namespace has no loadable file
    #[error("Problem loading configuration file for namespace '{namespace}' at path '{}'", .path.display())]
    NotFound { namespace: String, path: PathBuf },

    /// Neither a dedicated file nor a generic file handles the flow
    #[error("No configuration file found for handling flow_id '{flow}'")]
    FlowNotFound { flow: String },

    /// More than one generic file claims the flow
    #[error("More than one configuration file was found for handling flow_id '{flow}' ({})", join_paths(.paths))]
    AmbiguousFlow { flow: String, paths: Vec<PathBuf> },

    /// Flow ID normalization collapsed to an empty string
    #[error(
        "Flow ID normalized '{filename}' to a blank value, please check filename and process for potential unexpected behavior"
    )]
    Normalization { filename: String },

    /// Shortcut key does not follow the `cm:...` grammar
    #[error("Key '{key}' is not a valid ConfigManager shortcut key: {reason}")]
    MalformedKey { key: String, reason: String },

    /// Lookup miss on a merged configuration
    #[error("Key '{0}' not present")]
    MissingKey(String),

    /// A configuration file could not be parsed
    #[error("Failed parsing '{}' at line {line}: {message}", .path.display())]
    Parse { path: PathBuf, line: usize, message: String },

    /// File store I/O failure
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid file mask
    #[error(transparent)]
    Glob(#[from] globset::Error),

    /// Tool settings could not be loaded
    #[error(transparent)]
    Settings(#[from] Box<figment::Error>),
}

impl Error {
    /// True for the variants that mean "no source could be found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::FlowNotFound { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Settings(Box::new(err))
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(",")
}
