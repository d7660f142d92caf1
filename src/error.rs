use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActdocsError {
    #[error("failed to {op} {}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid YAML in {}", .path.display())]
    InvalidYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "unknown manifest {}: expected a custom action (runs:) or a reusable workflow (workflow_call:)",
        .path.display()
    )]
    UnknownManifest { path: PathBuf },

    #[error("{} has `{}` without a matching end marker", .path.display(), .marker)]
    UnterminatedMarker { marker: String, path: PathBuf },

    #[error("failed to encode JSON")]
    Json(#[from] serde_json::Error),
}

pub type ActdocsResult<T> = Result<T, ActdocsError>;
