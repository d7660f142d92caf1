//! Manifest loading: read a YAML file, decide whether it declares a custom
//! action or a reusable workflow, and decode it into the interface model.
//!
//! Classification runs on the raw text before any decoding so a manifest is
//! routed by the key that identifies it, not by whatever else it happens to
//! contain.
use crate::error::{ActdocsError, ActdocsResult};
use crate::util::read_text;
use std::path::Path;

mod action;
mod classify;
mod workflow;

pub use action::{ActionDoc, ActionInput, ActionOutput};
pub use classify::{classify, ManifestKind};
pub use workflow::{Permission, WorkflowDoc, WorkflowInput, WorkflowOutput, WorkflowSecret};

/// One top-level block of generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Description,
    Inputs,
    Secrets,
    Outputs,
    Permissions,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Inputs => "Inputs",
            Self::Secrets => "Secrets",
            Self::Outputs => "Outputs",
            Self::Permissions => "Permissions",
        }
    }

    /// Name used inside per-section marker comments.
    pub fn marker_name(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Inputs => "inputs",
            Self::Secrets => "secrets",
            Self::Outputs => "outputs",
            Self::Permissions => "permissions",
        }
    }
}

const ACTION_SECTIONS: &[SectionKind] = &[
    SectionKind::Description,
    SectionKind::Inputs,
    SectionKind::Outputs,
];

const WORKFLOW_SECTIONS: &[SectionKind] = &[
    SectionKind::Inputs,
    SectionKind::Secrets,
    SectionKind::Outputs,
    SectionKind::Permissions,
];

/// Parsed interface of a single manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum Manifest {
    Action(ActionDoc),
    Workflow(WorkflowDoc),
}

impl Manifest {
    pub fn kind(&self) -> ManifestKind {
        match self {
            Self::Action(_) => ManifestKind::Action,
            Self::Workflow(_) => ManifestKind::Workflow,
        }
    }

    /// Sections in output order.
    pub fn sections(&self) -> &'static [SectionKind] {
        match self {
            Self::Action(_) => ACTION_SECTIONS,
            Self::Workflow(_) => WORKFLOW_SECTIONS,
        }
    }
}

/// Read and parse the manifest at `path`.
pub fn load(path: &Path) -> ActdocsResult<Manifest> {
    let source = read_text(path)?;
    parse(path, &source)
}

/// Parse manifest text; `path` is only used to label errors.
pub fn parse(path: &Path, source: &str) -> ActdocsResult<Manifest> {
    let Some(kind) = classify(source) else {
        return Err(ActdocsError::UnknownManifest {
            path: path.to_path_buf(),
        });
    };
    tracing::debug!(?kind, path = %path.display(), "classified manifest");

    let decoded = match kind {
        ManifestKind::Action => action::parse(source).map(Manifest::Action),
        ManifestKind::Workflow => workflow::parse(source).map(Manifest::Workflow),
    };
    decoded.map_err(|source| ActdocsError::InvalidYaml {
        path: path.to_path_buf(),
        source,
    })
}
