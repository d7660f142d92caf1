//! Row ordering applied between parsing and rendering.
use crate::manifest::{
    ActionInput, ActionOutput, Manifest, Permission, WorkflowInput, WorkflowOutput, WorkflowSecret,
};

/// Ordering policy. Without a sort flag rows stay in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Required rows first, each group by name; other sections by name.
    RequiredFirst,
    ByName,
    /// Stable partition of required rows ahead of the rest.
    ByRequired,
    #[default]
    None,
}

impl SortMode {
    /// Resolve the sort flags; when several are set the first in this order wins.
    pub fn from_flags(sort: bool, sort_by_name: bool, sort_by_required: bool) -> Self {
        if sort {
            Self::RequiredFirst
        } else if sort_by_name {
            Self::ByName
        } else if sort_by_required {
            Self::ByRequired
        } else {
            Self::None
        }
    }
}

trait Row {
    fn sort_name(&self) -> &str;

    fn is_required(&self) -> bool {
        false
    }
}

impl Row for ActionInput {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required.is_true()
    }
}

impl Row for ActionOutput {
    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl Row for WorkflowInput {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required.is_true()
    }
}

impl Row for WorkflowSecret {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required.is_true()
    }
}

impl Row for WorkflowOutput {
    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl Row for Permission {
    fn sort_name(&self) -> &str {
        &self.scope
    }
}

pub fn sort_manifest(manifest: &mut Manifest, mode: SortMode) {
    tracing::debug!(?mode, "sorting manifest");
    match manifest {
        Manifest::Action(doc) => {
            sort_partitioned(&mut doc.inputs, mode);
            sort_plain(&mut doc.outputs, mode);
        }
        Manifest::Workflow(doc) => {
            sort_partitioned(&mut doc.inputs, mode);
            sort_partitioned(&mut doc.secrets, mode);
            sort_plain(&mut doc.outputs, mode);
            sort_plain(&mut doc.permissions, mode);
        }
    }
}

/// Sections whose rows carry a `required` flag.
fn sort_partitioned<T: Row>(rows: &mut Vec<T>, mode: SortMode) {
    match mode {
        SortMode::RequiredFirst => {
            let (mut required, mut optional) = split_required(rows);
            by_name(&mut required);
            by_name(&mut optional);
            rows.extend(required);
            rows.extend(optional);
        }
        SortMode::ByName => by_name(rows),
        SortMode::ByRequired => {
            let (required, optional) = split_required(rows);
            rows.extend(required);
            rows.extend(optional);
        }
        SortMode::None => {}
    }
}

fn sort_plain<T: Row>(rows: &mut [T], mode: SortMode) {
    match mode {
        SortMode::RequiredFirst | SortMode::ByName => by_name(rows),
        SortMode::ByRequired | SortMode::None => {}
    }
}

/// Drain `rows` into required and optional groups, each in original order.
fn split_required<T: Row>(rows: &mut Vec<T>) -> (Vec<T>, Vec<T>) {
    rows.drain(..).partition(|row| row.is_required())
}

fn by_name<T: Row>(rows: &mut [T]) {
    rows.sort_by(|a, b| a.sort_name().cmp(b.sort_name()));
}
