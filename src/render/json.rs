use super::Formatter;
use crate::error::ActdocsResult;
use crate::manifest::{Manifest, SectionKind};
use serde::Serialize;

/// Pretty JSON (two-space indent). Empty sections stay as `[]` and absent
/// scalars as `null`, so omit mode does not apply.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn document(&self, manifest: &Manifest) -> ActdocsResult<String> {
        match manifest {
            Manifest::Action(doc) => encode(doc),
            Manifest::Workflow(doc) => encode(doc),
        }
    }

    fn section(&self, manifest: &Manifest, kind: SectionKind) -> ActdocsResult<Option<String>> {
        let encoded = match (manifest, kind) {
            (Manifest::Action(doc), SectionKind::Description) => encode(&doc.description)?,
            (Manifest::Action(doc), SectionKind::Inputs) => encode(&doc.inputs)?,
            (Manifest::Action(doc), SectionKind::Outputs) => encode(&doc.outputs)?,
            (Manifest::Workflow(doc), SectionKind::Inputs) => encode(&doc.inputs)?,
            (Manifest::Workflow(doc), SectionKind::Secrets) => encode(&doc.secrets)?,
            (Manifest::Workflow(doc), SectionKind::Outputs) => encode(&doc.outputs)?,
            (Manifest::Workflow(doc), SectionKind::Permissions) => encode(&doc.permissions)?,
            _ => return Ok(None),
        };
        Ok(Some(encoded))
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> ActdocsResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
