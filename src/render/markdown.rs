use super::Formatter;
use crate::error::ActdocsResult;
use crate::manifest::{ActionDoc, Manifest, SectionKind, WorkflowDoc};

const EMPTY_SECTION: &str = "N/A";

const ACTION_INPUTS_HEADER: &str = "| Name | Description | Default | Required |\n\
                                    | :--- | :---------- | :------ | :------: |";
const WORKFLOW_INPUTS_HEADER: &str = "| Name | Description | Type | Default | Required |\n\
                                      | :--- | :---------- | :--- | :------ | :------: |";
const SECRETS_HEADER: &str = "| Name | Description | Required |\n\
                              | :--- | :---------- | :------: |";
const OUTPUTS_HEADER: &str = "| Name | Description |\n\
                              | :--- | :---------- |";
const PERMISSIONS_HEADER: &str = "| Scope | Access |\n\
                                  | :--- | :---- |";

/// Markdown tables, one `##` heading per section.
pub struct MarkdownFormatter {
    omit: bool,
}

/// What a section holds before the heading is attached.
enum SectionBody {
    Empty,
    Filled(String),
}

impl MarkdownFormatter {
    pub fn new(omit: bool) -> Self {
        Self { omit }
    }

    fn render(&self, manifest: &Manifest, kind: SectionKind) -> Option<String> {
        let body = match manifest {
            Manifest::Action(doc) => action_body(doc, kind)?,
            Manifest::Workflow(doc) => workflow_body(doc, kind)?,
        };
        let text = match body {
            SectionBody::Empty if self.omit => return None,
            SectionBody::Empty => EMPTY_SECTION.to_string(),
            SectionBody::Filled(text) => text,
        };
        let section = format!("## {}\n\n{}", kind.title(), text);
        Some(section.trim_end().to_string())
    }
}

impl Formatter for MarkdownFormatter {
    fn document(&self, manifest: &Manifest) -> ActdocsResult<String> {
        let sections = manifest
            .sections()
            .iter()
            .filter_map(|kind| self.render(manifest, *kind))
            .collect::<Vec<_>>();
        Ok(sections.join("\n\n").trim_end().to_string())
    }

    fn section(&self, manifest: &Manifest, kind: SectionKind) -> ActdocsResult<Option<String>> {
        Ok(self.render(manifest, kind))
    }
}

fn action_body(doc: &ActionDoc, kind: SectionKind) -> Option<SectionBody> {
    let body = match kind {
        SectionKind::Description if doc.description.is_absent() => SectionBody::Empty,
        SectionKind::Description => SectionBody::Filled(doc.description.heading_body()),
        SectionKind::Inputs => table(
            ACTION_INPUTS_HEADER,
            doc.inputs.iter().map(|input| {
                vec![
                    input.name.clone(),
                    input.description.description_cell(),
                    input.default.code_cell(),
                    input.required.required_cell().to_string(),
                ]
            }),
        ),
        SectionKind::Outputs => table(
            OUTPUTS_HEADER,
            doc.outputs.iter().map(|output| {
                vec![output.name.clone(), output.description.description_cell()]
            }),
        ),
        SectionKind::Secrets | SectionKind::Permissions => return None,
    };
    Some(body)
}

fn workflow_body(doc: &WorkflowDoc, kind: SectionKind) -> Option<SectionBody> {
    let body = match kind {
        SectionKind::Inputs => table(
            WORKFLOW_INPUTS_HEADER,
            doc.inputs.iter().map(|input| {
                vec![
                    input.name.clone(),
                    input.description.description_cell(),
                    input.input_type.code_cell(),
                    input.default.code_cell(),
                    input.required.required_cell().to_string(),
                ]
            }),
        ),
        SectionKind::Secrets => table(
            SECRETS_HEADER,
            doc.secrets.iter().map(|secret| {
                vec![
                    secret.name.clone(),
                    secret.description.description_cell(),
                    secret.required.required_cell().to_string(),
                ]
            }),
        ),
        SectionKind::Outputs => table(
            OUTPUTS_HEADER,
            doc.outputs.iter().map(|output| {
                vec![output.name.clone(), output.description.description_cell()]
            }),
        ),
        SectionKind::Permissions => table(
            PERMISSIONS_HEADER,
            doc.permissions
                .iter()
                .map(|permission| vec![permission.scope.clone(), permission.access.clone()]),
        ),
        SectionKind::Description => return None,
    };
    Some(body)
}

fn table<I>(header: &str, rows: I) -> SectionBody
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::new();
    for cells in rows {
        out.push('\n');
        out.push_str(&format!("| {} |", cells.join(" | ")));
    }
    if out.is_empty() {
        return SectionBody::Empty;
    }
    SectionBody::Filled(format!("{header}{out}"))
}
