//! Reusable workflow schema (`on.workflow_call`) and its interface model.
use crate::nullable::NullableText;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Interface of a reusable workflow. Field order is the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDoc {
    pub inputs: Vec<WorkflowInput>,
    pub secrets: Vec<WorkflowSecret>,
    pub outputs: Vec<WorkflowOutput>,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInput {
    pub name: String,
    pub default: NullableText,
    pub description: NullableText,
    pub required: NullableText,
    #[serde(rename = "type")]
    pub input_type: NullableText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSecret {
    pub name: String,
    pub description: NullableText,
    pub required: NullableText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowOutput {
    pub name: String,
    pub description: NullableText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub scope: String,
    pub access: String,
}

/// Scope shown for the `read-all` / `write-all` shorthand.
const SHORTHAND_SCOPE: &str = "-";

#[derive(Deserialize)]
struct RawWorkflow {
    on: Option<RawTriggers>,
    permissions: Option<RawPermissions>,
}

#[derive(Deserialize)]
struct RawTriggers {
    workflow_call: Option<RawWorkflowCall>,
}

#[derive(Deserialize)]
struct RawWorkflowCall {
    inputs: Option<IndexMap<String, Option<RawInput>>>,
    secrets: Option<IndexMap<String, Option<RawSecret>>>,
    outputs: Option<IndexMap<String, Option<RawOutput>>>,
}

#[derive(Default, Deserialize)]
struct RawInput {
    #[serde(default)]
    default: NullableText,
    #[serde(default)]
    description: NullableText,
    #[serde(default)]
    required: NullableText,
    #[serde(default, rename = "type")]
    input_type: NullableText,
}

#[derive(Default, Deserialize)]
struct RawSecret {
    #[serde(default)]
    description: NullableText,
    #[serde(default)]
    required: NullableText,
}

#[derive(Deserialize)]
struct RawOutput {
    #[serde(default)]
    description: NullableText,
}

/// `permissions:` is either a shorthand string or a scope-to-access map.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPermissions {
    Shorthand(String),
    Scopes(IndexMap<String, String>),
}

impl RawPermissions {
    fn into_rows(self) -> Vec<Permission> {
        match self {
            Self::Shorthand(access) if access == "read-all" || access == "write-all" => {
                vec![Permission {
                    scope: SHORTHAND_SCOPE.to_string(),
                    access,
                }]
            }
            Self::Shorthand(access) => {
                tracing::debug!(%access, "dropping unrecognized permissions shorthand");
                Vec::new()
            }
            Self::Scopes(scopes) => scopes
                .into_iter()
                .map(|(scope, access)| Permission { scope, access })
                .collect(),
        }
    }
}

pub(super) fn parse(source: &str) -> Result<WorkflowDoc, serde_yaml::Error> {
    let raw: RawWorkflow = serde_yaml::from_str(source)?;
    let call = raw.on.and_then(|on| on.workflow_call);
    let (inputs, secrets, outputs) = match call {
        Some(call) => (
            call.inputs.unwrap_or_default(),
            call.secrets.unwrap_or_default(),
            call.outputs.unwrap_or_default(),
        ),
        None => Default::default(),
    };

    let inputs = inputs
        .into_iter()
        .map(|(name, entry)| {
            let entry = entry.unwrap_or_default();
            WorkflowInput {
                name,
                default: entry.default,
                description: entry.description,
                required: entry.required,
                input_type: entry.input_type,
            }
        })
        .collect::<Vec<_>>();

    let secrets = secrets
        .into_iter()
        .map(|(name, entry)| {
            let entry = entry.unwrap_or_default();
            WorkflowSecret {
                name,
                description: entry.description,
                required: entry.required,
            }
        })
        .collect::<Vec<_>>();

    let outputs = outputs
        .into_iter()
        .map(|(name, entry)| WorkflowOutput {
            name,
            description: entry.map(|entry| entry.description).unwrap_or_default(),
        })
        .collect::<Vec<_>>();

    let permissions = raw
        .permissions
        .map(RawPermissions::into_rows)
        .unwrap_or_default();

    tracing::debug!(
        inputs = inputs.len(),
        secrets = secrets.len(),
        outputs = outputs.len(),
        permissions = permissions.len(),
        "parsed workflow interface"
    );
    Ok(WorkflowDoc {
        inputs,
        secrets,
        outputs,
        permissions,
    })
}
