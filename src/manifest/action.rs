//! Custom action schema (`action.yml`) and its interface model.
use crate::nullable::NullableText;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Interface of a custom action. Field order is the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionDoc {
    pub description: NullableText,
    pub inputs: Vec<ActionInput>,
    pub outputs: Vec<ActionOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub default: NullableText,
    pub description: NullableText,
    pub required: NullableText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutput {
    pub name: String,
    pub description: NullableText,
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(default)]
    name: NullableText,
    #[serde(default)]
    description: NullableText,
    inputs: Option<IndexMap<String, Option<RawInput>>>,
    outputs: Option<IndexMap<String, Option<RawOutput>>>,
    runs: Option<RawRuns>,
}

#[derive(Default, Deserialize)]
struct RawInput {
    #[serde(default)]
    default: NullableText,
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

#[derive(Deserialize)]
struct RawRuns {
    #[serde(default)]
    using: NullableText,
    steps: Option<Vec<serde_yaml::Value>>,
}

pub(super) fn parse(source: &str) -> Result<ActionDoc, serde_yaml::Error> {
    let raw: RawAction = serde_yaml::from_str(source)?;

    if let Some(runs) = &raw.runs {
        tracing::debug!(
            action = raw.name.as_deref().unwrap_or_default(),
            using = runs.using.as_deref().unwrap_or_default(),
            steps = runs.steps.as_ref().map_or(0, Vec::len),
            "decoded action runs"
        );
    }

    let inputs = raw
        .inputs
        .unwrap_or_default()
        .into_iter()
        .map(|(name, entry)| {
            let entry = entry.unwrap_or_default();
            ActionInput {
                name,
                default: entry.default,
                description: entry.description,
                required: entry.required,
            }
        })
        .collect::<Vec<_>>();

    let outputs = raw
        .outputs
        .unwrap_or_default()
        .into_iter()
        .map(|(name, entry)| ActionOutput {
            name,
            description: entry.map(|entry| entry.description).unwrap_or_default(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        inputs = inputs.len(),
        outputs = outputs.len(),
        "parsed action interface"
    );
    Ok(ActionDoc {
        description: raw.description,
        inputs,
        outputs,
    })
}
