//! Tri-state scalar used for every optional manifest field.
//!
//! A field is either absent from the manifest or present with text, and the
//! present text may be empty. The distinction survives every projection: JSON
//! keeps `null` apart from `""`, and Markdown cells render absent and empty
//! differently depending on the column role.
//!
//! Present values are decoded through the deserializer's string path, which
//! for YAML hands back the raw scalar text (`3.10`, `0x1F`, `True`) instead of
//! a resolved number or bool. Sequences and mappings are rejected.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NullableText {
    #[default]
    Absent,
    Present(String),
}

impl NullableText {
    pub fn present(text: impl Into<String>) -> Self {
        Self::Present(text.into())
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present(text) => Some(text.as_str()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True only for the literal lexeme `true`.
    pub fn is_true(&self) -> bool {
        self.as_deref() == Some("true")
    }

    /// Description column: plain text, nothing for absent.
    pub fn description_cell(&self) -> String {
        match self.as_deref() {
            None => String::new(),
            Some(text) if is_multiline(text) => pre_block(text),
            Some(text) => text.to_string(),
        }
    }

    /// Default and Type columns: backticked text, `n/a` for absent.
    pub fn code_cell(&self) -> String {
        match self.as_deref() {
            None => "n/a".to_string(),
            Some(text) if is_multiline(text) => pre_block(text),
            Some(text) => format!("`{text}`"),
        }
    }

    pub fn required_cell(&self) -> &'static str {
        if self.is_true() {
            "yes"
        } else {
            "no"
        }
    }

    /// Body of a `## Description` heading, kept verbatim apart from trailing
    /// whitespace.
    pub fn heading_body(&self) -> String {
        match self.as_deref() {
            None => "N/A".to_string(),
            Some(text) => text.trim_end().to_string(),
        }
    }
}

fn is_multiline(text: &str) -> bool {
    text.contains('\n')
}

fn pre_block(text: &str) -> String {
    let text = text.replace('\r', "");
    let text = text.trim_end_matches('\n');
    format!("<pre>{}</pre>", text.replace('\n', "<br>"))
}

impl Serialize for NullableText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Present(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for NullableText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.map_or(Self::Absent, Self::present))
    }
}
