//! Projection of the interface model into an output grammar.
//!
//! Every formatter can render the whole document or any single section on its
//! own; the injector relies on the latter for per-section markers.

use crate::config::{OutputFormat, RenderConfig};
use crate::error::ActdocsResult;
use crate::manifest::{Manifest, SectionKind};

mod json;
mod markdown;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

pub trait Formatter {
    /// Render every section of the manifest in output order.
    fn document(&self, manifest: &Manifest) -> ActdocsResult<String>;

    /// Render one section, or `None` when the manifest kind has no such section
    /// or the formatter chose to leave it out.
    fn section(&self, manifest: &Manifest, kind: SectionKind) -> ActdocsResult<Option<String>>;
}

pub fn formatter(config: &RenderConfig) -> Box<dyn Formatter> {
    match config.format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(config.omit)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
