//! Splice generated documentation into a host Markdown file.
//!
//! Regions are delimited by whole-line HTML comments. `<!-- actdocs start -->`
//! / `<!-- actdocs end -->` receive the full document; the per-section pairs
//! (`<!-- actdocs inputs start -->` and so on) receive a single section. The
//! host text outside the regions is kept, except that each region is set off
//! by exactly one blank line on either side. The host's line ending (LF or
//! CRLF, taken from its first line) is used for every emitted line.
use crate::error::{ActdocsError, ActdocsResult};
use crate::manifest::{Manifest, SectionKind};
use crate::render::Formatter;
use crate::util::{read_text, write_text};
use std::io::Write;
use std::path::Path;

/// What a marker pair is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerScope {
    Document,
    Section(SectionKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub scope: MarkerScope,
    pub begin: String,
    pub end: String,
}

impl Marker {
    fn document() -> Self {
        Self {
            scope: MarkerScope::Document,
            begin: "<!-- actdocs start -->".to_string(),
            end: "<!-- actdocs end -->".to_string(),
        }
    }

    fn section(kind: SectionKind) -> Self {
        let name = kind.marker_name();
        Self {
            scope: MarkerScope::Section(kind),
            begin: format!("<!-- actdocs {name} start -->"),
            end: format!("<!-- actdocs {name} end -->"),
        }
    }

    fn is_begin(&self, line: &str) -> bool {
        line.trim() == self.begin
    }

    fn is_end(&self, line: &str) -> bool {
        line.trim() == self.end
    }
}

/// Markers recognised for a manifest: the document pair plus one pair per
/// section the manifest kind has.
pub fn markers_for(manifest: &Manifest) -> Vec<Marker> {
    std::iter::once(Marker::document())
        .chain(manifest.sections().iter().map(|kind| Marker::section(*kind)))
        .collect()
}

/// Replace every marked region in `host`. Returns `None` when the host has no
/// marker pair at all, in which case it must be left untouched.
pub fn splice<F>(
    host: &str,
    host_path: &Path,
    markers: &[Marker],
    mut content_for: F,
) -> ActdocsResult<Option<String>>
where
    F: FnMut(MarkerScope) -> ActdocsResult<String>,
{
    let lines = host.lines().collect::<Vec<_>>();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut regions = 0usize;
    let mut pad_next = false;
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        let Some(marker) = markers.iter().find(|marker| marker.is_begin(line)) else {
            if pad_next {
                if line.trim().is_empty() {
                    idx += 1;
                    continue;
                }
                out.push(String::new());
                pad_next = false;
            }
            out.push(line.to_string());
            idx += 1;
            continue;
        };

        let end = lines[idx + 1..]
            .iter()
            .position(|candidate| marker.is_end(candidate))
            .map(|offset| idx + 1 + offset)
            .ok_or_else(|| ActdocsError::UnterminatedMarker {
                marker: marker.begin.clone(),
                path: host_path.to_path_buf(),
            })?;

        while out.last().is_some_and(|last| last.trim().is_empty()) {
            out.pop();
        }
        if !out.is_empty() {
            out.push(String::new());
        }

        let content = content_for(marker.scope)?;
        let content = content.trim();
        out.push(marker.begin.clone());
        if !content.is_empty() {
            out.push(String::new());
            out.extend(content.lines().map(str::to_string));
            out.push(String::new());
        }
        out.push(marker.end.clone());

        regions += 1;
        pad_next = true;
        idx = end + 1;
    }

    tracing::debug!(regions, host = %host_path.display(), "spliced marker regions");
    if regions == 0 {
        return Ok(None);
    }
    let eol = line_ending(host);
    let mut text = out.join(eol);
    text.push_str(eol);
    Ok(Some(text))
}

/// Line terminator of the host, taken from its first line.
fn line_ending(host: &str) -> &'static str {
    match host.find('\n') {
        Some(idx) if host[..idx].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Options for a single inject run.
pub struct InjectRequest<'a> {
    pub host_path: &'a Path,
    pub dry_run: bool,
}

/// Rewrite the host file, or echo the result to `out` on a dry run.
pub fn inject<W: Write>(
    request: &InjectRequest<'_>,
    manifest: &Manifest,
    formatter: &dyn Formatter,
    out: &mut W,
) -> anyhow::Result<()> {
    let host = read_text(request.host_path)?;
    let markers = markers_for(manifest);
    let spliced = splice(&host, request.host_path, &markers, |scope| match scope {
        MarkerScope::Document => formatter.document(manifest),
        MarkerScope::Section(kind) => Ok(formatter.section(manifest, kind)?.unwrap_or_default()),
    })?;

    if request.dry_run {
        out.write_all(spliced.as_deref().unwrap_or(host.as_str()).as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    match spliced {
        Some(text) if text != host => write_text(request.host_path, &text)?,
        Some(_) => tracing::debug!(host = %request.host_path.display(), "host already up to date"),
        None => tracing::debug!(host = %request.host_path.display(), "no markers found; host left unchanged"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "inject_tests.rs"]
mod tests;
