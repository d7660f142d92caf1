use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Action,
    Workflow,
}

/// Decide the manifest kind from raw text. `workflow_call:` is checked before
/// `runs:`, and the first hit wins.
pub fn classify(source: &str) -> Option<ManifestKind> {
    static WORKFLOW: OnceLock<Regex> = OnceLock::new();
    static ACTION: OnceLock<Regex> = OnceLock::new();

    let workflow = WORKFLOW
        .get_or_init(|| Regex::new(r"(?m)^\s*workflow_call:").expect("regex for workflow_call key"));
    if workflow.is_match(source) {
        return Some(ManifestKind::Workflow);
    }
    let action = ACTION.get_or_init(|| Regex::new(r"(?m)^\s*runs:").expect("regex for runs key"));
    if action.is_match(source) {
        return Some(ManifestKind::Action);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_action() {
        let source = "name: Demo\nruns:\n  using: composite\n  steps: []\n";
        assert_eq!(classify(source), Some(ManifestKind::Action));
    }

    #[test]
    fn detects_nested_workflow_call() {
        let source = "on:\n  push:\n  workflow_call:\n    inputs: {}\n";
        assert_eq!(classify(source), Some(ManifestKind::Workflow));
    }

    #[test]
    fn workflow_wins_when_both_keys_appear() {
        let source = "on:\n  workflow_call:\njobs:\n  build:\n    runs: odd\n";
        assert_eq!(classify(source), Some(ManifestKind::Workflow));
    }

    #[test]
    fn repeated_calls_agree() {
        let source = "runs:\n  using: node20\n";
        assert_eq!(classify(source), classify(source));
        assert_eq!(classify("on:\n  workflow_call:\n"), Some(ManifestKind::Workflow));
        assert_eq!(classify(source), Some(ManifestKind::Action));
    }

    #[test]
    fn keys_must_start_a_line() {
        assert_eq!(classify("description: uses runs: inline\n"), None);
        assert_eq!(classify("name: x # workflow_call:\n"), None);
        assert_eq!(classify(""), None);
    }
}
