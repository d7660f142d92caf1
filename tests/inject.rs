//! End-to-end checks for `actdocs inject`.

mod common;

use common::{fixture, run, stderr, stdout, temp_file};
use pretty_assertions::assert_eq;
use std::ffi::OsStr;

const HOST: &str = "# Demo\n<!-- actdocs start -->\nOLD\n<!-- actdocs end -->\nafter\n";

#[test]
fn dry_run_prints_and_leaves_host_unchanged() {
    let (_dir, host) = temp_file("README.md", HOST);
    let output = run([
        "inject".as_ref(),
        "--file".as_ref(),
        host.as_os_str(),
        "--dry-run".as_ref(),
        "--omit".as_ref(),
        fixture("empty-workflow.yml").as_os_str(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "# Demo\n\n<!-- actdocs start -->\n<!-- actdocs end -->\n\nafter\n"
    );
    assert_eq!(std::fs::read_to_string(&host).expect("read host"), HOST);
}

#[test]
fn inject_rewrites_host_and_is_stable() {
    let (_dir, host) = temp_file("README.md", HOST);
    let manifest = fixture("action.yml");
    let args: [&OsStr; 5] = [
        "inject".as_ref(),
        "-f".as_ref(),
        host.as_os_str(),
        "--sort".as_ref(),
        manifest.as_os_str(),
    ];

    let first = run(args);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert!(stdout(&first).is_empty());
    let after_first = std::fs::read_to_string(&host).expect("read host");
    assert!(after_first.starts_with("# Demo\n\n<!-- actdocs start -->\n\n## Description\n\nA demo action.\n"));
    assert!(after_first.ends_with("</pre> |\n\n<!-- actdocs end -->\n\nafter\n"));
    assert!(!after_first.contains("OLD"));

    let second = run(args);
    assert!(second.status.success(), "stderr: {}", stderr(&second));
    assert_eq!(
        std::fs::read_to_string(&host).expect("read host"),
        after_first
    );
}

#[test]
fn per_section_markers() {
    let host_text = "\
Intro
<!-- actdocs permissions start -->
<!-- actdocs permissions end -->
<!-- actdocs secrets start -->
stale
<!-- actdocs secrets end -->
";
    let (_dir, host) = temp_file("README.md", host_text);
    let output = run([
        "inject".as_ref(),
        "--file".as_ref(),
        host.as_os_str(),
        "--dry-run".as_ref(),
        "--sort".as_ref(),
        fixture("workflow.yml").as_os_str(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let expected = "\
Intro

<!-- actdocs permissions start -->

## Permissions

| Scope | Access |
| :--- | :---- |
| contents | read |
| pull-requests | write |

<!-- actdocs permissions end -->

<!-- actdocs secrets start -->

## Secrets

| Name | Description | Required |
| :--- | :---------- | :------: |
| token | Publishing token. | yes |

<!-- actdocs secrets end -->
";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn host_without_markers_is_untouched() {
    let original = "# Nothing to see\n\n\n";
    let (_dir, host) = temp_file("README.md", original);
    let output = run([
        "inject".as_ref(),
        "--file".as_ref(),
        host.as_os_str(),
        fixture("action.yml").as_os_str(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(std::fs::read_to_string(&host).expect("read host"), original);
}

#[test]
fn crlf_host_stays_crlf() {
    let original = "# Demo\r\n<!-- actdocs start -->\r\n<!-- actdocs end -->\r\nafter\r\n";
    let (_dir, host) = temp_file("README.md", original);
    let manifest = fixture("action.yml");
    let args: [&OsStr; 4] = [
        "inject".as_ref(),
        "--file".as_ref(),
        host.as_os_str(),
        manifest.as_os_str(),
    ];

    let first = run(args);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    let after_first = std::fs::read_to_string(&host).expect("read host");
    assert!(after_first.starts_with("# Demo\r\n\r\n<!-- actdocs start -->\r\n\r\n## Description\r\n"));
    assert!(after_first.ends_with("<!-- actdocs end -->\r\n\r\nafter\r\n"));
    assert_eq!(after_first.matches('\n').count(), after_first.matches("\r\n").count());

    let second = run(args);
    assert!(second.status.success(), "stderr: {}", stderr(&second));
    assert_eq!(std::fs::read_to_string(&host).expect("read host"), after_first);
}

#[test]
fn unterminated_marker_fails_without_writing() {
    let original = "<!-- actdocs start -->\nkeep\n";
    let (_dir, host) = temp_file("README.md", original);
    let output = run([
        "inject".as_ref(),
        "--file".as_ref(),
        host.as_os_str(),
        fixture("action.yml").as_os_str(),
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("without a matching end marker"));
    assert_eq!(std::fs::read_to_string(&host).expect("read host"), original);
}

#[test]
fn missing_host_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let host = dir.path().join("README.md");
    let output = run([
        "inject".as_ref(),
        "--file".as_ref(),
        host.as_os_str(),
        "--dry-run".as_ref(),
        fixture("action.yml").as_os_str(),
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read"));
}

#[test]
fn missing_manifest_path_prints_usage() {
    let output = run(["inject", "--file", "README.md"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}
