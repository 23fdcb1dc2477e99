use std::process::Command;
use std::{env, fs, path::PathBuf};

use tempfile::tempdir;

fn cli_bin_path() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_waymark-cli") {
        return PathBuf::from(path);
    }
    if let Ok(path) = env::var("CARGO_BIN_EXE_waymark_cli") {
        return PathBuf::from(path);
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("workspace root");
    let bin_name = if cfg!(windows) {
        "waymark-cli.exe"
    } else {
        "waymark-cli"
    };
    let fallback = workspace_root.join("target").join("debug").join(bin_name);
    assert!(
        fallback.exists(),
        "waymark-cli binary not found at {}",
        fallback.display()
    );
    fallback
}

#[test]
fn filter_process_contract_prints_only_matching_records() {
    // Pseudocode:
    // Given a records file with one stadium and one tickets entry
    // When running `waymark-cli filter <records> --query stadium`
    // Then process exits with success and prints only the stadium record.
    let dir = tempdir().expect("tempdir");
    let records = dir.path().join("faq.json");
    fs::write(
        &records,
        concat!(
            "[",
            "{\"id\":1,\"question\":\"Where is the stadium?\",",
            "\"answer\":\"North of the old town.\",",
            "\"category\":\"Stadium\",\"popularity\":10},",
            "{\"id\":2,\"question\":\"How do I buy tickets?\",",
            "\"answer\":\"Online or at the gate.\",",
            "\"category\":\"Tickets\",\"popularity\":5}",
            "]",
        ),
    )
    .expect("write records");

    let output = Command::new(cli_bin_path())
        .args([
            "filter",
            records.to_str().expect("records path"),
            "--query",
            "stadium",
        ])
        .output()
        .expect("run filter");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Where is the stadium?"));
    assert!(!stdout.contains("How do I buy tickets?"));
}

#[test]
fn outline_process_contract_prints_assigned_ids() {
    // Pseudocode:
    // Given a markdown article with two tracked headings
    // When running `waymark-cli outline <article>`
    // Then process exits with success and prints the slug ids.
    let dir = tempdir().expect("tempdir");
    let article = dir.path().join("lima.md");
    fs::write(&article, "# Lima\n\n## Overview\n\n## Getting There\n").expect("write article");

    let output = Command::new(cli_bin_path())
        .args(["outline", article.to_str().expect("article path")])
        .output()
        .expect("run outline");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"overview\""));
    assert!(stdout.contains("\"getting-there\""));
}

#[test]
fn scan_missing_root_process_contract_emits_error_payload_and_fails() {
    // Pseudocode:
    // Given a content root that does not exist
    // When running `waymark-cli scan <root>`
    // Then process exits non-zero with a payload line on stderr.
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("absent");

    let output = Command::new(cli_bin_path())
        .args(["scan", root.to_str().expect("root path")])
        .output()
        .expect("run scan");

    assert!(
        !output.status.success(),
        "stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"code\":\"NOT_FOUND\""));
    assert!(stderr.contains("not found: content root"));
}
