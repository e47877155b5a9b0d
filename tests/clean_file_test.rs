//! Integration tests for file-level cleaning.

use reflow::{
    clean_batch, clean_file, clean_file_with_options, Error, ParseOptions, RenderOptions,
};
use std::fs;
use tempfile::TempDir;

const SOURCE: &str = r#"<html><body>
    <div class="ssdpage">
        <div class="ssddiv" style="top:50pt;left:40pt"><span class="ssdspan">Introduction</span></div>
        <div class="ssddiv" style="top:90pt;left:40pt"><span class="ssdspan">Read this first.</span></div>
    </div>
</body></html>"#;

#[test]
fn test_clean_file_writes_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("manual.html");
    let output = dir.path().join("manual-cleaned.html");
    fs::write(&input, SOURCE).unwrap();

    clean_file(&input, &output).unwrap();

    let cleaned = fs::read_to_string(&output).unwrap();
    assert!(cleaned.starts_with("<!DOCTYPE html>"));
    assert!(cleaned.contains("<h2>Introduction</h2>"));
    assert!(cleaned.contains("<p>Read this first.</p>"));
}

#[test]
fn test_clean_file_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("manual.html");
    let output = dir.path().join("manual-cleaned.html");
    fs::write(&input, SOURCE).unwrap();
    fs::write(&output, "stale content").unwrap();

    clean_file(&input, &output).unwrap();

    let cleaned = fs::read_to_string(&output).unwrap();
    assert!(!cleaned.contains("stale content"));
    assert!(cleaned.contains("<h2>Introduction</h2>"));
}

#[test]
fn test_clean_file_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does-not-exist.html");
    let output = dir.path().join("out.html");

    let result = clean_file(&input, &output);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!output.exists());
}

#[test]
fn test_clean_file_with_custom_title() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("manual.html");
    let output = dir.path().join("out.html");
    fs::write(&input, SOURCE).unwrap();

    let render_options = RenderOptions::new().with_title("ER-101 User Manual");
    clean_file_with_options(&input, &output, ParseOptions::default(), &render_options).unwrap();

    let cleaned = fs::read_to_string(&output).unwrap();
    assert!(cleaned.contains("<title>ER-101 User Manual</title>"));
}

#[test]
fn test_clean_batch_processes_pairs_in_order() {
    let dir = TempDir::new().unwrap();
    let mut jobs = Vec::new();
    for name in ["a", "b", "c"] {
        let input = dir.path().join(format!("{name}.html"));
        let output = dir.path().join(format!("{name}-cleaned.html"));
        fs::write(&input, SOURCE).unwrap();
        jobs.push((input, output));
    }

    clean_batch(&jobs).unwrap();

    for (_, output) in &jobs {
        let cleaned = fs::read_to_string(output).unwrap();
        assert!(cleaned.contains("<h2>Introduction</h2>"));
    }
}

#[test]
fn test_clean_batch_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    let good_in = dir.path().join("good.html");
    fs::write(&good_in, SOURCE).unwrap();

    let jobs = vec![
        (good_in.clone(), dir.path().join("good-cleaned.html")),
        (dir.path().join("missing.html"), dir.path().join("missing-cleaned.html")),
        (good_in, dir.path().join("never-cleaned.html")),
    ];

    let result = clean_batch(&jobs);
    assert!(matches!(result, Err(Error::Io(_))));

    // Work before the failure stays on disk; work after it never ran
    assert!(dir.path().join("good-cleaned.html").exists());
    assert!(!dir.path().join("never-cleaned.html").exists());
}

#[test]
fn test_empty_source_cleans_to_empty_body() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.html");
    let output = dir.path().join("empty-cleaned.html");
    fs::write(&input, "<html><body></body></html>").unwrap();

    clean_file(&input, &output).unwrap();

    let cleaned = fs::read_to_string(&output).unwrap();
    assert!(cleaned.contains("<body></body>"));
}
