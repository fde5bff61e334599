use jsxcat::{CollectError, CollectOptions, CollectorBuilder, collect_into};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn quiet(root: &Path) -> CollectOptions {
    CollectorBuilder::new(root).progress(false).build()
}

fn run(options: &CollectOptions) -> String {
    let mut out = Vec::new();
    collect_into(options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn block(rel: &str, body: &str) -> String {
    format!("--- File: {rel} ---\n\n{body}\n\n--- End of File: {rel} ---\n\n")
}

#[test]
fn test_node_modules_is_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.jsx"), "X").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/b.js"), "Y").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.js"), "Z").unwrap();
    let output = run(&quiet(dir.path()));
    assert_eq!(output, block("a.jsx", "X") + &block("sub/c.js", "Z"));
    assert!(!output.contains("b.js"));
}
#[test]
fn test_nested_node_modules_is_skipped() {
    let dir = tempdir().unwrap();
    let deep = dir.path().join("packages/ui/node_modules/react");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("index.js"), "module.exports = {}").unwrap();
    fs::write(dir.path().join("packages/ui/Button.jsx"), "<button/>").unwrap();
    let mut out = Vec::new();
    let report = collect_into(&quiet(dir.path()), &mut out).unwrap();
    assert_eq!(report.files, vec!["packages/ui/Button.jsx"]);
}
#[test]
fn test_root_named_node_modules_is_walked() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("node_modules");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("lib.js"), "1").unwrap();
    let output = run(&quiet(&root));
    assert_eq!(output, block("lib.js", "1"));
}
#[test]
fn test_suffix_filter() {
    let dir = tempdir().unwrap();
    for name in ["bar.JSX", "data.json", "weirdjs", "app.min.js", "x.jsx", "notes.txt"] {
        fs::write(dir.path().join(name), name).unwrap();
    }
    fs::create_dir(dir.path().join("folder.js")).unwrap();
    let mut out = Vec::new();
    let report = collect_into(&quiet(dir.path()), &mut out).unwrap();
    assert_eq!(report.files, vec!["app.min.js", "x.jsx"]);
}
#[test]
fn test_content_is_verbatim() {
    let dir = tempdir().unwrap();
    let source = "const a = 1;\r\n\tconst b = '\u{1F600}';";
    fs::write(dir.path().join("raw.js"), source).unwrap();
    let output = run(&quiet(dir.path()));
    assert_eq!(output, block("raw.js", source));
}
#[test]
fn test_invalid_utf8_becomes_error_block() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a_bad.js"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("b_good.js"), "ok").unwrap();
    let mut out = Vec::new();
    let report = collect_into(&quiet(dir.path()), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert_eq!(report.read_errors, 1);
    assert_eq!(report.files, vec!["a_bad.js", "b_good.js"]);
    assert!(output.starts_with("--- File: a_bad.js ---\n\nError reading file: "));
    assert!(output.ends_with(&block("b_good.js", "ok")));
}
#[test]
fn test_custom_exclusions_and_suffixes() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("build/out.ts"), "skip").unwrap();
    fs::write(dir.path().join("main.ts"), "keep").unwrap();
    fs::write(dir.path().join("main.js"), "other").unwrap();
    let options = CollectorBuilder::new(dir.path())
        .exclude_dirs(vec!["build".into()])
        .suffixes(vec![".ts".into()])
        .progress(false)
        .build();
    let output = run(&options);
    assert_eq!(output, block("main.ts", "keep"));
}
#[test]
fn test_invalid_exclusion_pattern() {
    let dir = tempdir().unwrap();
    let options = CollectorBuilder::new(dir.path())
        .exclude_dirs(vec!["[".into()])
        .progress(false)
        .build();
    let err = collect_into(&options, Vec::new()).unwrap_err();
    assert!(matches!(err, CollectError::Walk(_)));
}
#[cfg(unix)]
#[test]
fn test_symlinked_file_is_collected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "A").unwrap();
    std::os::unix::fs::symlink(dir.path().join("a.js"), dir.path().join("b.js")).unwrap();
    let output = run(&quiet(dir.path()));
    assert_eq!(output, block("a.js", "A") + &block("b.js", "A"));
}
#[cfg(unix)]
#[test]
fn test_dangling_symlink_becomes_error_block() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "A").unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone.js"), dir.path().join("b.js")).unwrap();
    let mut out = Vec::new();
    let report = collect_into(&quiet(dir.path()), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert_eq!(report.files, vec!["a.js", "b.js"]);
    assert_eq!(report.read_errors, 1);
    assert!(output.starts_with(&block("a.js", "A")));
    assert!(output.contains("--- File: b.js ---\n\nError reading file: "));
    assert!(output.ends_with("\n\n--- End of File: b.js ---\n\n"));
}
#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    fs::write(dir.path().join("real/x.js"), "x").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("lib.js")).unwrap();
    let mut out = Vec::new();
    let report = collect_into(&quiet(dir.path()), &mut out).unwrap();
    assert_eq!(report.files, vec!["real/x.js"]);
    assert_eq!(report.read_errors, 0);
}
