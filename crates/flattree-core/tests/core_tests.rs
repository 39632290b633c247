use flattree_core::{
    DocumentEntry, FlattenConfig, FlattenPlan, FlattenedDocument, RootPolicy, SkipKind,
};
use std::path::PathBuf;

#[test]
fn test_output_file_name_derivation() {
    let config = FlattenConfig::new("/some/root", "emulauncher");
    assert_eq!(config.output_file_name(), "source-emulauncher.txt");
}

#[test]
fn test_output_path_honors_output_dir() {
    let config = FlattenConfig::builder()
        .root("/some/root")
        .output_name("res")
        .output_dir("/tmp/out")
        .build()
        .unwrap();

    assert_eq!(config.output_path(), PathBuf::from("/tmp/out/source-res.txt"));
}

#[test]
fn test_default_exclusion_applies_at_any_depth() {
    // Exclusion matches the bare file name, so depth never matters.
    let config = FlattenConfig::new("/root", "x");
    assert!(config.is_excluded(".DS_Store"));
}

#[test]
fn test_scenario_document() {
    // Root with a.txt "hello" and sub/b.txt "world".
    let mut doc = FlattenedDocument::new();
    doc.push(DocumentEntry::new("sub/b.txt", "world"));
    doc.push(DocumentEntry::new("a.txt", "hello"));
    doc.sort_by_label();

    assert_eq!(doc.render(), "a.txt:\nhello\n\nsub/b.txt:\nworld");
}

#[test]
fn test_plan_round_trips_through_json() {
    let plan = FlattenPlan::new(vec![
        FlattenConfig::new("/a", "first"),
        FlattenConfig::new("/b", "second"),
    ])
    .with_policy(RootPolicy::Skip);

    let json = serde_json::to_string(&plan).unwrap();
    let back: FlattenPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(back.targets.len(), 2);
    assert_eq!(back.on_bad_root, RootPolicy::Skip);
    assert_eq!(back.targets[0].output_name, "first");
}

#[test]
fn test_plan_policy_defaults_to_fail_when_absent() {
    let json = r#"{"targets":[{"root":"/a","output_name":"a"}]}"#;
    let plan: FlattenPlan = serde_json::from_str(json).unwrap();

    assert_eq!(plan.on_bad_root, RootPolicy::Fail);
    assert!(plan.targets[0].sort_entries);
    assert!(plan.targets[0].is_excluded(".DS_Store"));
}

#[test]
fn test_skip_kind_serializes() {
    let json = serde_json::to_string(&SkipKind::Vanished).unwrap();
    assert_eq!(json, "\"Vanished\"");
}
