//! Commit validation and the save collaborator

use anyhow::{anyhow, Result};

use address_groups::editor::{CommitOutcome, GroupEditor, RejectReason};
use address_groups::Group;

use super::common::sample_group;

#[test]
fn test_commit_saves_trimmed_name_and_exact_list() {
    let mut editor = GroupEditor::new();
    editor.open(Some(sample_group()));
    editor.set_name("  Vendors  ");
    editor.add_manual_entry("0x333", "7");
    editor.delete_entry("a1");

    let expected = editor.draft().unwrap().addresses.clone();
    let mut saved: Vec<Group> = Vec::new();
    let outcome = editor.commit(&mut |g: Group| -> Result<()> {
        saved.push(g);
        Ok(())
    });

    assert_eq!(outcome, CommitOutcome::Saved);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, "g1");
    assert_eq!(saved[0].name, "Vendors");
    assert_eq!(saved[0].addresses, expected);
    assert!(!editor.is_open());
}

#[test]
fn test_commit_with_blank_name_never_saves() {
    for name in ["", "   ", "\t\n"] {
        let mut editor = GroupEditor::new();
        editor.open(Some(sample_group()));
        editor.set_name(name);

        let mut calls = 0;
        let outcome = editor.commit(&mut |_g: Group| -> Result<()> {
            calls += 1;
            Ok(())
        });

        assert_eq!(outcome, CommitOutcome::Rejected(RejectReason::EmptyName));
        assert_eq!(calls, 0);
        assert!(editor.is_open());
    }
}

#[test]
fn test_commit_without_group_is_rejected() {
    let mut editor = GroupEditor::new();
    editor.open(None);
    editor.set_name("Something");

    let outcome = editor.commit(&mut |_g: Group| -> Result<()> { panic!("must not save") });

    assert_eq!(outcome, CommitOutcome::Rejected(RejectReason::NoGroup));
    assert!(editor.is_open());
}

#[test]
fn test_sink_failure_keeps_dialog_open() {
    let mut editor = GroupEditor::new();
    editor.open(Some(sample_group()));
    editor.add_manual_entry("0x333", "");

    let outcome = editor.commit(&mut |_g: Group| -> Result<()> { Err(anyhow!("disk full")) });

    match outcome {
        CommitOutcome::Failed(message) => assert!(message.contains("disk full")),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(editor.is_open());
    assert_eq!(editor.draft().unwrap().addresses.len(), 3);
}

#[test]
fn test_commit_into_file_sink() {
    use address_groups::store::{load_group, FileGroupSink};

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("group.json");

    let mut editor = GroupEditor::new();
    editor.open(Some(sample_group()));
    editor.add_manual_entry("0x333", "");

    let mut sink = FileGroupSink::new(&path);
    assert!(editor.commit(&mut sink).is_saved());

    let stored = load_group(&path).unwrap();
    assert_eq!(stored.addresses.len(), 3);
    assert_eq!(stored.addresses[2].id, None);
}
